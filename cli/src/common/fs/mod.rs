//! # droidmod Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for filesystem helpers. Everything currently lives in `io`:
//! ensuring directories exist, reading files to strings and writing strings to
//! files, each with error context naming the path involved.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(&module_root.join("src/main/java"))?;
//! io::write_string_to_file(&module_root.join(".gitignore"), "/build\n")?;
//! ```
//!

/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
