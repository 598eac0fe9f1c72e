//! # droidmod Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Cross-cutting helpers used by the command handlers and the core modules:
//!
//! - **`fs`**: Filesystem operations (directory creation, reading and writing files).
//! - **`ui`**: Terminal interaction (line prompts).
//!
//! ```rust
//! use crate::common::{fs::io, ui};
//!
//! io::ensure_dir_exists(&module_root)?;
//! let name = ui::prompt_line("Module name: ")?;
//! ```
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for terminal interaction.
pub mod ui;
