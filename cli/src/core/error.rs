//! # droidmod Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout droidmod. Command
//! handlers propagate failures as `anyhow::Error` with context attached, while
//! the conditions callers need to recognise (an existing module directory, an
//! invalid identifier) are expressed as variants of `DroidmodError` and can be
//! recovered with `downcast_ref`.
//!
//! ## Architecture
//!
//! - `DroidmodError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Registration failures have their own type (`RegistrationError`, in the
//! module command's `settings` utilities) because they are reported to the
//! user but never abort a run.
//!
//! ## Examples
//!
//! ```rust
//! if target.exists() {
//!     return Err(DroidmodError::ModuleAlreadyExists { path: target.to_path_buf() })?;
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the droidmod application.
#[derive(Error, Debug)]
pub enum DroidmodError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Invalid module name: {0}")]
    InvalidModuleName(String),

    #[error("Module directory '{}' already exists. Choose another module name.", .path.display())]
    ModuleAlreadyExists { path: PathBuf },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
