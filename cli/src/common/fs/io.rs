//! # droidmod Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the generator, the template renderer
//! and the settings registrar. Each wrapper attaches the offending path to its
//! error so the message printed at the top level tells the user what failed.
//!
//! - **`ensure_dir_exists`**: `mkdir -p` semantics. An existing directory is
//!   not an error; an existing non-directory is.
//! - **`read_file_to_string`**: `fs::read_to_string` with context.
//! - **`write_string_to_file`**: Creates the parent directory, then writes
//!   (overwriting any previous content).
//!
use crate::core::error::{DroidmodError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ensures that a directory exists at `path`, creating missing parents.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        debug!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        anyhow::bail!(DroidmodError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    } else {
        debug!("Directory already exists: {}", path.display());
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Writes `content` to `path`, creating the parent directory first.
///
/// An existing file is overwritten.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {}", path.display()))?;
    debug!("Wrote content to file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("src/main/java/org/root");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_already_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let existing_dir = base_dir.path().join("existing");
        fs::create_dir(&existing_dir)?;
        ensure_dir_exists(&existing_dir)?;
        assert!(existing_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_read_write_string_to_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nested/settings.gradle.kts");
        let content = "include(\"app\")";
        write_string_to_file(&file_path, content)?;
        assert_eq!(read_file_to_string(&file_path)?, content);
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.txt"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nonexistent.txt"));
        Ok(())
    }
}
