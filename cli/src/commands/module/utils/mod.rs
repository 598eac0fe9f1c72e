//! # Module Command Utilities
//!
//! File: cli/src/commands/module/utils/mod.rs
//!
//! ## Overview
//!
//! The logic behind `droidmod module ...`, kept apart from argument parsing so
//! it can be tested without the CLI:
//!
//! - `naming`: Derives path, registration key, package and namespace from a module identifier.
//! - `settings`: Reads and rewrites the Gradle settings file (`include(...)` registration).
//! - `layout`: The fixed directory and file set of an Android library module.
//! - `generator`: Orchestrates a full module generation.
//! - `tree_printer`: Renders a generated module as a directory tree.
//!
//! `resolve_project_root` is shared by all subcommands.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod generator;
pub mod layout;
pub mod naming;
pub mod settings;
pub mod tree_printer;

/// Directory where the project config search starts: `--root` if given, else the current directory.
pub fn search_start(explicit_root: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    Ok(match explicit_root {
        Some(root) => cwd.join(root),
        None => cwd,
    })
}

/// The project root the command operates on.
///
/// Precedence: `--root`, then the directory of the discovered `.droidmod.toml`,
/// then the current directory.
pub fn resolve_project_root(explicit_root: Option<&Path>, cfg: &Config) -> Result<PathBuf> {
    let root = match (explicit_root, &cfg.project_root) {
        (Some(_), _) => search_start(explicit_root)?,
        (None, Some(config_root)) => config_root.clone(),
        (None, None) => search_start(None)?,
    };
    if !root.is_dir() {
        anyhow::bail!(
            "Project root '{}' does not exist or is not a directory.",
            root.display()
        );
    }
    debug!("Using project root: {}", root.display());
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_root_wins() -> Result<()> {
        let explicit = tempdir()?;
        let configured = tempdir()?;
        let cfg = Config {
            project_root: Some(configured.path().to_path_buf()),
            ..Default::default()
        };
        let root = resolve_project_root(Some(explicit.path()), &cfg)?;
        assert_eq!(root, explicit.path());
        Ok(())
    }

    #[test]
    fn test_config_root_used_without_flag() -> Result<()> {
        let configured = tempdir()?;
        let cfg = Config {
            project_root: Some(configured.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(resolve_project_root(None, &cfg)?, configured.path());
        Ok(())
    }

    #[test]
    fn test_missing_root_rejected() {
        let base = tempdir().unwrap();
        let missing = base.path().join("missing");
        let err = resolve_project_root(Some(&missing), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
