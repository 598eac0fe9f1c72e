//! # droidmod Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates droidmod's configuration. Two
//! settings matter to the generator: the organisational base namespace that
//! prefixes every generated package, and an optional directory holding a
//! custom template set that replaces the built-in Android library files.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.droidmod.toml` in the start directory or its ancestors
//! 2. User-specific `<config dir>/droidmod/config.toml`
//! 3. Default values defined in the code
//!
//! The search for the project file stops at the first directory containing
//! `.git`. When a project file is found, its directory becomes the default
//! project root (`Config::project_root`), so running droidmod from a nested
//! directory still targets the Gradle root.
//!
//! ## Examples
//!
//! ```toml
//! [module]
//! base_namespace = "com.example.app"
//!
//! [templates]
//! directory = "~/.config/droidmod/templates/android-library"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(&start_dir)?;
//! let base = cfg.module.base_namespace();
//! ```
//!
use crate::core::error::{DroidmodError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub module: ModuleConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
    /// Directory of the discovered `.droidmod.toml`, if any. Never read from TOML.
    #[serde(skip)]
    pub project_root: Option<PathBuf>,
}

/// Settings that shape the generated module.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Namespace prefix of every generated package. Unset means `org.root`.
    pub base_namespace: Option<String>,
}

impl ModuleConfig {
    /// The configured base namespace, or the built-in default.
    pub fn base_namespace(&self) -> &str {
        self.base_namespace
            .as_deref()
            .unwrap_or(DEFAULT_BASE_NAMESPACE)
    }
}

/// Location of a custom template set.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory whose files replace the built-in templates (can use ~).
    pub directory: Option<String>,
}

const DEFAULT_BASE_NAMESPACE: &str = "org.root";

const PROJECT_CONFIG_FILENAME: &str = ".droidmod.toml";

/// Loads the merged configuration, searching for the project file from `start_dir` upward.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config(start_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "droidmod", "droidmod") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            let mut cfg = load_config_from_path(&path)?;
            cfg.project_root = path.parent().map(Path::to_path_buf);
            Ok(Some(cfg))
        }
        None => {
            debug!(
                "No project configuration file ({}) found from '{}' upward.",
                PROJECT_CONFIG_FILENAME,
                start_dir.display()
            );
            Ok(None)
        }
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        module: ModuleConfig {
            base_namespace: project_cfg
                .module
                .base_namespace
                .or(user.module.base_namespace),
        },
        templates: TemplatesConfig {
            directory: project_cfg.templates.directory.or(user.templates.directory),
        },
        project_root: project_cfg.project_root,
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.templates.directory.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded template directory: {}", dir);
    }
}

/// Checks that `namespace` is a dot-separated list of Java identifiers.
pub fn validate_base_namespace(namespace: &str) -> Result<()> {
    let valid_segment = |seg: &str| {
        let mut chars = seg.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    };
    if namespace.is_empty() || !namespace.split('.').all(valid_segment) {
        return Err(anyhow!(DroidmodError::Config(format!(
            "Invalid base namespace '{}'. Expected dot-separated identifiers such as 'com.example.app'.",
            namespace
        ))));
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    validate_base_namespace(config.module.base_namespace())?;
    if let Some(dir) = &config.templates.directory {
        let template_dir = PathBuf::from(dir);
        if !template_dir.exists() {
            warn!(
                "Configured template directory '{}' does not exist.",
                template_dir.display()
            );
        } else if !template_dir.is_dir() {
            return Err(anyhow!(DroidmodError::Config(format!(
                "Configured template path '{}' exists but is not a directory.",
                template_dir.display()
            ))));
        }
    }
    Ok(())
}
