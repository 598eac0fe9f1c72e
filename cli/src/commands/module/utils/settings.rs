//! # Gradle Settings Registration
//!
//! File: cli/src/commands/module/utils/settings.rs
//!
//! ## Overview
//!
//! Registers a module in the project's Gradle settings file so the build picks
//! it up. The file is located in the project root, `settings.gradle.kts` first,
//! then `settings.gradle`.
//!
//! ## Architecture
//!
//! A settings file is treated as two collections:
//! - **opaque lines**: everything that is not an `include(` statement, kept in
//!   order and only right-trimmed;
//! - **module keys**: every quoted key found on `include(` lines, held in a
//!   `BTreeSet`, which gives deduplication and byte-wise ordering.
//!
//! Registration parses the file, inserts the new key and writes it back as the
//! opaque lines followed by one `include("<key>")` per key. Parsing what was
//! written yields the same collections, so re-running is a fixpoint.
//!
//! A line that starts with `include(` but has no extractable key is kept as an
//! opaque line and logged, rather than dropped.
//!
//! There is no locking: a concurrent writer to the same settings file can lose
//! or duplicate entries.
//!
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Settings file names, in lookup priority order.
pub const SETTINGS_FILENAMES: [&str; 2] = ["settings.gradle.kts", "settings.gradle"];

/// Start of a module registration statement (after trimming).
pub const STATEMENT_PREFIX: &str = "include(";

/// A quoted module key, optionally prefixed with `:`. Group 1 is the key without the colon.
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]:?([\w.:-]+)['"]"#).expect("key pattern is valid"));

/// Why a registration did not happen. Neither variant aborts module generation.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("No Gradle settings file ({}) found in '{}'.", .candidates.join(" or "), .root.display())]
    MissingRegistrationFile {
        root: PathBuf,
        candidates: Vec<&'static str>,
    },

    #[error("Failed to update '{}': {source}", .path.display())]
    RegistrationWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RegistrationError {
    /// Text telling the user how to register `key` by hand.
    pub fn manual_instruction(&self, key: &str) -> String {
        let target = match self {
            RegistrationError::MissingRegistrationFile { .. } => "your settings file".to_string(),
            RegistrationError::RegistrationWriteFailed { path, .. } => {
                format!("'{}'", path.display())
            }
        };
        format!(
            "Add the following line to {} manually:\n    {}",
            target,
            render_statement(key)
        )
    }
}

/// A successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub file: PathBuf,
    pub key: String,
    /// The key was registered before this run.
    pub already_present: bool,
}

/// Parsed content of a settings file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    pub opaque_lines: Vec<String>,
    pub modules: BTreeSet<String>,
}

impl SettingsFile {
    pub fn parse(content: &str) -> Self {
        let mut settings = SettingsFile::default();
        for line in content.lines() {
            if !is_statement(line) {
                settings.opaque_lines.push(line.trim_end().to_string());
                continue;
            }
            let keys = extract_keys(line);
            if keys.is_empty() {
                warn!(
                    "Keeping '{}' as is: no module key found in include statement.",
                    line.trim()
                );
                settings.opaque_lines.push(line.trim_end().to_string());
            } else {
                settings.modules.extend(keys);
            }
        }
        settings
    }

    /// Adds `key`. Returns `false` if it was already registered.
    pub fn insert(&mut self, key: &str) -> bool {
        self.modules.insert(key.to_string())
    }

    /// Opaque lines first, then one statement per key in sorted order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.opaque_lines.is_empty() {
            out.push_str(&self.opaque_lines.join("\n"));
            out.push('\n');
        }
        let statements: Vec<String> = self.modules.iter().map(|k| render_statement(k)).collect();
        out.push_str(&statements.join("\n"));
        out
    }
}

/// Whether `line` is a registration statement.
pub fn is_statement(line: &str) -> bool {
    line.trim().starts_with(STATEMENT_PREFIX)
}

/// Every quoted module key on `line`, leading `:` removed, in order of appearance.
pub fn extract_keys(line: &str) -> Vec<String> {
    KEY_PATTERN
        .captures_iter(line)
        .map(|caps| caps[1].to_string())
        .collect()
}

pub fn render_statement(key: &str) -> String {
    format!("include(\"{}\")", key)
}

/// Path of the settings file in `project_root`, honouring the lookup priority.
pub fn locate_settings_file(project_root: &Path) -> Option<PathBuf> {
    SETTINGS_FILENAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

fn missing_file(project_root: &Path) -> RegistrationError {
    RegistrationError::MissingRegistrationFile {
        root: project_root.to_path_buf(),
        candidates: SETTINGS_FILENAMES.to_vec(),
    }
}

/// Reads and parses the settings file of `project_root`.
pub fn read_settings(project_root: &Path) -> Result<(PathBuf, SettingsFile), RegistrationError> {
    let path = locate_settings_file(project_root).ok_or_else(|| missing_file(project_root))?;
    debug!("Using settings file: {}", path.display());
    let content =
        fs::read_to_string(&path).map_err(|source| RegistrationError::RegistrationWriteFailed {
            path: path.clone(),
            source,
        })?;
    Ok((path, SettingsFile::parse(&content)))
}

/// Registers `registration_key` in the settings file of `project_root`.
///
/// The file is rewritten even when the key was already present, which
/// normalises ordering and removes duplicates.
pub fn register(
    registration_key: &str,
    project_root: &Path,
) -> Result<Registration, RegistrationError> {
    let (path, mut settings) = read_settings(project_root)?;
    let already_present = !settings.insert(registration_key);
    fs::write(&path, settings.render()).map_err(|source| {
        RegistrationError::RegistrationWriteFailed {
            path: path.clone(),
            source,
        }
    })?;
    info!(
        "Registered '{}' in {} ({} module(s))",
        registration_key,
        path.display(),
        settings.modules.len()
    );
    Ok(Registration {
        file: path,
        key: registration_key.to_string(),
        already_present,
    })
}
