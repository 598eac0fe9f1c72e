//! # Module Name Resolution
//!
//! File: cli/src/commands/module/utils/naming.rs
//!
//! ## Overview
//!
//! A module is named by a single identifier such as `score` or
//! `consumer-credit/score`, where `/` encodes nesting. Everything else the
//! generator needs is derived from it here:
//!
//! | Derived value      | `consumer-credit/score` with base `org.root` |
//! |--------------------|----------------------------------------------|
//! | `relative_path`    | `consumer-credit/score` (host separator)     |
//! | `registration_key` | `consumer-credit:score`                      |
//! | `package_token`    | `score`                                      |
//! | `namespace`        | `org.root.consumercredit.score`              |
//!
//! `resolve` is pure and infallible. Callers run `validate_identifier` first,
//! which rejects input that would produce an unusable path or package.
//!
use crate::core::error::{DroidmodError, Result};
use anyhow::anyhow;
use std::path::PathBuf;

/// Separates hierarchy levels in a module identifier.
pub const PATH_SEPARATOR: char = '/';
/// Separates hierarchy levels in a Gradle project path.
pub const HIERARCHY_SEPARATOR: char = ':';

/// Every name derived from one module identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName {
    pub identifier: String,
    pub segments: Vec<String>,
    /// Module root relative to the project root.
    pub relative_path: PathBuf,
    /// Key written into `include("...")`.
    pub registration_key: String,
    /// Last segment without hyphens and spaces.
    pub package_token: String,
    /// Fully-qualified package of the generated sources.
    pub namespace: String,
}

impl ModuleName {
    /// The namespace as a relative directory (`org/root/consumercredit/score`).
    pub fn source_package_path(&self) -> PathBuf {
        self.namespace.split('.').collect()
    }
}

/// Strips the characters that cannot appear in a package name segment.
pub fn package_token(segment: &str) -> String {
    segment.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// Replaces every path separator with the Gradle hierarchy separator.
///
/// Spaces are dropped: a key must survive being parsed back out of
/// `include("...")`, and the settings parser only reads word, `.`, `:` and
/// `-` characters.
pub fn registration_key(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| if c == PATH_SEPARATOR { HIERARCHY_SEPARATOR } else { c })
        .collect()
}

/// Checks a raw identifier and returns it trimmed.
pub fn validate_identifier(raw: &str) -> Result<String> {
    let identifier = raw.trim();
    let invalid = |reason: String| anyhow!(DroidmodError::InvalidModuleName(reason));

    if identifier.is_empty() {
        return Err(invalid("module name cannot be empty".to_string()));
    }
    if identifier.contains('\\') {
        return Err(invalid(format!(
            "'{}' contains '\\'; use '/' to nest modules",
            identifier
        )));
    }
    for segment in identifier.split(PATH_SEPARATOR) {
        if segment.trim().is_empty() {
            return Err(invalid(format!("'{}' contains an empty segment", identifier)));
        }
        if segment == "." || segment == ".." {
            return Err(invalid(format!(
                "'{}' contains a relative path segment",
                identifier
            )));
        }
        if let Some(bad) = segment
            .chars()
            .find(|c| !(c.is_alphanumeric() || matches!(c, '_' | '-' | ' ')))
        {
            return Err(invalid(format!(
                "segment '{}' contains unsupported character '{}'",
                segment, bad
            )));
        }
        let token = package_token(segment);
        if token.is_empty() {
            return Err(invalid(format!(
                "segment '{}' leaves no package name once '-' and ' ' are removed",
                segment
            )));
        }
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid(format!(
                "segment '{}' would start a package name with a digit",
                segment
            )));
        }
    }
    Ok(identifier.to_string())
}

/// Derives every name of the module identified by `identifier`.
///
/// `identifier` must have passed `validate_identifier`.
pub fn resolve(identifier: &str, base_namespace: &str) -> ModuleName {
    let segments: Vec<String> = identifier
        .split(PATH_SEPARATOR)
        .map(str::to_string)
        .collect();
    let relative_path: PathBuf = segments.iter().collect();
    let package_segments: Vec<String> = segments.iter().map(|s| package_token(s)).collect();
    let package_token = package_segments.last().cloned().unwrap_or_default();

    let namespace = if base_namespace.is_empty() {
        package_segments.join(".")
    } else {
        format!("{}.{}", base_namespace, package_segments.join("."))
    };

    ModuleName {
        identifier: identifier.to_string(),
        registration_key: registration_key(identifier),
        relative_path,
        segments,
        package_token,
        namespace,
    }
}
