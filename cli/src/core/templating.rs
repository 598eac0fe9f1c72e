//! # droidmod Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module turns a set of template files into files on disk. A template
//! set is a list of `TemplateFile`s: a path relative to the module root, a
//! body, and whether the body goes through Tera or is written verbatim.
//!
//! Template sets come from two places:
//! - the built-in Android library set, embedded in the binary
//!   (see `commands::module::utils::layout`);
//! - a custom directory configured under `[templates] directory`, loaded with
//!   `load_template_directory`.
//!
//! ## Architecture
//!
//! 1. `load_template_directory` walks a directory recursively. Files whose
//!    name ends with `.tera` are marked for rendering and the suffix is
//!    stripped from the target path; every other file is copied as is.
//! 2. `render_template_files` builds one Tera context from the variable map
//!    and writes every file below the target directory, creating parent
//!    directories as needed.
//!
//! Hidden files are kept, since an Android module needs its `.gitignore`.
//!
//! ## Examples
//!
//! ```rust
//! let mut context = HashMap::new();
//! context.insert("namespace".to_string(), "org.root.score".to_string());
//!
//! let files = templating::load_template_directory(&custom_dir)?;
//! let written = templating::render_template_files(&files, &module_root, &context)?;
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{DroidmodError, Result};
use anyhow::{anyhow, Context};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tera::Tera;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Suffix marking a file of a custom template directory as a Tera template.
pub const TEMPLATE_EXTENSION: &str = ".tera";

/// One file of a template set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Target path, relative to the module root.
    pub relative_path: PathBuf,
    pub body: String,
    /// Render through Tera instead of copying the body verbatim.
    pub render: bool,
}

impl TemplateFile {
    pub fn rendered(relative_path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            body: body.into(),
            render: true,
        }
    }

    pub fn verbatim(relative_path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            body: body.into(),
            render: false,
        }
    }
}

/// Reads every file under `source_dir` into a template set.
pub fn load_template_directory(source_dir: &Path) -> Result<Vec<TemplateFile>> {
    if !source_dir.is_dir() {
        anyhow::bail!(DroidmodError::FileSystem(format!(
            "Template directory '{}' does not exist or is not a directory.",
            source_dir.display()
        )));
    }
    info!("Loading template set from '{}'", source_dir.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!(
                "Failed to walk template directory '{}'",
                source_dir.display()
            )
        })?;
        if !entry.file_type().is_file() {
            if !entry.file_type().is_dir() {
                warn!(
                    "Skipping unsupported file system entry type at '{}'",
                    entry.path().display()
                );
            }
            continue;
        }
        let src_path = entry.path();
        let relative_path = src_path
            .strip_prefix(source_dir)
            .with_context(|| {
                format!(
                    "Could not determine relative path for '{}'",
                    src_path.display()
                )
            })?
            .to_path_buf();
        let body = io::read_file_to_string(src_path)?;

        let file_name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = match file_name.strip_suffix(TEMPLATE_EXTENSION) {
            Some(stem) if !stem.is_empty() => {
                TemplateFile::rendered(relative_path.with_file_name(stem), body)
            }
            _ => TemplateFile::verbatim(relative_path, body),
        };
        debug!(
            "Loaded template file '{}' (render: {})",
            file.relative_path.display(),
            file.render
        );
        files.push(file);
    }
    Ok(files)
}

/// Writes `files` below `target_dir`, rendering the ones marked for Tera.
///
/// Returns the written paths in the order of `files`. Stops at the first
/// failure; files written before it stay on disk.
pub fn render_template_files(
    files: &[TemplateFile],
    target_dir: &Path,
    context_map: &HashMap<String, String>,
) -> Result<Vec<PathBuf>> {
    let tera_context = tera::Context::from_serialize(context_map).map_err(|e| {
        anyhow!(DroidmodError::Template { source: e })
            .context("Failed to create Tera context from map")
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target_path = target_dir.join(&file.relative_path);
        let content = if file.render {
            Tera::one_off(&file.body, &tera_context, false).map_err(|e| {
                anyhow!(DroidmodError::Template { source: e }).context(format!(
                    "Tera rendering failed for template '{}'",
                    file.relative_path.display()
                ))
            })?
        } else {
            file.body.clone()
        };
        io::write_string_to_file(&target_path, &content)?;
        debug!("Wrote '{}'", target_path.display());
        written.push(target_path);
    }
    info!(
        "Wrote {} template file(s) to '{}'",
        written.len(),
        target_dir.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn context(namespace: &str) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("namespace".to_string(), namespace.to_string());
        map
    }

    #[test]
    fn test_render_and_copy() -> Result<()> {
        let target = tempdir()?;
        let files = vec![
            TemplateFile::rendered("build.gradle.kts", "namespace = \"{{ namespace }}\""),
            TemplateFile::verbatim("src/main/AndroidManifest.xml", "<manifest/>"),
            TemplateFile::verbatim(".gitignore", "/build\n"),
        ];

        let written = render_template_files(&files, target.path(), &context("org.root.score"))?;
        assert_eq!(written.len(), 3);
        assert_eq!(
            fs::read_to_string(target.path().join("build.gradle.kts"))?,
            "namespace = \"org.root.score\""
        );
        assert_eq!(
            fs::read_to_string(target.path().join("src/main/AndroidManifest.xml"))?,
            "<manifest/>"
        );
        assert_eq!(fs::read_to_string(target.path().join(".gitignore"))?, "/build\n");
        Ok(())
    }

    #[test]
    fn test_verbatim_body_is_not_rendered() -> Result<()> {
        let target = tempdir()?;
        let files = vec![TemplateFile::verbatim("raw.txt", "keep {{ namespace }}")];
        render_template_files(&files, target.path(), &context("x"))?;
        assert_eq!(
            fs::read_to_string(target.path().join("raw.txt"))?,
            "keep {{ namespace }}"
        );
        Ok(())
    }

    #[test]
    fn test_render_does_not_escape_values() -> Result<()> {
        let target = tempdir()?;
        let files = vec![TemplateFile::rendered("out", "{{ namespace }}")];
        render_template_files(&files, target.path(), &context("a<b>&c"))?;
        assert_eq!(fs::read_to_string(target.path().join("out"))?, "a<b>&c");
        Ok(())
    }

    #[test]
    fn test_render_invalid_template_syntax() -> Result<()> {
        let target = tempdir()?;
        let files = vec![TemplateFile::rendered("broken.kts", "Hello {{ namespace")];
        let result = render_template_files(&files, target.path(), &context("x"));
        assert!(result.is_err());
        let error_string = format!("{:#}", result.unwrap_err());
        assert!(error_string.contains("Tera rendering failed"));
        assert!(error_string.contains("broken.kts"));
        assert!(!target.path().join("broken.kts").exists());
        Ok(())
    }

    #[test]
    fn test_load_template_directory() -> Result<()> {
        let source = tempdir()?;
        create_file(
            &source.path().join("build.gradle.kts.tera"),
            "namespace = \"{{ namespace }}\"",
        );
        create_file(&source.path().join(".gitignore"), "/build\n");
        create_file(&source.path().join("src/main/AndroidManifest.xml"), "<manifest/>");

        let files = load_template_directory(source.path())?;
        assert_eq!(files.len(), 3);

        let gradle = files
            .iter()
            .find(|f| f.relative_path == Path::new("build.gradle.kts"))
            .expect("template suffix should be stripped");
        assert!(gradle.render);

        let ignore = files
            .iter()
            .find(|f| f.relative_path == Path::new(".gitignore"))
            .expect("hidden files are part of the set");
        assert!(!ignore.render);

        assert!(files
            .iter()
            .any(|f| f.relative_path == Path::new("src/main/AndroidManifest.xml") && !f.render));
        Ok(())
    }

    #[test]
    fn test_load_missing_template_directory() {
        let base = tempdir().unwrap();
        let result = load_template_directory(&base.path().join("nope"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}
