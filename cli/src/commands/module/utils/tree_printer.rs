//! # Directory Tree Printer
//!
//! File: cli/src/commands/module/utils/tree_printer.rs
//!
//! Renders a directory as a `tree`-style listing. `module create` prints the
//! freshly generated module with it:
//!
//! ```text
//! score/
//! ├── src/
//! │   ├── main/
//! │   │   ├── java/
//! │   │   │   └── ...
//! │   │   └── AndroidManifest.xml
//! │   └── test/
//! ├── .gitignore
//! ├── build.gradle.kts
//! ├── consumer-rules.pro
//! └── proguard-rules.pro
//! ```
//!
//! Directories are listed before files, each group sorted by name. Hidden
//! entries are included. Symbolic links are listed but not followed.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::{
    fmt::Write as FmtWrite,
    fs,
    path::{Path, PathBuf},
};

/// Connector for intermediate items in a directory listing.
const TEE: &str = "├── ";
/// Connector for the last item in a directory listing.
const ELBOW: &str = "└── ";
/// Indentation below a non-last item.
const PIPE: &str = "│   ";
/// Indentation below the last item.
const SPACER: &str = "    ";

struct DirEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

/// Builds the tree of `root_path`, labelling the root `display_name`.
pub fn print_directory_tree_to_string(root_path: &Path, display_name: &str) -> Result<String> {
    if !root_path.is_dir() {
        anyhow::bail!(
            "Cannot print tree: '{}' is not a directory.",
            root_path.display()
        );
    }
    let mut output = String::new();
    writeln!(output, "{}/", display_name)?;
    walk_and_build_string(root_path, &mut String::new(), &mut output)
        .context("Failed while generating directory tree structure string")?;
    Ok(output)
}

fn walk_and_build_string(
    dir: &Path,
    current_prefix: &mut String,
    output: &mut dyn FmtWrite,
) -> Result<()> {
    let entries = read_and_sort_dir_entries(dir)?;
    let num_entries = entries.len();
    for (index, entry) in entries.into_iter().enumerate() {
        let is_last_entry = index + 1 == num_entries;
        let connector = if is_last_entry { ELBOW } else { TEE };
        if entry.is_dir {
            writeln!(output, "{}{}{}/", current_prefix, connector, entry.name)?;
            let prefix_component = if is_last_entry { SPACER } else { PIPE };
            current_prefix.push_str(prefix_component);
            walk_and_build_string(&entry.path, current_prefix, output)?;
            current_prefix.truncate(current_prefix.len() - prefix_component.len());
        } else {
            writeln!(output, "{}{}{}", current_prefix, connector, entry.name)?;
        }
    }
    Ok(())
}

fn read_and_sort_dir_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to inspect {}", entry.path().display()))?;
        entries.push(DirEntry {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
        });
    }
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}
