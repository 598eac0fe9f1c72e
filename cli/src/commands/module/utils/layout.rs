//! # Android Library Module Layout
//!
//! File: cli/src/commands/module/utils/layout.rs
//!
//! The fixed shape of a generated module: the package directories of the main
//! and test source sets, the built-in template files, and the variables those
//! templates can use. None of this is configurable except through a custom
//! template directory, which replaces `builtin_template_files` only.
//!
use super::naming::ModuleName;
use crate::core::templating::TemplateFile;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Package directories under `src/main/java/<package path>`.
pub const MAIN_PACKAGES: [&str; 4] = ["data", "domain", "presentation", "di"];
/// Package directories under `src/test/java/<package path>`.
pub const TEST_PACKAGES: [&str; 3] = ["data", "domain", "presentation"];

const BUILD_GRADLE_TEMPLATE: &str =
    include_str!("../../../../templates/android-library/build.gradle.kts.tera");
const MANIFEST: &str = include_str!("../../../../templates/android-library/AndroidManifest.xml");
const GITIGNORE: &str = include_str!("../../../../templates/android-library/gitignore");

/// Package directories of `name`, relative to the module root.
pub fn package_directories(name: &ModuleName) -> Vec<PathBuf> {
    let package_path = name.source_package_path();
    let main_root = Path::new("src").join("main").join("java").join(&package_path);
    let test_root = Path::new("src").join("test").join("java").join(&package_path);

    MAIN_PACKAGES
        .iter()
        .map(|pkg| main_root.join(pkg))
        .chain(TEST_PACKAGES.iter().map(|pkg| test_root.join(pkg)))
        .collect()
}

/// The files every generated module receives unless a custom set is configured.
pub fn builtin_template_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::verbatim("consumer-rules.pro", ""),
        TemplateFile::verbatim("proguard-rules.pro", ""),
        TemplateFile::verbatim(".gitignore", GITIGNORE),
        TemplateFile::rendered("build.gradle.kts", BUILD_GRADLE_TEMPLATE),
        TemplateFile::verbatim(Path::new("src").join("main").join("AndroidManifest.xml"), MANIFEST),
    ]
}

/// Variables available to templates.
pub fn template_context(name: &ModuleName) -> HashMap<String, String> {
    HashMap::from([
        ("namespace".to_string(), name.namespace.clone()),
        ("package".to_string(), name.package_token.clone()),
        ("module_name".to_string(), name.identifier.clone()),
        ("registration_key".to_string(), name.registration_key.clone()),
    ])
}
