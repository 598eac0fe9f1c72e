//! # Module Generator
//!
//! File: cli/src/commands/module/utils/generator.rs
//!
//! ## Overview
//!
//! Produces a new Android library module below a project root and registers
//! it in the Gradle settings file.
//!
//! ## Architecture
//!
//! 1. Validate and resolve the identifier (`naming`).
//! 2. Refuse if the module directory already exists. Nothing is written.
//! 3. Load the template set (built-in or custom directory). A broken custom
//!    set also fails before anything is written.
//! 4. Create the package directories (`layout::package_directories`).
//! 5. Write the template files.
//! 6. Register the module key (`settings::register`), unless disabled.
//!
//! Failures in steps 4 and 5 abort the run and leave whatever was already
//! created on disk. The registration result of step 6 is returned inside
//! `GeneratedModule` and never turns into an error: the module itself exists
//! at that point, and the caller tells the user how to register it by hand.
//!
use super::layout;
use super::naming::{self, ModuleName};
use super::settings::{self, Registration, RegistrationError};
use crate::common::fs::io;
use crate::core::error::{DroidmodError, Result};
use crate::core::templating;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Knobs of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub base_namespace: String,
    /// Custom template directory replacing the built-in files.
    pub template_dir: Option<PathBuf>,
    /// Register the module in the settings file after generating it.
    pub register: bool,
}

/// What a generation run produced.
#[derive(Debug)]
pub struct GeneratedModule {
    pub name: ModuleName,
    /// Absolute module root.
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    /// `None` when registration was disabled.
    pub registration: Option<std::result::Result<Registration, RegistrationError>>,
}

/// Generates the module `identifier` below `project_root`.
pub fn generate(
    identifier: &str,
    project_root: &Path,
    options: &GenerateOptions,
) -> Result<GeneratedModule> {
    let identifier = naming::validate_identifier(identifier)?;
    let name = naming::resolve(&identifier, &options.base_namespace);
    let module_root = project_root.join(&name.relative_path);
    debug!("Resolved module name: {:?}", name);

    if module_root.exists() {
        return Err(DroidmodError::ModuleAlreadyExists { path: module_root }.into());
    }

    let template_files = match &options.template_dir {
        Some(dir) => templating::load_template_directory(dir)
            .with_context(|| format!("Failed to load custom templates from '{}'", dir.display()))?,
        None => layout::builtin_template_files(),
    };

    info!(
        "Creating module '{}' at '{}' (namespace {})",
        name.identifier,
        module_root.display(),
        name.namespace
    );

    let mut directories = Vec::new();
    for relative in layout::package_directories(&name) {
        let dir = module_root.join(relative);
        io::ensure_dir_exists(&dir)
            .with_context(|| format!("Failed to create module structure for '{}'", identifier))?;
        directories.push(dir);
    }

    let files = templating::render_template_files(
        &template_files,
        &module_root,
        &layout::template_context(&name),
    )
    .with_context(|| format!("Failed to write module files for '{}'", identifier))?;

    let registration = if options.register {
        Some(settings::register(&name.registration_key, project_root))
    } else {
        debug!("Registration disabled for '{}'", name.registration_key);
        None
    };

    Ok(GeneratedModule {
        name,
        root: module_root,
        directories,
        files,
        registration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn options() -> GenerateOptions {
        GenerateOptions {
            base_namespace: "org.root".to_string(),
            template_dir: None,
            register: true,
        }
    }

    #[test]
    fn test_generate_full_scaffold() -> Result<()> {
        let project = tempdir()?;
        let settings_path = project.path().join("settings.gradle.kts");
        fs::write(&settings_path, "rootProject.name = \"Shop\"\ninclude(\":app\")\n")?;

        let generated = generate("consumer-credit/score", project.path(), &options())?;
        let root = project.path().join("consumer-credit").join("score");
        assert_eq!(generated.root, root);
        assert_eq!(generated.directories.len(), 7);
        assert_eq!(generated.files.len(), 5);

        for pkg in ["data", "domain", "presentation", "di"] {
            assert!(root
                .join("src/main/java/org/root/consumercredit/score")
                .join(pkg)
                .is_dir());
        }
        for pkg in ["data", "domain", "presentation"] {
            assert!(root
                .join("src/test/java/org/root/consumercredit/score")
                .join(pkg)
                .is_dir());
        }
        assert_eq!(fs::read_to_string(root.join("consumer-rules.pro"))?, "");
        assert_eq!(fs::read_to_string(root.join("proguard-rules.pro"))?, "");
        assert_eq!(fs::read_to_string(root.join(".gitignore"))?, "/build\n");
        assert!(fs::read_to_string(root.join("build.gradle.kts"))?
            .contains("namespace = \"org.root.consumercredit.score\""));
        assert!(fs::read_to_string(root.join("src/main/AndroidManifest.xml"))?
            .contains("<manifest"));

        let registration = generated.registration.expect("registration attempted")?;
        assert!(!registration.already_present);
        assert_eq!(
            fs::read_to_string(&settings_path)?,
            "rootProject.name = \"Shop\"\ninclude(\"app\")\ninclude(\"consumer-credit:score\")"
        );
        Ok(())
    }

    #[test]
    fn test_generate_refuses_existing_directory() -> Result<()> {
        let project = tempdir()?;
        let settings_path = project.path().join("settings.gradle");
        let original = "include(':app')\n";
        fs::write(&settings_path, original)?;
        fs::create_dir(project.path().join("score"))?;

        let err = generate("score", project.path(), &options()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DroidmodError>(),
            Some(DroidmodError::ModuleAlreadyExists { .. })
        ));
        assert_eq!(fs::read_dir(project.path().join("score"))?.count(), 0);
        assert_eq!(fs::read_to_string(&settings_path)?, original);
        Ok(())
    }

    #[test]
    fn test_generate_without_settings_file() -> Result<()> {
        let project = tempdir()?;
        let generated = generate("score", project.path(), &options())?;
        assert!(project.path().join("score/build.gradle.kts").is_file());
        assert!(matches!(
            generated.registration,
            Some(Err(RegistrationError::MissingRegistrationFile { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_generate_without_registration() -> Result<()> {
        let project = tempdir()?;
        let settings_path = project.path().join("settings.gradle.kts");
        fs::write(&settings_path, "include(\":app\")")?;
        let opts = GenerateOptions {
            register: false,
            ..options()
        };
        let generated = generate("score", project.path(), &opts)?;
        assert!(generated.registration.is_none());
        assert_eq!(fs::read_to_string(&settings_path)?, "include(\":app\")");
        Ok(())
    }

    #[test]
    fn test_generate_rejects_invalid_identifier() {
        let project = tempdir().unwrap();
        let err = generate("../outside", project.path(), &options()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DroidmodError>(),
            Some(DroidmodError::InvalidModuleName(_))
        ));
        assert_eq!(fs::read_dir(project.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_with_custom_templates() -> Result<()> {
        let project = tempdir()?;
        let templates = tempdir()?;
        fs::write(
            templates.path().join("build.gradle.kts.tera"),
            "// {{ module_name }}\nnamespace = \"{{ namespace }}\"\n",
        )?;
        fs::write(templates.path().join("README.md"), "{{ untouched }}")?;

        let opts = GenerateOptions {
            template_dir: Some(templates.path().to_path_buf()),
            base_namespace: "com.acme".to_string(),
            register: false,
        };
        let generated = generate("feature/login", project.path(), &opts)?;
        let root = project.path().join("feature/login");
        assert_eq!(generated.files.len(), 2);
        assert_eq!(
            fs::read_to_string(root.join("build.gradle.kts"))?,
            "// feature/login\nnamespace = \"com.acme.feature.login\"\n"
        );
        assert_eq!(fs::read_to_string(root.join("README.md"))?, "{{ untouched }}");
        assert!(root.join("src/main/java/com/acme/feature/login/di").is_dir());
        Ok(())
    }

    #[test]
    fn test_missing_custom_templates_write_nothing() {
        let project = tempdir().unwrap();
        let opts = GenerateOptions {
            template_dir: Some(project.path().join("no-templates")),
            ..options()
        };
        assert!(generate("score", project.path(), &opts).is_err());
        assert!(!project.path().join("score").exists());
    }
}
