//! # droidmod Module Create Command
//!
//! File: cli/src/commands/module/create.rs
//!
//! ## Overview
//!
//! Implements `droidmod module create`, which scaffolds a new Android library
//! module and registers it in the Gradle settings file.
//!
//! ## Architecture
//!
//! 1. Take the module name from the arguments, or prompt for it
//! 2. Load configuration and resolve the project root
//! 3. Build the generation options (namespace, template set, registration)
//! 4. Run `generator::generate`
//! 5. Print the generated tree and the registration outcome
//!
//! A failed registration is printed with the line to add by hand; the command
//! still succeeds because the module itself was created.
//!
//! ## Examples
//!
//! ```bash
//! droidmod module create consumer-credit/score
//! droidmod module create payments --namespace com.acme.shop --no-register
//! ```
//!
use super::utils::{
    self,
    generator::{self, GenerateOptions, GeneratedModule},
    settings, tree_printer,
};
use crate::common::ui;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

const NAME_PROMPT: &str = "Enter a name for the new module (e.g. consumer-credit or consumer-credit/score): ";

/// Arguments of `droidmod module create`.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Module name. Use `/` to nest modules (e.g. `consumer-credit/score`).
    /// Prompted for when omitted.
    name: Option<String>,

    /// Project root containing settings.gradle(.kts). Defaults to the directory
    /// of `.droidmod.toml`, or the current directory.
    #[arg(long, short = 'r', env = "DROIDMOD_PROJECT_ROOT")]
    root: Option<PathBuf>,

    /// Base namespace prefixed to the generated package (overrides configuration).
    #[arg(long, short = 'n', env = "DROIDMOD_BASE_NAMESPACE")]
    namespace: Option<String>,

    /// Do not touch the settings file.
    #[arg(long)]
    no_register: bool,
}

pub fn handle_create(args: CreateArgs) -> Result<()> {
    let raw_name = match &args.name {
        Some(name) => name.clone(),
        None => ui::prompt_line(NAME_PROMPT)?,
    };

    let start_dir = utils::search_start(args.root.as_deref())?;
    let cfg = config::load_config(&start_dir).context("Failed to load droidmod configuration")?;
    let project_root = utils::resolve_project_root(args.root.as_deref(), &cfg)?;
    let options = build_options(&args, &cfg)?;
    info!(
        "Creating module '{}' in '{}'",
        raw_name.trim(),
        project_root.display()
    );

    println!("Creating module '{}'...", raw_name.trim());
    let generated = generator::generate(&raw_name, &project_root, &options)
        .context("Module generation failed")?;

    print_completion_message(&generated);
    Ok(())
}

fn build_options(args: &CreateArgs, cfg: &Config) -> Result<GenerateOptions> {
    let base_namespace = match &args.namespace {
        Some(namespace) => {
            config::validate_base_namespace(namespace)?;
            namespace.clone()
        }
        None => cfg.module.base_namespace().to_string(),
    };
    Ok(GenerateOptions {
        base_namespace,
        template_dir: cfg.templates.directory.as_ref().map(PathBuf::from),
        register: !args.no_register,
    })
}

fn display_path(path: &Path) -> String {
    env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, cwd))
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

fn print_completion_message(generated: &GeneratedModule) {
    let name = &generated.name;
    info!(
        "Created {} directories and {} files under '{}'",
        generated.directories.len(),
        generated.files.len(),
        generated.root.display()
    );
    println!("\n✅ Module '{}' created successfully!", name.identifier);
    println!("   Location:  {}", display_path(&generated.root));
    println!("   Namespace: {}", name.namespace);

    match tree_printer::print_directory_tree_to_string(
        &generated.root,
        &name.segments.last().cloned().unwrap_or_default(),
    ) {
        Ok(tree) => println!("\n{}", tree.trim_end()),
        Err(e) => warn!("Could not print module tree: {:#}", e),
    }

    let key = &name.registration_key;
    match &generated.registration {
        Some(Ok(registration)) if registration.already_present => {
            println!(
                "\nℹ️  '{}' was already registered in {}.",
                registration.key,
                display_path(&registration.file)
            );
        }
        Some(Ok(registration)) => {
            println!(
                "\n✅ Registered '{}' in {}.",
                registration.key,
                display_path(&registration.file)
            );
        }
        Some(Err(e)) => {
            warn!("Settings registration failed: {}", e);
            println!("\n⚠️  {}", e);
            println!("{}", e.manual_instruction(key));
        }
        None => {
            println!(
                "\nSettings registration skipped. Add this line to your settings file when ready:\n    {}",
                settings::render_statement(key)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ModuleConfig, TemplatesConfig};

    #[test]
    fn test_create_args_parsing() {
        let args = CreateArgs::try_parse_from(["create", "consumer-credit/score"]).unwrap();
        assert_eq!(args.name.as_deref(), Some("consumer-credit/score"));
        assert!(!args.no_register);

        let args = CreateArgs::try_parse_from([
            "create",
            "--root",
            "/tmp/shop",
            "--namespace",
            "com.acme",
            "--no-register",
            "payments",
        ])
        .unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/tmp/shop")));
        assert_eq!(args.namespace.as_deref(), Some("com.acme"));
        assert!(args.no_register);
        assert_eq!(args.name.as_deref(), Some("payments"));
    }

    #[test]
    fn test_create_name_is_optional() {
        let args = CreateArgs::try_parse_from(["create"]).unwrap();
        assert!(args.name.is_none());
    }

    #[test]
    fn test_build_options_prefers_flag() {
        let args = CreateArgs::try_parse_from(["create", "-n", "com.flag", "x"]).unwrap();
        let cfg = Config {
            module: ModuleConfig {
                base_namespace: Some("com.config".into()),
            },
            templates: TemplatesConfig {
                directory: Some("/tpl".into()),
            },
            project_root: None,
        };
        let options = build_options(&args, &cfg).unwrap();
        assert_eq!(options.base_namespace, "com.flag");
        assert_eq!(options.template_dir, Some(PathBuf::from("/tpl")));
        assert!(options.register);
    }

    #[test]
    fn test_build_options_rejects_bad_namespace() {
        let args = CreateArgs::try_parse_from(["create", "-n", "com..bad", "x"]).unwrap();
        assert!(build_options(&args, &Config::default()).is_err());
    }

    #[test]
    fn test_build_options_uses_config_namespace() {
        let args = CreateArgs {
            name: Some("x".into()),
            root: None,
            namespace: None,
            no_register: true,
        };
        let options = build_options(&args, &Config::default()).unwrap();
        assert_eq!(options.base_namespace, "org.root");
        assert!(options.template_dir.is_none());
        assert!(!options.register);
    }
}
