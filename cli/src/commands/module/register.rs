//! # droidmod Module Register Command
//!
//! File: cli/src/commands/module/register.rs
//!
//! Implements `droidmod module register`, which adds an existing module to the
//! Gradle settings file without generating anything. It is the retry path
//! after `module create` reported a failed registration.
//!
//! Unlike `module create`, a registration failure is an error here: there is
//! nothing else this command could have produced.
//!
use super::utils::{self, naming, settings};
use crate::core::config;
use crate::core::error::Result;
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Arguments of `droidmod module register`.
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Module name as given to `module create` (e.g. `consumer-credit/score`).
    name: String,

    /// Project root containing settings.gradle(.kts).
    #[arg(long, short = 'r', env = "DROIDMOD_PROJECT_ROOT")]
    root: Option<PathBuf>,
}

pub fn handle_register(args: RegisterArgs) -> Result<()> {
    let identifier = naming::validate_identifier(&args.name)?;

    let start_dir = utils::search_start(args.root.as_deref())?;
    let cfg = config::load_config(&start_dir).context("Failed to load droidmod configuration")?;
    let project_root = utils::resolve_project_root(args.root.as_deref(), &cfg)?;

    let name = naming::resolve(&identifier, cfg.module.base_namespace());
    let key = &name.registration_key;
    if !project_root.join(&name.relative_path).is_dir() {
        warn!(
            "No module directory for '{}' under '{}'; registering anyway.",
            identifier,
            project_root.display()
        );
    }

    info!("Registering '{}' in '{}'", key, project_root.display());
    match settings::register(key, &project_root) {
        Ok(registration) if registration.already_present => {
            println!(
                "ℹ️  '{}' is already registered in {}.",
                registration.key,
                registration.file.display()
            );
            Ok(())
        }
        Ok(registration) => {
            println!("✅ Registered '{}' in {}.", key, registration.file.display());
            Ok(())
        }
        Err(e) => {
            println!("{}", e.manual_instruction(key));
            Err(anyhow!(e)).context(format!("Could not register module '{}'", identifier))
        }
    }
}
