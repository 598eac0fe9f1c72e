//! # droidmod Module List Command
//!
//! File: cli/src/commands/module/list.rs
//!
//! Implements `droidmod module list`: prints the module keys registered in the
//! project's settings file, in the order the registrar writes them. Read-only.
//!
use super::utils::{self, settings};
use crate::core::config;
use crate::core::error::Result;
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;

/// Arguments of `droidmod module list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Project root containing settings.gradle(.kts).
    #[arg(long, short = 'r', env = "DROIDMOD_PROJECT_ROOT")]
    root: Option<PathBuf>,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    let start_dir = utils::search_start(args.root.as_deref())?;
    let cfg = config::load_config(&start_dir).context("Failed to load droidmod configuration")?;
    let project_root = utils::resolve_project_root(args.root.as_deref(), &cfg)?;

    let (path, parsed) = settings::read_settings(&project_root).map_err(|e| anyhow!(e))?;

    println!("Modules registered in {}:\n", path.display());
    if parsed.modules.is_empty() {
        println!("  (none)");
    }
    for key in &parsed.modules {
        println!("  {}", key);
    }
    println!("\n{} module(s).", parsed.modules.len());
    Ok(())
}
