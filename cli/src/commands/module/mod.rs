//! # droidmod Module Command Group
//!
//! File: cli/src/commands/module/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `droidmod module`. The subcommands create a new
//! Android library module, register an existing one in the Gradle settings
//! file, and list the registered modules.
//!
//! ## Architecture
//!
//! - `ModuleArgs`: Top-level arguments for the command group.
//! - `ModuleCommand`: Enum defining all module subcommands.
//! - `handle_module`: Routes execution to the relevant subcommand handler.
//!
//! The logic lives in `utils`; the subcommand files only parse arguments,
//! load configuration and print results.
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold and register a nested module
//! droidmod module create consumer-credit/score
//!
//! # Ask for the name interactively, against an explicit project root
//! droidmod module create --root ~/work/shop
//!
//! # Register a module whose registration failed earlier
//! droidmod module register consumer-credit/score
//!
//! # Show the modules listed in settings.gradle(.kts)
//! droidmod module list
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Handler and arguments for `droidmod module create`.
mod create;
/// Handler and arguments for `droidmod module list`.
mod list;
/// Handler and arguments for `droidmod module register`.
mod register;
/// Name resolution, settings registration and generation logic.
pub mod utils;

/// Arguments of `droidmod module`.
#[derive(Parser, Debug)]
pub struct ModuleArgs {
    #[command(subcommand)]
    command: ModuleCommand,
}

#[derive(Subcommand, Debug)]
enum ModuleCommand {
    /// Create a new Android library module and register it in the settings file.
    #[command(alias = "new")]
    Create(create::CreateArgs),
    /// Register an existing module in the settings file.
    Register(register::RegisterArgs),
    /// List the modules registered in the settings file.
    #[command(alias = "ls")]
    List(list::ListArgs),
}

pub fn handle_module(args: ModuleArgs) -> Result<()> {
    match args.command {
        ModuleCommand::Create(args) => create::handle_create(args),
        ModuleCommand::Register(args) => register::handle_register(args),
        ModuleCommand::List(args) => list::handle_list(args),
    }
}
