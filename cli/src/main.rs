//! # droidmod Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the droidmod CLI, a scaffolding tool for multi-module
//! Android projects. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! droidmod --help
//!
//! # Create a module with debug logging
//! droidmod -vv module create consumer-credit/score
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (or `RUST_LOG`)
//! 3. Route to the command handler
//! 4. Print any error with its context chain and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command groups (module)
mod common; // Shared utilities (fs, ui)
mod core; // Errors, configuration, templating

#[derive(Parser, Debug)]
#[command(
    name = "droidmod",
    about = "🤖 droidmod: Android multi-module scaffolding",
    long_about = "Create Android library modules with a consistent package layout\n\
                  and keep settings.gradle(.kts) registrations sorted.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Create, register and list library modules.
    #[command(alias = "m")]
    Module(commands::module::ModuleArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Module(args) => commands::module::handle_module(args),
    };

    if let Err(e) = command_result {
        tracing::debug!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
