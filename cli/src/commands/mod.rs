//! # droidmod Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! Aggregates the top-level command groups of the CLI. Each group defines its
//! own arguments structure and handler function; subcommands are declared in
//! the group's own `mod.rs`.
//!
//! ## Command Groups
//!
//! - `module`: Create Android library modules and manage their registration
//!   in the Gradle settings file.
//!

/// Command group for Android library modules. Includes subcommands `create`, `register`, `list`.
pub mod module;
