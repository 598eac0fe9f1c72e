//! # droidmod Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `templating`: Template sets and their rendering to disk
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{DroidmodError, Result};
//! use crate::core::templating;
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
