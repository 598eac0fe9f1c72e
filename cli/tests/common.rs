//! # droidmod CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration test crates in `cli/tests/`.
//!

// Not every test crate uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// `assert_cmd::Command` for the compiled `droidmod` binary.
pub fn droidmod_cmd() -> Command {
    Command::cargo_bin("droidmod").expect("Failed to find droidmod binary for testing")
}

/// `droidmod_cmd()` isolated from the user's configuration and environment,
/// running inside `home`.
pub fn isolated_cmd(home: &Path) -> Command {
    let mut cmd = droidmod_cmd();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("DROIDMOD_PROJECT_ROOT")
        .env_remove("DROIDMOD_BASE_NAMESPACE")
        .env_remove("RUST_LOG");
    cmd
}
