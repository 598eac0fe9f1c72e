//! # droidmod UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers. The module command asks for the module name
//! interactively when it is not given on the command line; `prompt_line`
//! covers that case.
//!
//! The reader and writer are parameters of `prompt_from` so the prompt can be
//! exercised in tests without a terminal.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// Prints `question` to stdout and reads one line from stdin.
///
/// The returned answer is trimmed. End of input yields an empty string.
pub fn prompt_line(question: &str) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_from(&mut stdin.lock(), &mut stdout.lock(), question)
}

pub fn prompt_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String> {
    write!(output, "{}", question).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read answer from standard input")?;
    Ok(answer.trim().to_string())
}
