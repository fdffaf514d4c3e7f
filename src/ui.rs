//! # UI Utilities
//!
//! Line prompts and status output shared by the commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

// =============================================================================
// Prompts
// =============================================================================

/// Writes `prompt` to stderr and reads one line from `input`.
///
/// The trailing line ending is stripped; everything else (including leading
/// and trailing spaces) is kept. End of input is an error.
pub fn prompt_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<String> {
    eprintln!("{}", prompt.bold());
    io::stderr().flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("No input provided for '{prompt}'");
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

// =============================================================================
// Messages
// =============================================================================

/// Prints a success line: `✓ {message}`
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning with yellow prefix.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow(), message);
}

/// `1 poem`, `3 poems`
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
