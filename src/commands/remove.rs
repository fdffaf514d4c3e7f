//! # Remove Command
//!
//! Deletes every poem whose title matches, ignoring case.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead};

use anyhow::Result;

use crate::{
    config::Config,
    constants::{REMOVE_TITLE_PROMPT, REMOVE_WARNING},
    ui,
};

/// Arguments for the remove command
#[derive(Debug, Clone, Default)]
pub struct RemoveArgs {
    /// Title to remove; prompted for when `None`
    pub title: Option<String>,
}

/// Executes the remove command, prompting on stdin.
pub fn execute(args: RemoveArgs) -> Result<usize> {
    execute_with(args, &mut io::stdin().lock())
}

/// Executes the remove command, reading prompt answers from `input`.
///
/// Returns the number of removed poems.
pub fn execute_with<R: BufRead>(args: RemoveArgs, input: &mut R) -> Result<usize> {
    let config = Config::load()?;

    ui::print_warning(REMOVE_WARNING);

    let title = match args.title {
        Some(title) => title,
        None => ui::prompt_line(REMOVE_TITLE_PROMPT, input)?,
    };

    let store = config.store();
    let removed = store.remove_where(|record| record.title_matches(&title))?;

    for record in &removed {
        tracing::info!(title = %record.title, "poem removed");
    }

    ui::print_success(&format!(
        "Removed {} titled '{title}' from {}",
        ui::pluralize(removed.len(), "poem"),
        config.relative_path(store.path()).display()
    ));

    Ok(removed.len())
}
