//! # Add Command
//!
//! Appends the staged poem to the store under a title.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::{
    config::Config,
    constants::ADD_TITLE_PROMPT,
    editor,
    poem::{self, Record},
    ui,
};

/// Arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Title; prompted for when `None`
    pub title: Option<String>,
    /// Staging file override (default from config)
    pub staging: Option<PathBuf>,
    /// Open the staging file in the editor before reading it
    pub edit: bool,
    /// Store shorthand tags untranslated
    pub raw: bool,
}

/// Executes the add command, prompting on stdin.
pub fn execute(args: AddArgs) -> Result<()> {
    execute_with(args, &mut io::stdin().lock())
}

/// Executes the add command, reading prompt answers from `input`.
///
/// The staging file is checked before the title is asked for, so a bad
/// staging file never reaches the store.
pub fn execute_with<R: BufRead>(args: AddArgs, input: &mut R) -> Result<()> {
    let config = Config::load()?;
    let staging = args.staging.unwrap_or_else(|| config.staging_path());

    if args.edit {
        editor::open(&staging, &config).context("Failed to open editor")?;
    }

    let content = fs::read_to_string(&staging)
        .with_context(|| format!("Failed to read staging file: {}", staging.display()))?;
    tracing::info!(path = %staging.display(), bytes = content.len(), "poem read");

    poem::check_staged(&content, &staging)?;

    let title = match args.title {
        Some(title) => title,
        None => ui::prompt_line(ADD_TITLE_PROMPT, input)?,
    };

    let translate = config.translate_markup() && !args.raw;
    let record = Record::compose(&title, &content, translate)?;

    let store = config.store();
    store.append(&record)?;

    ui::print_success(&format!(
        "Added '{}' to {}",
        record.title,
        config.relative_path(store.path()).display()
    ));

    Ok(())
}
