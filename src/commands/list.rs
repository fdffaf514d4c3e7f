//! # List Command
//!
//! Prints the title of every stored poem, one per line, in store order.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::config::Config;

/// Executes the list command.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let collection = config.store().load_or_default()?;

    if collection.is_empty() {
        println!("No poems found.");
        return Ok(());
    }

    for title in collection.titles() {
        println!("{title}");
    }

    Ok(())
}
