//! # Init Command
//!
//! Writes a `.poems` project config in the current directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::{Config, ProjectConfig},
    ui,
};

/// Executes the init command.
pub fn execute() -> Result<()> {
    let config = Config::for_init()?;

    // Check if already initialized
    let config_path = ProjectConfig::path(&config.project_root);
    if config_path.exists() {
        anyhow::bail!(
            "Project already initialized (found {})",
            config_path.display()
        );
    }

    config.project.save(&config.project_root)?;

    ui::print_success("Initialized poem project");
    println!("  {} {}", "Config:".dimmed(), config_path.display());
    println!("  {} {}", "Store:".dimmed(), config.store_path().display());
    println!("  {} {}", "Staging:".dimmed(), config.staging_path().display());

    Ok(())
}
