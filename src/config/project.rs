//! # Project Configuration
//!
//! Handles the project-level configuration stored at `.poems` in the project root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STAGING_FILE, DEFAULT_STORE_FILE, PROJECT_CONFIG_FILE};

/// Project configuration stored at .poems in project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Store file, relative to the project root (default: "poems.txt")
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Staging file, relative to the project root (default: "addpoem.txt")
    #[serde(default = "default_staging_file")]
    pub staging_file: String,

    /// Expand shorthand markup tags when appending (default: true)
    #[serde(default = "default_true")]
    pub translate_markup: bool,

    /// Editor command for `add --edit` (e.g., "nvim", "code --wait")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            store_file: DEFAULT_STORE_FILE.to_string(),
            staging_file: DEFAULT_STAGING_FILE.to_string(),
            translate_markup: true,
            editor: None,
        }
    }
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_staging_file() -> String {
    DEFAULT_STAGING_FILE.to_string()
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

impl ProjectConfig {
    /// Finds the project root by searching for .poems file upward
    pub fn find_project_root() -> Option<PathBuf> {
        let mut current = env::current_dir().ok()?;

        loop {
            if current.join(PROJECT_CONFIG_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config from .poems in the given directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }

    /// Saves the project config to .poems
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        let content = toml::to_string_pretty(self).context("Failed to serialize project config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write project config: {}", path.display()))
    }

    /// Returns the full path to the store file
    pub fn store_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.store_file)
    }

    /// Returns the full path to the staging file
    pub fn staging_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.staging_file)
    }
}
