//! # Configuration
//!
//! Resolves the project root and its `.poems` settings. Without a config file
//! the current directory is the project root and defaults apply.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod project;

use std::path::{Path, PathBuf};

use anyhow::Result;

pub use self::project::ProjectConfig;
use crate::storage::PoemStore;

/// Project settings plus the directory they resolve against
#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Resolved project root path
    pub project_root: PathBuf,
}

impl Config {
    /// Loads configuration from the nearest .poems, falling back to defaults
    /// in the current directory
    pub fn load() -> Result<Self> {
        let project_root = match ProjectConfig::find_project_root() {
            Some(root) => root,
            None => current_dir()?,
        };

        let project = ProjectConfig::load(&project_root)?;
        tracing::debug!(root = %project_root.display(), ?project, "loaded config");

        Ok(Self {
            project,
            project_root,
        })
    }

    /// Creates a config for initialization (no existing project required)
    pub fn for_init() -> Result<Self> {
        Ok(Self {
            project: ProjectConfig::default(),
            project_root: current_dir()?,
        })
    }

    /// Returns the store file path
    pub fn store_path(&self) -> PathBuf {
        self.project.store_path(&self.project_root)
    }

    /// Returns the staging file path
    pub fn staging_path(&self) -> PathBuf {
        self.project.staging_path(&self.project_root)
    }

    /// Opens the configured store
    pub fn store(&self) -> PoemStore {
        PoemStore::new(self.store_path())
    }

    /// Whether shorthand markup is expanded on append
    pub const fn translate_markup(&self) -> bool {
        self.project.translate_markup
    }

    /// Returns the effective editor command
    pub fn editor(&self) -> Option<String> {
        self.project.editor.clone().or_else(|| {
            std::env::var("VISUAL")
                .ok()
                .or_else(|| std::env::var("EDITOR").ok())
        })
    }

    /// Returns path relative to project root
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.project_root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| anyhow::anyhow!("Cannot get current directory: {e}"))
}
