//! # Test Harness
//!
//! Provides a temporary project directory for integration tests and switches
//! the current directory into it for the duration of a test.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    io::Cursor,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tempfile::TempDir;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment owning a temporary project directory.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment and changes into it.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let project_dir = TempDir::new().expect("Failed to create temp project dir");
        let original_cwd = env::current_dir().expect("Failed to get current dir");
        env::set_current_dir(project_dir.path()).expect("Failed to change to project dir");

        Self {
            project_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Returns the path where project config would be stored.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_path().join(".poems")
    }

    /// Returns the default store path.
    pub fn store_path(&self) -> PathBuf {
        self.project_path().join("poems.txt")
    }

    /// Returns the default staging path.
    pub fn staging_path(&self) -> PathBuf {
        self.project_path().join("addpoem.txt")
    }

    /// Creates a project config file with the given content.
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.project_config_path(), content).expect("Failed to write project config");
    }

    /// Writes the staging file.
    pub fn stage(&self, poem: &str) {
        fs::write(self.staging_path(), poem).expect("Failed to write staging file");
    }

    /// Writes the store file directly.
    pub fn write_store(&self, content: &str) {
        fs::write(self.store_path(), content).expect("Failed to write store");
    }

    /// Reads the store file, empty if missing.
    pub fn read_store(&self) -> String {
        fs::read_to_string(self.store_path()).unwrap_or_default()
    }

    /// Titles currently in the store, in order.
    pub fn store_titles(&self) -> Vec<String> {
        poemstack::poem::parser::parse(&self.read_store())
            .titles()
            .map(str::to_string)
            .collect()
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_cwd);
    }
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Prompt answers, one per line.
pub fn answers(lines: &[&str]) -> Cursor<String> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text)
}

/// Stages `poem` and appends it under `title` without prompting.
pub fn add_poem(env: &TestEnv, title: &str, poem: &str) {
    env.stage(poem);
    poemstack::commands::add(poemstack::commands::AddArgs {
        title: Some(title.to_string()),
        ..Default::default()
    })
    .expect("add should succeed");
}
