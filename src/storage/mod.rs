//! # Storage
//!
//! File system operations for the poem store.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    constants::SENTINEL,
    poem::{parser, Collection, Record},
};

/// The store file. Every operation reads or writes it in one pass.
#[derive(Debug, Clone)]
pub struct PoemStore {
    path: PathBuf,
}

impl PoemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole store. A missing file is an error.
    pub fn load(&self) -> Result<Collection> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read poem store: {}", self.path.display()))?;

        let collection = parser::parse(&content);
        tracing::debug!(
            path = %self.path.display(),
            records = collection.len(),
            "loaded store"
        );

        Ok(collection)
    }

    /// Like [`load`](Self::load), but a missing file reads as empty.
    pub fn load_or_default(&self) -> Result<Collection> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(parser::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Collection::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read poem store: {}", self.path.display())),
        }
    }

    /// Appends one record, creating the file if needed.
    pub fn append(&self, record: &Record) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open poem store: {}", self.path.display()))?;

        write!(file, "{SENTINEL}{record}")
            .with_context(|| format!("Failed to write poem store: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), title = %record.title, "appended record");
        Ok(())
    }

    /// Overwrites the store with `collection`.
    pub fn save(&self, collection: &Collection) -> Result<()> {
        fs::write(&self.path, parser::serialize(collection))
            .with_context(|| format!("Failed to write poem store: {}", self.path.display()))?;

        tracing::debug!(
            path = %self.path.display(),
            records = collection.len(),
            "saved store"
        );
        Ok(())
    }

    /// Drops every record matching `predicate` and returns the removed ones.
    ///
    /// The file is only rewritten when something was removed.
    pub fn remove_where<F>(&self, predicate: F) -> Result<Vec<Record>>
    where
        F: Fn(&Record) -> bool,
    {
        let mut collection = self.load()?;
        let removed = collection.remove_where(predicate);

        if !removed.is_empty() {
            self.save(&collection)?;
        }

        tracing::debug!(removed = removed.len(), kept = collection.len(), "removal pass");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> PoemStore {
        PoemStore::new(dir.path().join("poems.txt"))
    }

    #[test]
    fn test_append_creates_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(&Record::new("Test", "a&nbsp;b")).unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "__TITLE__Test\na&nbsp;b"
        );
    }

    #[test]
    fn test_append_adds_to_end() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(&Record::new("One", "1")).unwrap();
        store.append(&Record::new("Two", "2")).unwrap();

        let collection = store.load().unwrap();
        assert_eq!(collection.titles().collect::<Vec<_>>(), ["One", "Two"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read poem store"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load_or_default().unwrap().is_empty());
    }

    #[test]
    fn test_remove_where_rewrites_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for title in ["A", "b", "B", "C"] {
            store.append(&Record::new(title, "x")).unwrap();
        }

        let removed = store.remove_where(|r| r.title_matches("b")).unwrap();

        assert_eq!(removed.len(), 2);
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "__TITLE__A\nx__TITLE__C\nx"
        );
    }

    #[test]
    fn test_remove_where_no_match_leaves_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "odd preamble__TITLE__A\nx").unwrap();

        let removed = store.remove_where(|r| r.title_matches("z")).unwrap();

        assert!(removed.is_empty());
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "odd preamble__TITLE__A\nx"
        );
    }
}
