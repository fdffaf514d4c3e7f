//! # Poem Model
//!
//! Records as they live in the store file, and the pipeline that turns a
//! staged poem into one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod markup;
pub mod parser;
pub mod whitespace;

use std::{fmt, path::Path};

pub use self::parser::Collection;
use crate::{constants::SENTINEL, error::PoemError};

/// One poem: a title line plus its encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,

    /// Everything after the first newline. `None` when the chunk had no
    /// newline at all, so the record serializes back without one.
    pub body: Option<String>,
}

impl Record {
    /// Builds a record from a title and an already encoded body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Some(body.into()),
        }
    }

    /// Splits a raw chunk (text between two markers) at its first newline.
    pub fn from_chunk(chunk: &str) -> Self {
        match chunk.split_once('\n') {
            Some((title, body)) => Self::new(title, body),
            None => Self {
                title: chunk.to_string(),
                body: None,
            },
        }
    }

    /// Runs a staged poem through the storage pipeline.
    ///
    /// Whitespace is always encoded. With `translate` set, shorthand tags are
    /// expanded afterwards, so the space inside each fragment stays a real
    /// space. The title is validated, the body is not.
    pub fn compose(title: &str, staged: &str, translate: bool) -> Result<Self, PoemError> {
        validate_title(title)?;

        let encoded = whitespace::encode(staged);
        let body = if translate {
            markup::translate(&encoded)
        } else {
            encoded
        };

        Ok(Self::new(title, body))
    }

    /// Case-insensitive title comparison.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Body text, empty for records without one.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Chunk form, without the leading marker.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        if let Some(body) = &self.body {
            write!(f, "\n{body}")?;
        }
        Ok(())
    }
}

/// Rejects titles that would break record boundaries.
pub fn validate_title(title: &str) -> Result<(), PoemError> {
    let reason = if title.contains(SENTINEL) {
        "contains the record marker"
    } else if title.contains('\n') {
        "spans more than one line"
    } else {
        return Ok(());
    };

    Err(PoemError::InvalidTitle {
        title: title.to_string(),
        reason,
    })
}

/// Refuses staged content that already contains the record marker.
pub fn check_staged(content: &str, path: &Path) -> Result<(), PoemError> {
    if content.contains(SENTINEL) {
        return Err(PoemError::SentinelInStaging {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
