//! # Errors
//!
//! Domain failures that callers may want to match on. Everything else flows
//! through `anyhow` with file context attached.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::SENTINEL;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoemError {
    /// The staging file already carries the record marker, so appending it
    /// would split into extra records.
    #[error(
        "staging file {} already contains the record marker '{}'; refusing to append",
        .path.display(),
        SENTINEL
    )]
    SentinelInStaging { path: PathBuf },

    #[error("invalid title '{title}': {reason}")]
    InvalidTitle { title: String, reason: &'static str },
}
