//! # poemstack
//!
//! A flat-file poem collection for static sites.
//!
//! Poems are staged in a plain text file, then appended to a single store file
//! where every record starts with the `__TITLE__` marker. Bodies are stored
//! with their layout encoded as HTML (`&nbsp;`, `<br>`) and shorthand tags
//! expanded into styled spans, so a page can drop each record in as one block.
//!
//! ## Features
//!
//! - **Markup**: `<b>`, `<i>`, `<u>`, `<t>`, `<r>`, `<m>` shorthand tags
//! - **Layout Encoding**: spaces and line breaks survive rendering
//! - **Removal by Title**: case-insensitive, keeps the order of the rest
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod poem;
pub mod storage;
pub mod ui;

pub use config::Config;
pub use error::PoemError;
pub use poem::{Collection, Record};
pub use storage::PoemStore;
