//! # Constants
//!
//! Centralized constants for magic values used throughout poemstack.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Store Format
// =============================================================================

/// In-band marker that starts every record in the store file.
pub const SENTINEL: &str = "__TITLE__";

/// Placeholder written for each space character.
pub const SPACE_PLACEHOLDER: &str = "&nbsp;";

/// Placeholder written for each newline character.
pub const NEWLINE_PLACEHOLDER: &str = "<br>";

// =============================================================================
// File System
// =============================================================================

/// Project configuration file name (searched upward from the current directory).
pub const PROJECT_CONFIG_FILE: &str = ".poems";

/// Default store file name.
pub const DEFAULT_STORE_FILE: &str = "poems.txt";

/// Default staging file name.
pub const DEFAULT_STAGING_FILE: &str = "addpoem.txt";

/// Editor used when neither config nor environment names one.
pub const FALLBACK_EDITOR: &str = "vi";

// =============================================================================
// Interactive Prompts
// =============================================================================

/// Menu shown when no subcommand is given.
pub const MENU_PROMPT: &str = "Enter 0 to add a poem, 1 to remove a poem.";

/// Menu answer that selects the append branch. Anything else selects removal.
pub const MENU_ADD_CHOICE: &str = "0";

/// Title prompt for the append branch.
pub const ADD_TITLE_PROMPT: &str = "Enter poem title:";

/// Title prompt for the remove branch.
pub const REMOVE_TITLE_PROMPT: &str = "Title of poem you would like to remove:";

/// Warning printed before a removal.
pub const REMOVE_WARNING: &str =
    "This program will delete all poems with the title you supply. It is not case sensitive.";
