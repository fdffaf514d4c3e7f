//! # Commands
//!
//! CLI command implementations for poemstack.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod completions;
pub mod init;
pub mod list;
pub mod menu;
pub mod remove;

pub use self::{
    add::{execute as add, AddArgs},
    completions::execute as completions,
    init::execute as init,
    list::execute as list,
    menu::{execute as menu, MenuChoice},
    remove::{execute as remove, RemoveArgs},
};
