//! # Interactive Menu
//!
//! The prompt shown when no subcommand is given: `0` adds the staged poem,
//! any other answer removes poems by title.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead};

use anyhow::Result;

use super::{add, remove, AddArgs, RemoveArgs};
use crate::{
    constants::{MENU_ADD_CHOICE, MENU_PROMPT},
    ui,
};

/// Branch picked from the menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
}

impl MenuChoice {
    /// Only an exact `0` selects adding.
    pub fn from_answer(answer: &str) -> Self {
        if answer == MENU_ADD_CHOICE {
            Self::Add
        } else {
            Self::Remove
        }
    }
}

/// Executes the menu on stdin.
pub fn execute() -> Result<()> {
    execute_with(&mut io::stdin().lock())
}

/// Executes the menu, reading every answer from `input`.
pub fn execute_with<R: BufRead>(input: &mut R) -> Result<()> {
    let answer = ui::prompt_line(MENU_PROMPT, input)?;

    match MenuChoice::from_answer(&answer) {
        MenuChoice::Add => add::execute_with(AddArgs::default(), input),
        MenuChoice::Remove => remove::execute_with(RemoveArgs::default(), input).map(|_| ()),
    }
}
