//! # Whitespace Encoding
//!
//! Rewrites spaces and newlines into HTML placeholders so a poem keeps its
//! layout when rendered as one block.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::{NEWLINE_PLACEHOLDER, SPACE_PLACEHOLDER};

/// Encodes `text` character by character.
///
/// `' '` becomes `&nbsp;`, `'\n'` becomes `<br>`, everything else (including
/// `'\r'` and tabs) is copied as is.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            ' ' => out.push_str(SPACE_PLACEHOLDER),
            '\n' => out.push_str(NEWLINE_PLACEHOLDER),
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_spaces_and_newlines() {
        assert_eq!(
            encode("Roses are red\nViolets are blue"),
            "Roses&nbsp;are&nbsp;red<br>Violets&nbsp;are&nbsp;blue"
        );
    }

    #[test]
    fn test_encode_without_whitespace_is_identity() {
        for text in ["", "word", "a-b_c.d", "ünïcødé", "<b>x</b>"] {
            assert_eq!(encode(text), text);
        }
    }

    #[test]
    fn test_encode_keeps_other_control_characters() {
        assert_eq!(encode("a\tb\r\nc\u{0}"), "a\tb\r<br>c\u{0}");
    }

    #[test]
    fn test_encode_runs_of_whitespace() {
        assert_eq!(encode("  \n\n"), "&nbsp;&nbsp;<br><br>");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let text = "  indented\n\tline ";
        assert_eq!(encode(text), encode(text));
    }
}
