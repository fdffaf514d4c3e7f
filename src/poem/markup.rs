//! # Markup Translation
//!
//! Expands the shorthand poem tags into the HTML fragments the site styles.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Shorthand tag to output fragment.
///
/// No shorthand appears inside any fragment, so the replacement order does
/// not change the result.
pub const MARKUP: [(&str, &str); 12] = [
    ("<b>", "<span class='bold'>"),
    ("<i>", "<span class='italicize'>"),
    ("<u>", "<span class='underline'>"),
    ("<t>", "<span class='poemtitle'>"),
    ("<r>", "<span class='poemright'>"),
    ("<m>", "<span class='poemmiddle'>"),
    ("</b>", "</span>"),
    ("</i>", "</span>"),
    ("</u>", "</span>"),
    ("</t>", "</span>"),
    ("</r>", "</span>"),
    ("</m>", "</span>"),
];

/// Replaces every shorthand tag in `text` with its fragment.
///
/// Tags are not checked for balance; a stray `</b>` becomes `</span>` and
/// unknown tags stay as written.
pub fn translate(text: &str) -> String {
    MARKUP
        .iter()
        .fold(text.to_string(), |acc, (tag, fragment)| {
            acc.replace(tag, fragment)
        })
}
