//! Token insertion into editor text.

use ryzom_common::ColorToken;
use serde::Serialize;

/// Result of inserting a token at a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    pub text: String,
    /// Caret position, in characters, just after the inserted token.
    pub caret: usize,
}

/// Replace the characters in `[start, end)` with `token`.
///
/// Offsets count characters, not bytes. They are clamped to the text
/// length, and a reversed selection is treated as its normalized range.
pub fn insert_at_selection(text: &str, start: usize, end: usize, token: &ColorToken) -> Insertion {
    let len = text.chars().count();
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start = start.min(len);
    let end = end.min(len);

    let head: String = text.chars().take(start).collect();
    let tail: String = text.chars().skip(end).collect();
    let token = token.as_str();

    Insertion {
        text: format!("{head}{token}{tail}"),
        caret: start + token.chars().count(),
    }
}
