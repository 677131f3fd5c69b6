//! Splitting raw messages into colored segments.

use crate::scan::TokenScanner;
use ryzom_common::types::TOKEN_RE;
use ryzom_common::{ColorToken, Message, Segment};
use tracing::debug;

/// Split `raw` on color tokens.
///
/// Each segment holds the text that follows a token, up to the next token
/// or the end of input. Text before the first token becomes a segment with
/// no color; when the message starts with a token there is no such leading
/// segment. Returns `None` for empty input.
///
/// Tokens and text are collected in a single pass, so every run is paired
/// with the token that precedes it by construction.
pub fn parse_message(raw: &str) -> Option<Message> {
    if raw.is_empty() {
        return None;
    }

    let mut segments = Vec::new();
    let mut color: Option<ColorToken> = None;
    let mut run_start = 0;

    for found in TokenScanner::new(&TOKEN_RE, raw) {
        let Some(token) = ColorToken::parse(found.as_str()) else {
            continue;
        };
        let text = &raw[run_start..found.start()];
        if color.is_some() || !text.is_empty() {
            segments.push(Segment::new(color.take(), text));
        }
        color = Some(token);
        run_start = found.end();
    }
    segments.push(Segment::new(color, &raw[run_start..]));

    debug!(
        "parsed {} segment(s) from {} byte message",
        segments.len(),
        raw.len()
    );
    Some(Message::new(segments))
}
