//! Length limits and copy formatting per message kind.

use ryzom_common::MessageKind;
use serde::Serialize;

const GMOTD_COMMAND: &str = "/guildmotd ";

/// Length as the game client counts it: UTF-16 code units, tokens included.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn over_limit(text: &str, kind: MessageKind) -> bool {
    char_count(text) > kind.max_chars()
}

/// Text ready to paste into the client.
///
/// A gmotd is a single chat command, so newlines become spaces and the
/// `/guildmotd ` prefix is added. Crafter messages are copied unchanged.
pub fn copy_text(text: &str, kind: MessageKind) -> String {
    match kind {
        MessageKind::Gmotd => format!("{GMOTD_COMMAND}{}", text.replace('\n', " ")),
        MessageKind::Crafter => text.to_string(),
    }
}

/// Length summary for a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharCount {
    pub kind: MessageKind,
    pub count: usize,
    pub max: usize,
    pub over_limit: bool,
}

pub fn count_chars(text: &str, kind: MessageKind) -> CharCount {
    let count = char_count(text);
    let max = kind.max_chars();
    CharCount {
        kind,
        count,
        max,
        over_limit: count > max,
    }
}
