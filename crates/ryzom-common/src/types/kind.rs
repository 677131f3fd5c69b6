use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a message is sent, which sets its length limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Guild message of the day, sent through `/guildmotd`.
    #[default]
    Gmotd,
    /// Crafter's message on a crafted item.
    Crafter,
}

impl MessageKind {
    /// Maximum message length, in UTF-16 code units.
    ///
    /// The gmotd line is capped at 256 including the `/guildmotd ` command.
    pub fn max_chars(self) -> usize {
        match self {
            MessageKind::Gmotd => 245,
            MessageKind::Crafter => 257,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Gmotd => f.write_str("gmotd"),
            MessageKind::Crafter => f.write_str("crafter"),
        }
    }
}
