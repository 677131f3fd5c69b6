//! Preview rendering of parsed messages.
//!
//! Segments whose token decodes are drawn in that color. Segments without
//! a token get a fallback: one color when the message is a single run of
//! uncolored text, another when it is mixed with colored runs.

mod ansi;
mod html;

pub use ansi::render_ansi;
pub use html::{escape_html, render_html};

use ryzom_common::Message;
use serde::{Deserialize, Serialize};

/// Options shared by all renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Fallback when the message has a single segment.
    pub single_segment_color: String,
    /// Fallback for uncolored segments in a multi-segment message.
    pub multi_segment_color: String,
    /// Escape segment text for HTML output.
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            single_segment_color: "yellow".into(),
            multi_segment_color: "white".into(),
            escape_html: true,
        }
    }
}

impl RenderOptions {
    pub(crate) fn fallback_for(&self, message: &Message) -> &str {
        if message.len() > 1 {
            &self.multi_segment_color
        } else {
            &self.single_segment_color
        }
    }
}
