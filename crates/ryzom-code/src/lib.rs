//! Codec and segmenter for Ryzom chat color markup.
//!
//! A message such as `0abc@{f00f}red text` carries inline `@{rgba}` tokens,
//! each four hex nibbles. This crate splits messages on those tokens and
//! converts tokens to and from 8-bit RGBA.
//!
//! ```
//! use ryzom_code::{decode_color, encode_color, parse_message};
//! use ryzom_common::Rgba;
//!
//! let message = parse_message("hi @{f00f}there").unwrap();
//! assert_eq!(message.len(), 2);
//! assert_eq!(decode_color("@{f00f}"), Some(Rgba::opaque(255, 0, 0)));
//! assert_eq!(encode_color(&Rgba::opaque(255, 0, 0)), "@{f00f}");
//! ```

pub mod chat;
pub mod codec;
pub mod editor;
pub mod picker;
pub mod render;
pub mod scan;
pub mod segment;

pub use chat::{char_count, copy_text, count_chars, over_limit, CharCount};
pub use codec::{decode_color, encode_color, encode_color_with, token_to_rgba};
pub use editor::{insert_at_selection, Insertion};
pub use picker::{parse_picker_color, picker_to_token};
pub use render::{render_ansi, render_html, RenderOptions};
pub use scan::TokenScanner;
pub use segment::parse_message;
