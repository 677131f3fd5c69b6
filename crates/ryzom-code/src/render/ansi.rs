use super::RenderOptions;
use crate::codec::decode_color;
use ryzom_common::Message;

const RESET: &str = "\x1b[0m";

/// Render a message for a truecolor terminal.
///
/// Alpha has no terminal equivalent and is dropped. Fallback colors are
/// looked up by CSS basic name; unknown names leave the text unstyled.
pub fn render_ansi(message: Option<&Message>, options: &RenderOptions) -> String {
    let Some(message) = message else {
        return String::new();
    };

    let fallback = named_sgr(options.fallback_for(message));
    let mut out = String::new();
    for segment in message {
        let style = match decode_color(segment.color_str()) {
            Some(rgba) => Some(format!("\x1b[38;2;{};{};{}m", rgba.r, rgba.g, rgba.b)),
            None => fallback.map(|code| format!("\x1b[{code}m")),
        };
        match style {
            Some(style) => {
                out.push_str(&style);
                out.push_str(&segment.text);
                out.push_str(RESET);
            }
            None => out.push_str(&segment.text),
        }
    }
    out
}

fn named_sgr(name: &str) -> Option<u8> {
    let code = match name.trim().to_ascii_lowercase().as_str() {
        "black" => 30,
        "red" => 31,
        "green" | "lime" => 32,
        "yellow" => 33,
        "blue" | "navy" => 34,
        "magenta" | "fuchsia" | "purple" => 35,
        "cyan" | "aqua" | "teal" => 36,
        "white" | "silver" => 37,
        "gray" | "grey" => 90,
        _ => return None,
    };
    Some(code)
}
