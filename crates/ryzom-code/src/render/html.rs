use super::RenderOptions;
use crate::codec::decode_color;
use ryzom_common::Message;

const PRE_OPEN: &str = r#"<pre class="output-pre">"#;
const PRE_CLOSE: &str = "</pre>";

/// Render a message as a `<pre>` block of colored `<span>`s.
///
/// An absent message renders as an empty block.
pub fn render_html(message: Option<&Message>, options: &RenderOptions) -> String {
    let mut out = String::from(PRE_OPEN);
    if let Some(message) = message {
        let fallback = options.fallback_for(message);
        for segment in message {
            let color = match decode_color(segment.color_str()) {
                Some(rgba) => rgba.to_string(),
                None => fallback.to_string(),
            };
            out.push_str(&format!(r#"<span style="color: {color}">"#));
            if options.escape_html {
                out.push_str(&escape_html(&segment.text));
            } else {
                out.push_str(&segment.text);
            }
            out.push_str("</span>");
        }
    }
    out.push_str(PRE_CLOSE);
    out
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
