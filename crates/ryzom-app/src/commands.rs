//! Subcommand execution.

use crate::cli::{Command, Format};
use ryzom_code::{
    copy_text, count_chars, decode_color, encode_color_with, insert_at_selection, parse_message,
    picker_to_token, render_ansi, render_html,
};
use ryzom_common::{ColorToken, MessageKind, RangePolicy, Result, Rgba, RyzomError};
use ryzom_config::{config_to_json, toml_loader, RyzomConfig};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, warn};

/// Run one subcommand, writing its output to `out`.
pub fn run(command: Command, config: &RyzomConfig, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Segment { text, pretty } => {
            let raw = read_text(text)?;
            let message = parse_message(&raw);
            let json = if pretty {
                serde_json::to_string_pretty(&message)
            } else {
                serde_json::to_string(&message)
            };
            writeln!(out, "{}", json.map_err(serialization)?)?;
        }
        Command::Decode { token } => {
            let rgba = decode_color(&token);
            if rgba.is_none() {
                debug!("no color token in {token:?}");
            }
            write_json(out, &rgba)?;
        }
        Command::Encode {
            r,
            g,
            b,
            a,
            picker,
            policy,
        } => {
            let policy = policy.map_or(config.encode.range_policy, RangePolicy::from);
            let token = match picker {
                Some(picker) => picker_to_token(&picker, policy)?,
                None => encode_color_with(&Rgba::new(r, g, b, a), policy)?,
            };
            writeln!(out, "{token}")?;
        }
        Command::Render { text, format } => {
            let raw = read_text(text)?;
            let message = parse_message(&raw);
            let rendered = match format {
                Format::Html => render_html(message.as_ref(), &config.render),
                Format::Ansi => render_ansi(message.as_ref(), &config.render),
            };
            writeln!(out, "{rendered}")?;
        }
        Command::Insert {
            text,
            token,
            start,
            end,
        } => {
            let token: ColorToken = token.parse()?;
            let insertion = insert_at_selection(&text, start, end.unwrap_or(start), &token);
            write_json(out, &insertion)?;
        }
        Command::Count { text, kind } => {
            let raw = read_text(text)?;
            let summary = count_chars(&raw, MessageKind::from(kind));
            if summary.over_limit {
                warn!(
                    "message is {} over the {} limit",
                    summary.count - summary.max,
                    summary.kind
                );
            }
            write_json(out, &summary)?;
        }
        Command::Copy { text, kind } => {
            let raw = read_text(text)?;
            write!(out, "{}", copy_text(&raw, MessageKind::from(kind)))?;
        }
        Command::Config => {
            writeln!(out, "{}", config_to_json(config))?;
            match toml_loader::default_config_path() {
                Ok(path) => writeln!(out, "default path: {}", path.display())?,
                Err(e) => writeln!(out, "default path: unavailable ({e})")?,
            }
        }
    }
    Ok(())
}

/// Take text from the argument, or from stdin when absent or `-`.
fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).map_err(serialization)?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn serialization(e: serde_json::Error) -> RyzomError {
    RyzomError::Serialization(e.to_string())
}
