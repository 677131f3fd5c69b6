use clap::{Parser, Subcommand, ValueEnum};
use ryzom_common::{MessageKind, RangePolicy};
use std::path::PathBuf;

/// ryzom-code: split, preview and build Ryzom chat color markup.
#[derive(Parser, Debug)]
#[command(name = "ryzom-code", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a message into colored segments, printed as JSON.
    Segment {
        /// Message text; read from stdin when omitted or `-`.
        text: Option<String>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Decode the first `@{rgba}` token in the input, printed as JSON.
    Decode {
        /// Text containing a token.
        token: String,
    },
    /// Encode a color as an `@{rgba}` token.
    Encode {
        #[arg(short, long, default_value_t = 0)]
        r: u8,
        #[arg(short, long, default_value_t = 0)]
        g: u8,
        #[arg(short, long, default_value_t = 0)]
        b: u8,
        /// Alpha in [0, 1].
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        a: f64,
        /// Picker color such as `rgba(10, 20, 30, 0.5)`; overrides -r/-g/-b/-a.
        #[arg(long)]
        picker: Option<String>,
        /// Alpha range policy; defaults to the configured one.
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },
    /// Render a message preview.
    Render {
        /// Message text; read from stdin when omitted or `-`.
        text: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Insert a token into text at a character selection, printed as JSON.
    Insert {
        text: String,
        token: String,
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Selection end; defaults to `start`.
        #[arg(long)]
        end: Option<usize>,
    },
    /// Report a message's length against the limit for its kind, as JSON.
    Count {
        /// Message text; read from stdin when omitted or `-`.
        text: Option<String>,
        #[arg(long, value_enum, default_value_t = KindArg::Gmotd)]
        kind: KindArg,
    },
    /// Print a message in the form to paste into the game client.
    Copy {
        /// Message text; read from stdin when omitted or `-`.
        text: Option<String>,
        #[arg(long, value_enum, default_value_t = KindArg::Gmotd)]
        kind: KindArg,
    },
    /// Print the effective configuration and its default location.
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Ansi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Passthrough,
    Clamp,
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Gmotd,
    Crafter,
}

impl From<KindArg> for MessageKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Gmotd => MessageKind::Gmotd,
            KindArg::Crafter => MessageKind::Crafter,
        }
    }
}

impl From<PolicyArg> for RangePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Passthrough => RangePolicy::Passthrough,
            PolicyArg::Clamp => RangePolicy::Clamp,
            PolicyArg::Reject => RangePolicy::Reject,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_segment_with_global_flags() {
        let args = Args::try_parse_from([
            "ryzom-code",
            "segment",
            "a@{f00f}b",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(args.command, Command::Segment { text: Some(_), pretty: false }));
    }

    #[test]
    fn parses_encode_channels() {
        let args =
            Args::try_parse_from(["ryzom-code", "encode", "-r", "255", "-a", "0.5"]).unwrap();
        match args.command {
            Command::Encode { r, g, b, a, .. } => {
                assert_eq!((r, g, b), (255, 0, 0));
                assert_eq!(a, 0.5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_channel_above_255() {
        assert!(Args::try_parse_from(["ryzom-code", "encode", "-r", "256"]).is_err());
    }

    #[test]
    fn parses_policy_and_format() {
        let args = Args::try_parse_from(["ryzom-code", "encode", "--policy", "clamp"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Encode { policy: Some(PolicyArg::Clamp), .. }
        ));

        let args = Args::try_parse_from(["ryzom-code", "render", "--format", "ansi"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Render { text: None, format: Format::Ansi }
        ));
    }

    #[test]
    fn parses_kind_with_default() {
        let args = Args::try_parse_from(["ryzom-code", "copy", "hi"]).unwrap();
        assert!(matches!(args.command, Command::Copy { kind: KindArg::Gmotd, .. }));

        let args =
            Args::try_parse_from(["ryzom-code", "count", "hi", "--kind", "crafter"]).unwrap();
        assert!(matches!(args.command, Command::Count { kind: KindArg::Crafter, .. }));

        assert!(Args::try_parse_from(["ryzom-code", "count", "--kind", "tell"]).is_err());
    }

    #[test]
    fn kind_arg_converts() {
        assert_eq!(MessageKind::from(KindArg::Crafter), MessageKind::Crafter);
    }

    #[test]
    fn policy_arg_converts() {
        assert_eq!(RangePolicy::from(PolicyArg::Reject), RangePolicy::Reject);
    }
}
