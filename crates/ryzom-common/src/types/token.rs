use crate::errors::CodeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Lexical form of a color token: `@{` + 4 hex digits + `}`.
pub const TOKEN_PATTERN: &str = r"@\{[0-9a-fA-F]{4}\}";

/// Unanchored token pattern, used for scanning raw messages.
pub static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TOKEN_PATTERN).unwrap());

static EXACT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{TOKEN_PATTERN}$")).unwrap());

/// A validated `@{rgba}` color token. Digit case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorToken(String);

impl ColorToken {
    /// Accept `s` only if it is exactly one token.
    pub fn parse(s: &str) -> Option<Self> {
        EXACT_TOKEN_RE.is_match(s).then(|| Self(s.to_string()))
    }

    /// Build a token from four nibbles. Returns `None` if any exceeds 15.
    pub fn from_nibbles(nibbles: [u8; 4]) -> Option<Self> {
        if nibbles.iter().any(|&n| n > 0x0f) {
            return None;
        }
        let [r, g, b, a] = nibbles;
        Some(Self(format!("@{{{r:x}{g:x}{b:x}{a:x}}}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The red, green, blue and alpha nibbles, in token order.
    pub fn nibbles(&self) -> [u8; 4] {
        // Four hex digits, validated at construction.
        let packed = u16::from_str_radix(&self.0[2..6], 16).unwrap_or_default();
        [12, 8, 4, 0].map(|shift| ((packed >> shift) & 0x0f) as u8)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColorToken {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CodeError::InvalidToken(s.to_string()))
    }
}

impl TryFrom<String> for ColorToken {
    type Error = CodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if EXACT_TOKEN_RE.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(CodeError::InvalidToken(s))
        }
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.0
    }
}
