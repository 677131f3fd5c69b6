use super::ColorToken;
use serde::{Deserialize, Serialize};

/// A run of text and the token that opened it.
///
/// `color` is `None` for text that precedes the first token of a message.
/// On the wire it is the token string, or `""` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(with = "optional_token")]
    pub color: Option<ColorToken>,
    pub text: String,
}

impl Segment {
    pub fn new(color: Option<ColorToken>, text: impl Into<String>) -> Self {
        Self {
            color,
            text: text.into(),
        }
    }

    /// The token as written in the source, or `""`.
    pub fn color_str(&self) -> &str {
        self.color.as_ref().map_or("", ColorToken::as_str)
    }
}

/// A raw message split into segments, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message {
    pub segments: Vec<Segment>,
}

impl Message {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// All text runs concatenated, tokens removed.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Re-interleave tokens and text. Reproduces the parsed input exactly.
    pub fn to_raw(&self) -> String {
        let mut raw = String::new();
        for segment in &self.segments {
            raw.push_str(segment.color_str());
            raw.push_str(&segment.text);
        }
        raw
    }
}

impl<'a> IntoIterator for &'a Message {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

mod optional_token {
    use super::ColorToken;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        color: &Option<ColorToken>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(color.as_ref().map_or("", ColorToken::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ColorToken>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        ColorToken::parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid color token: {raw}")))
    }
}
