//! Semantic value-kind tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic kind of value an attribute is declared to hold.
///
/// The two kinds the converter substitutes get their own variants; any other
/// tag found in (or asked of) the schema is carried as [`ValueKind::Other`].
/// Asking the schema index for an unknown kind yields an empty index, not an
/// error, so arbitrary tags must stay representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueKind {
    /// A single content reference (numeric content id live, remote id portable).
    Embed,
    /// A comma-separated list of location ids (portable side: remote-id array).
    LocationList,
    /// Any other declared attribute type; never substituted by the converter.
    Other(String),
}

impl ValueKind {
    const EMBED: &'static str = "embed";
    const LOCATION_LIST: &'static str = "locationlist";

    /// The tag as it appears in the block-definition metadata `type` field.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Embed => Self::EMBED,
            Self::LocationList => Self::LOCATION_LIST,
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ValueKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            Self::EMBED => Self::Embed,
            Self::LOCATION_LIST => Self::LocationList,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ValueKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ValueKind> for String {
    fn from(kind: ValueKind) -> Self {
        kind.tag().to_string()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
