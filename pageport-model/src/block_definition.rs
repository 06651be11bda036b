//! The raw block-definition configuration.
//!
//! Loaded once per process from the CMS configuration and never mutated.
//! The shape is a JSON object mapping block-type identifiers to a
//! configuration object whose `attributes` member maps attribute
//! identifiers to metadata with a `type` tag:
//!
//! ```json
//! {
//!   "banner": {
//!     "attributes": {
//!       "link": { "type": "embed" },
//!       "title": { "type": "text" }
//!     }
//!   }
//! }
//! ```
//!
//! Entries that do not follow this shape are skipped by the accessors, not
//! rejected: this type is not a validator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block-definition configuration: block type → attribute metadata.
///
/// Attribute declaration order is preserved (`serde_json` is built with
/// `preserve_order`), which fixes the order of attribute identifiers in the
/// derived value-kind index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockDefinition(Map<String, Value>);

impl BlockDefinition {
    #[must_use]
    pub fn new(config: Map<String, Value>) -> Self {
        Self(config)
    }

    /// Wraps a JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Number of declared block types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the declared block-type identifiers.
    pub fn block_types(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates `(block type, attribute identifier, declared value type)`
    /// triples, attributes in declaration order per block type.
    ///
    /// Blocks without an `attributes` object and attributes without a string
    /// `type` tag are skipped.
    pub fn attribute_types(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.0.iter().flat_map(|(block_type, config)| {
            config
                .get("attributes")
                .and_then(Value::as_object)
                .into_iter()
                .flatten()
                .filter_map(move |(attribute, metadata)| {
                    let value_type = metadata.get("type")?.as_str()?;
                    Some((block_type.as_str(), attribute.as_str(), value_type))
                })
        })
    }

    /// Returns the raw configuration object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for BlockDefinition {
    fn from(config: Map<String, Value>) -> Self {
        Self(config)
    }
}
