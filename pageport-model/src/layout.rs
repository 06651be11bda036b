//! The live page-layout field value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The page-layout field value as handed out by the repository.
///
/// Opaque to the conversion core: only the field type's own codec knows how
/// to turn it into the `zones → blocks → attributes` hash and back. Wrapped
/// so the type system distinguishes the live value from the portable hash
/// (which stays a plain `serde_json::Value`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutValue(Value);

impl LayoutValue {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The field type's null-value representation (an empty layout).
    #[must_use]
    pub fn null() -> Self {
        Self(Value::Null)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_json(self) -> Value {
        self.0
    }
}

impl From<Value> for LayoutValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
