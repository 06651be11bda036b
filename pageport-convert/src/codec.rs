//! Field-type codec seam.

use crate::error::ConvertResult;
use pageport_model::LayoutValue;
use serde_json::Value;

/// The field type's own value ⇄ hash codec.
///
/// Invoked before and after the id substitutions: the converter never
/// reimplements how a layout value serializes, it only rewrites identifiers
/// inside the hash the codec produced.
pub trait LayoutCodec: Send + Sync {
    /// Encodes the live field value into its hash representation.
    fn to_hash(&self, value: &LayoutValue) -> ConvertResult<Value>;

    /// Decodes a hash into the live field value. `None` must yield the field
    /// type's null-value representation without error.
    fn from_hash(&self, hash: Option<Value>) -> ConvertResult<LayoutValue>;
}

/// Codec for field types whose live value already is the hash shape.
///
/// Also the codec used throughout the test suite.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCodec;

impl LayoutCodec for PassthroughCodec {
    fn to_hash(&self, value: &LayoutValue) -> ConvertResult<Value> {
        Ok(value.as_json().clone())
    }

    fn from_hash(&self, hash: Option<Value>) -> ConvertResult<LayoutValue> {
        Ok(match hash {
            Some(hash) => LayoutValue::new(hash),
            None => LayoutValue::null(),
        })
    }
}
