//! The reversible value substitutions applied during a tree walk.
//!
//! Two symmetric pairs, each direction the inverse of the other up to
//! normalization:
//!
//! - embed: numeric content id ⇄ content remote id
//! - location list: comma-separated numeric location ids (live side) ⇄
//!   array of location remote ids (portable side)
//!
//! All four map empty input to `null` without touching the repository, and
//! the two hash → value directions pass already-converted input through
//! unchanged, so re-running a conversion is safe.

use crate::error::{ConvertError, ConvertResult};
use crate::lookup::{ContentLookup, LocationLookup};
use pageport_types::{ContentId, ContentRemoteId, LocationId, LocationRemoteId};
use serde_json::Value;

/// The loose emptiness check shared by the substitutions and the hash entry
/// point: `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` all mean "nothing
/// referenced" and map to `null` with no lookup performed.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Accepts a JSON number or a numeric string (the live side is sloppy about
/// which of the two the editor stored).
fn parse_numeric_id(value: &Value, what: &str) -> ConvertResult<u64> {
    if let Some(id) = value.as_u64() {
        return Ok(id);
    }
    if let Some(id) = value.as_str().and_then(|s| s.trim().parse().ok()) {
        return Ok(id);
    }
    Err(ConvertError::BadValueType(format!(
        "expected a numeric {what} id, got {value}"
    )))
}

/// Embed, value → hash: numeric content id → content remote id.
pub fn content_id_to_remote_id(lookup: &dyn ContentLookup, value: Value) -> ConvertResult<Value> {
    if is_empty_value(&value) {
        return Ok(Value::Null);
    }
    let id = ContentId::new(parse_numeric_id(&value, "content")?);
    let info = lookup.load_by_id(id)?;
    Ok(Value::String(info.remote_id.into_string()))
}

/// Embed, hash → value: content remote id → numeric content id.
///
/// A value that is already numeric passes through unchanged, so a hash whose
/// embeds were never exported (or were exported by an older tool) converts
/// without error.
pub fn content_remote_id_or_id_to_id(
    lookup: &dyn ContentLookup,
    value: Value,
) -> ConvertResult<Value> {
    if is_empty_value(&value) {
        return Ok(Value::Null);
    }
    if value.is_number() {
        return Ok(value);
    }
    let Value::String(remote_id) = value else {
        return Err(ConvertError::BadValueType(format!(
            "expected a content remote id string, got {value}"
        )));
    };
    let info = lookup.load_by_remote_id(&ContentRemoteId::new(remote_id))?;
    Ok(Value::from(info.id.as_u64()))
}

/// Location list, value → hash: `"5,7"` → `["rA", "rB"]`.
///
/// The live side is always a comma-separated string; anything else is a
/// `BadValueType` (no pass-through in this direction).
pub fn location_id_list_to_remote_ids(
    lookup: &dyn LocationLookup,
    value: Value,
) -> ConvertResult<Value> {
    if is_empty_value(&value) {
        return Ok(Value::Null);
    }
    let Some(list) = value.as_str() else {
        return Err(ConvertError::BadValueType(format!(
            "expected a comma-separated location id string, got {value}"
        )));
    };

    let mut remote_ids = Vec::new();
    for part in list.split(',') {
        let id: LocationId = part.trim().parse().map_err(|_| {
            ConvertError::BadValueType(format!("invalid location id {part:?} in list {list:?}"))
        })?;
        let info = lookup.load_by_id(id)?;
        remote_ids.push(Value::String(info.remote_id.into_string()));
    }
    Ok(Value::Array(remote_ids))
}

/// Location list, hash → value: `["rA", "rB"]` → `"5,7"`.
///
/// A value that is already a string passes through unchanged (re-entry
/// safety, mirroring the embed direction).
pub fn location_remote_ids_to_id_list(
    lookup: &dyn LocationLookup,
    value: Value,
) -> ConvertResult<Value> {
    if is_empty_value(&value) {
        return Ok(Value::Null);
    }
    if value.is_string() {
        return Ok(value);
    }
    let Value::Array(items) = value else {
        return Err(ConvertError::BadValueType(format!(
            "expected an array of location remote ids, got {value}"
        )));
    };

    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        let Value::String(remote_id) = item else {
            return Err(ConvertError::BadValueType(format!(
                "expected a location remote id string, got {item}"
            )));
        };
        let info = lookup.load_by_remote_id(&LocationRemoteId::new(remote_id))?;
        ids.push(info.id.to_string());
    }
    Ok(Value::String(ids.join(",")))
}
