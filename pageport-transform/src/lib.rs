//! Generic tree walker over the page-layout hash.
//!
//! Walks the `zones → blocks → attributes` structure of a layout hash and
//! substitutes the `value` of every attribute registered in a
//! [`ValueKindIndex`], leaving everything else byte-for-byte untouched. The
//! walker knows nothing about what the substitution does — id → remote-id
//! resolution, list encoding, anything reversible fits.
//!
//! The hash is mutated in place. Nodes that do not follow the expected shape
//! (missing `zones`/`blocks`/`attributes`, non-array containers, blocks
//! without a `type`, attributes without a `name`) are skipped, never
//! rejected: tolerating sparse trees is part of the contract.

use pageport_schema::ValueKindIndex;
use serde_json::Value;
use tracing::{debug, trace};

/// Substitutes the values of indexed attributes throughout `hash`.
///
/// Walk order is deterministic: zones in list order, blocks in list order
/// within each zone, attributes in list order within each block. That is
/// the order in which `substitute` observes values, which matters for
/// substitutions backed by external lookups.
///
/// The first substitution failure aborts the walk immediately and is
/// returned unchanged; attributes already substituted stay substituted. The
/// caller is expected to discard the tree on failure, so no rollback is
/// attempted.
pub fn transform_attributes<E>(
    hash: &mut Value,
    index: &ValueKindIndex,
    mut substitute: impl FnMut(Value) -> Result<Value, E>,
) -> Result<(), E> {
    let Some(zones) = hash.get_mut("zones").and_then(Value::as_array_mut) else {
        return Ok(());
    };

    let mut substituted = 0usize;
    for zone in zones.iter_mut() {
        let Some(blocks) = zone.get_mut("blocks").and_then(Value::as_array_mut) else {
            continue;
        };
        for block in blocks.iter_mut() {
            let Some(attribute_names) = block
                .get("type")
                .and_then(Value::as_str)
                .and_then(|block_type| index.attributes_for(block_type))
            else {
                continue;
            };

            let Some(attributes) = block.get_mut("attributes").and_then(Value::as_array_mut)
            else {
                continue;
            };
            for attribute in attributes.iter_mut() {
                let matched = attribute
                    .get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| attribute_names.iter().any(|n| n == name));
                if !matched {
                    continue;
                }
                let Some(slot) = attribute.get_mut("value") else {
                    continue;
                };
                trace!(?slot, "substituting attribute value");
                *slot = substitute(slot.take())?;
                substituted += 1;
            }
        }
    }

    debug!(substituted, "layout walk complete");
    Ok(())
}
