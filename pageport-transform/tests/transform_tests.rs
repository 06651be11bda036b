use pageport_model::{BlockDefinition, ValueKind};
use pageport_schema::ValueKindIndex;
use pageport_transform::transform_attributes;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn embed_index() -> ValueKindIndex {
    let def = BlockDefinition::from_value(json!({
        "banner": {
            "attributes": {
                "link": { "type": "embed" },
                "title": { "type": "text" },
            }
        },
    }))
    .unwrap();
    ValueKindIndex::derive(&def, &ValueKind::Embed)
}

/// Substitution used throughout: numeric id → `"remote-{id}"`.
fn to_remote(value: Value) -> Result<Value, String> {
    match value.as_u64() {
        Some(id) => Ok(Value::String(format!("remote-{id}"))),
        None => Err(format!("not an id: {value}")),
    }
}

// ── Matching ─────────────────────────────────────────────────────

#[test]
fn substitutes_indexed_attribute_of_indexed_block() {
    // Scenario: banner/link declared as embed, value 42.
    let mut hash = json!({
        "zones": [{
            "blocks": [{
                "type": "banner",
                "attributes": [
                    { "name": "link", "value": 42 },
                    { "name": "title", "value": "hello" },
                ]
            }]
        }]
    });

    transform_attributes(&mut hash, &embed_index(), to_remote).unwrap();

    assert_eq!(
        hash,
        json!({
            "zones": [{
                "blocks": [{
                    "type": "banner",
                    "attributes": [
                        { "name": "link", "value": "remote-42" },
                        { "name": "title", "value": "hello" },
                    ]
                }]
            }]
        })
    );
}

#[test]
fn leaves_non_indexed_block_types_alone() {
    // Same attribute name, but the block type is not indexed.
    let mut hash = json!({
        "zones": [{
            "blocks": [{
                "type": "text",
                "attributes": [{ "name": "link", "value": 42 }]
            }]
        }]
    });
    let original = hash.clone();

    transform_attributes(&mut hash, &embed_index(), to_remote).unwrap();
    assert_eq!(hash, original);
}

#[test]
fn leaves_non_indexed_attributes_alone() {
    let mut hash = json!({
        "zones": [{
            "blocks": [{
                "type": "banner",
                "attributes": [{ "name": "caption", "value": 42 }]
            }]
        }]
    });
    let original = hash.clone();

    transform_attributes(&mut hash, &embed_index(), to_remote).unwrap();
    assert_eq!(hash, original);
}

// ── Tolerance for sparse trees ───────────────────────────────────

#[test]
fn tree_without_zones_is_untouched() {
    let mut hash = json!({ "layout": "default" });
    let original = hash.clone();

    transform_attributes(&mut hash, &embed_index(), |_| Err("called".to_string())).unwrap();
    assert_eq!(hash, original);
}

#[test]
fn zone_without_blocks_is_untouched() {
    let mut hash = json!({ "zones": [{ "id": "z1" }] });
    let original = hash.clone();

    transform_attributes(&mut hash, &embed_index(), |_| Err("called".to_string())).unwrap();
    assert_eq!(hash, original);
}

#[test]
fn block_without_type_is_untouched() {
    let mut hash = json!({
        "zones": [{
            "blocks": [{ "attributes": [{ "name": "link", "value": 42 }] }]
        }]
    });
    let original = hash.clone();

    transform_attributes(&mut hash, &embed_index(), |_| Err("called".to_string())).unwrap();
    assert_eq!(hash, original);
}

#[test]
fn indexed_block_without_attributes_is_untouched() {
    let mut hash = json!({
        "zones": [{ "blocks": [{ "type": "banner" }] }]
    });
    let original = hash.clone();

    transform_attributes(&mut hash, &embed_index(), |_| Err("called".to_string())).unwrap();
    assert_eq!(hash, original);
}

#[test]
fn attribute_without_name_is_untouched() {
    let mut hash = json!({
        "zones": [{
            "blocks": [{
                "type": "banner",
                "attributes": [{ "value": 42 }]
            }]
        }]
    });
    let original = hash.clone();

    transform_attributes(&mut hash, &embed_index(), |_| Err("called".to_string())).unwrap();
    assert_eq!(hash, original);
}

#[test]
fn non_array_containers_are_untouched() {
    let mut hash = json!({ "zones": "not-an-array" });
    let original = hash.clone();
    transform_attributes(&mut hash, &embed_index(), to_remote).unwrap();
    assert_eq!(hash, original);

    let mut hash = json!({
        "zones": [{ "blocks": { "type": "banner" } }]
    });
    let original = hash.clone();
    transform_attributes(&mut hash, &embed_index(), to_remote).unwrap();
    assert_eq!(hash, original);
}

#[test]
fn unrelated_keys_survive_verbatim() {
    let mut hash = json!({
        "layout": "two-column",
        "zones": [{
            "id": "z1",
            "name": "left",
            "blocks": [{
                "id": "b1",
                "type": "banner",
                "view": "wide",
                "attributes": [
                    { "id": "a1", "name": "link", "value": 7, "meta": { "x": 1 } },
                ]
            }]
        }]
    });

    transform_attributes(&mut hash, &embed_index(), to_remote).unwrap();

    assert_eq!(
        hash,
        json!({
            "layout": "two-column",
            "zones": [{
                "id": "z1",
                "name": "left",
                "blocks": [{
                    "id": "b1",
                    "type": "banner",
                    "view": "wide",
                    "attributes": [
                        { "id": "a1", "name": "link", "value": "remote-7", "meta": { "x": 1 } },
                    ]
                }]
            }]
        })
    );
}

// ── Walk order and failure ───────────────────────────────────────

#[test]
fn visits_attributes_in_tree_order() {
    let mut hash = json!({
        "zones": [
            { "blocks": [
                { "type": "banner", "attributes": [{ "name": "link", "value": 1 }] },
                { "type": "banner", "attributes": [{ "name": "link", "value": 2 }] },
            ]},
            { "blocks": [
                { "type": "banner", "attributes": [{ "name": "link", "value": 3 }] },
            ]},
        ]
    });

    let mut seen = Vec::new();
    transform_attributes(&mut hash, &embed_index(), |value| {
        seen.push(value.clone());
        Ok::<_, String>(value)
    })
    .unwrap();

    assert_eq!(seen, vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn substitution_failure_aborts_and_keeps_earlier_substitutions() {
    let mut hash = json!({
        "zones": [{
            "blocks": [
                { "type": "banner", "attributes": [{ "name": "link", "value": 1 }] },
                { "type": "banner", "attributes": [{ "name": "link", "value": "boom" }] },
                { "type": "banner", "attributes": [{ "name": "link", "value": 3 }] },
            ]
        }]
    });

    let err = transform_attributes(&mut hash, &embed_index(), to_remote).unwrap_err();
    assert_eq!(err, "not an id: \"boom\"");

    // First attribute already substituted, failing one consumed, later one untouched.
    let blocks = &hash["zones"][0]["blocks"];
    assert_eq!(blocks[0]["attributes"][0]["value"], json!("remote-1"));
    assert_eq!(blocks[2]["attributes"][0]["value"], json!(3));
}

#[test]
fn empty_index_means_identity() {
    let def = BlockDefinition::default();
    let index = ValueKindIndex::derive(&def, &ValueKind::Embed);

    let mut hash = json!({
        "zones": [{
            "blocks": [{
                "type": "banner",
                "attributes": [{ "name": "link", "value": 42 }]
            }]
        }]
    });
    let original = hash.clone();

    transform_attributes(&mut hash, &index, |_| Err("called".to_string())).unwrap();
    assert_eq!(hash, original);
}
