use pageport_types::{ContentId, ContentRemoteId, LocationId, LocationRemoteId};
use pretty_assertions::assert_eq;

// ── Numeric ids ──────────────────────────────────────────────────

#[test]
fn content_id_display_and_parse() {
    let id = ContentId::new(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!("42".parse::<ContentId>().unwrap(), id);
    assert_eq!(id.as_u64(), 42);
}

#[test]
fn content_id_parse_rejects_garbage() {
    assert!("".parse::<ContentId>().is_err());
    assert!("forty-two".parse::<ContentId>().is_err());
    assert!("-1".parse::<ContentId>().is_err());
}

#[test]
fn location_id_display_and_parse() {
    let id = LocationId::new(7);
    assert_eq!(id.to_string(), "7");
    assert_eq!("7".parse::<LocationId>().unwrap(), id);
    assert_eq!(id.as_u64(), 7);
}

#[test]
fn numeric_ids_serialize_transparently() {
    assert_eq!(serde_json::to_string(&ContentId::new(42)).unwrap(), "42");
    assert_eq!(serde_json::to_string(&LocationId::new(7)).unwrap(), "7");

    let id: ContentId = serde_json::from_str("42").unwrap();
    assert_eq!(id, ContentId::new(42));
}

#[test]
fn numeric_ids_from_u64() {
    assert_eq!(ContentId::from(5), ContentId::new(5));
    assert_eq!(LocationId::from(5), LocationId::new(5));
}

// ── Remote ids ───────────────────────────────────────────────────

#[test]
fn remote_ids_wrap_strings() {
    let remote = ContentRemoteId::new("abc123");
    assert_eq!(remote.as_str(), "abc123");
    assert_eq!(remote.to_string(), "abc123");
    assert_eq!(remote.into_string(), "abc123");
}

#[test]
fn remote_ids_serialize_transparently() {
    let remote = LocationRemoteId::new("rA");
    assert_eq!(serde_json::to_string(&remote).unwrap(), "\"rA\"");

    let parsed: LocationRemoteId = serde_json::from_str("\"rA\"").unwrap();
    assert_eq!(parsed, remote);
}

#[test]
fn remote_ids_from_str_slices() {
    assert_eq!(ContentRemoteId::from("x"), ContentRemoteId::new("x"));
    assert_eq!(LocationRemoteId::from("x"), LocationRemoteId::new("x"));
}

#[test]
fn content_and_location_remote_ids_are_distinct_types() {
    // Same underlying string, different meaning; equality is per type.
    let content = ContentRemoteId::new("same");
    let location = LocationRemoteId::new("same");
    assert_eq!(content.as_str(), location.as_str());
}
