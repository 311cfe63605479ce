use rolodex_types::{DataId, GroupId, RawContactId};
use std::collections::HashSet;
use std::str::FromStr;

// ── DataId ────────────────────────────────────────────────────────

#[test]
fn data_id_roundtrip() {
    let id = DataId::new(42);
    assert_eq!(id.get(), 42);
}

#[test]
fn data_id_display_and_parse() {
    let id = DataId::new(1234);
    let s = id.to_string();
    assert_eq!(s, "1234");
    assert_eq!(DataId::parse(&s).unwrap(), id);
}

#[test]
fn data_id_parse_trims_whitespace() {
    assert_eq!(DataId::parse(" 7 ").unwrap(), DataId::new(7));
}

#[test]
fn data_id_from_str_invalid() {
    assert!(DataId::from_str("seven").is_err());
    assert!(DataId::parse("").is_err());
}

#[test]
fn data_id_ordering() {
    assert!(DataId::new(1) < DataId::new(2));
}

#[test]
fn data_id_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(DataId::new(3));
    set.insert(DataId::new(3));
    assert_eq!(set.len(), 1);
}

#[test]
fn data_id_serde_is_transparent() {
    let json = serde_json::to_string(&DataId::new(99)).unwrap();
    assert_eq!(json, "99");
    let parsed: DataId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, DataId::new(99));
}

// ── RawContactId ──────────────────────────────────────────────────

#[test]
fn raw_contact_id_display_and_parse() {
    let id = RawContactId::new(-5);
    assert_eq!(id.to_string(), "-5");
    assert_eq!(RawContactId::parse("-5").unwrap(), id);
}

#[test]
fn raw_contact_id_serde_is_transparent() {
    let parsed: RawContactId = serde_json::from_str("11").unwrap();
    assert_eq!(parsed.get(), 11);
}

// ── GroupId ───────────────────────────────────────────────────────

#[test]
fn group_id_from_str() {
    assert_eq!(GroupId::from_str("8").unwrap(), GroupId::new(8));
    assert!(GroupId::from_str("8a").is_err());
}
