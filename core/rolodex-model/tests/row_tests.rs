use rolodex_model::{DataRow, columns};
use rolodex_types::{Category, DataId, mimetype};
use serde_json::json;

fn phone_row() -> DataRow {
    DataRow::new(DataId::new(1), mimetype::PHONE)
        .with_value(columns::DATA, "650-555-0123")
        .with_value(columns::TYPE, 2)
}

// ── Accessors ────────────────────────────────────────────────────

#[test]
fn get_str_reads_strings_only() {
    let row = phone_row();
    assert_eq!(row.get_str(columns::DATA), Some("650-555-0123"));
    assert_eq!(row.get_str(columns::TYPE), None);
    assert_eq!(row.get_str("missing"), None);
}

#[test]
fn get_string_renders_numbers() {
    let row = phone_row();
    assert_eq!(row.get_string(columns::TYPE).as_deref(), Some("2"));
}

#[test]
fn get_int_parses_numeric_strings() {
    let row = DataRow::new(DataId::new(2), mimetype::IM).with_value(columns::IM_PROTOCOL, " 5 ");
    assert_eq!(row.get_int(columns::IM_PROTOCOL), Some(5));
}

#[test]
fn get_int_rejects_garbage() {
    let row = DataRow::new(DataId::new(2), mimetype::IM)
        .with_value(columns::IM_PROTOCOL, "gtalk")
        .with_value("float", 1.5);
    assert_eq!(row.get_int(columns::IM_PROTOCOL), None);
    assert_eq!(row.get_int("float"), None);
}

#[test]
fn contains_sees_null_columns() {
    let row = DataRow::new(DataId::new(3), mimetype::NOTE).with_value("data1", serde_json::Value::Null);
    assert!(row.contains("data1"));
    assert_eq!(row.get_string("data1"), None);
}

// ── Category ─────────────────────────────────────────────────────

#[test]
fn category_from_mimetype() {
    assert_eq!(phone_row().category(), Some(Category::Phone));
}

#[test]
fn missing_or_blank_mimetype_has_no_category() {
    let mut row = phone_row();
    row.mimetype = None;
    assert_eq!(row.category(), None);
    row.mimetype = Some(" ".into());
    assert_eq!(row.category(), None);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn deserialize_with_defaults() {
    let row: DataRow = serde_json::from_value(json!({
        "id": 9,
        "mimetype": mimetype::EMAIL,
    }))
    .unwrap();
    assert_eq!(row.id, DataId::new(9));
    assert!(!row.is_super_primary);
    assert!(row.values.as_object().unwrap().is_empty());
}

#[test]
fn deserialize_full_row() {
    let row: DataRow = serde_json::from_value(json!({
        "id": 10,
        "mimetype": mimetype::EMAIL,
        "values": {"data1": "a@b.com", "data2": 1},
        "is_super_primary": true,
    }))
    .unwrap();
    assert!(row.is_super_primary);
    assert_eq!(row.get_str(columns::DATA), Some("a@b.com"));
    assert_eq!(row.get_int(columns::TYPE), Some(1));
}
