use proptest::prelude::*;
use rolodex_types::{Category, Error, mimetype};

// ── Well-known mimetypes ─────────────────────────────────────────

#[test]
fn well_known_mimetypes_classify() {
    assert_eq!(Category::from_mimetype(mimetype::PHONE), Category::Phone);
    assert_eq!(Category::from_mimetype(mimetype::EMAIL), Category::Email);
    assert_eq!(
        Category::from_mimetype(mimetype::STRUCTURED_POSTAL),
        Category::StructuredPostal
    );
    assert_eq!(Category::from_mimetype(mimetype::IM), Category::Im);
    assert_eq!(
        Category::from_mimetype(mimetype::GROUP_MEMBERSHIP),
        Category::GroupMembership
    );
}

#[test]
fn every_well_known_category_roundtrips() {
    let all = [
        Category::StructuredName,
        Category::Phone,
        Category::Email,
        Category::StructuredPostal,
        Category::Im,
        Category::Organization,
        Category::Nickname,
        Category::Note,
        Category::Website,
        Category::SipAddress,
        Category::Event,
        Category::Relation,
        Category::GroupMembership,
    ];
    for category in all {
        assert_eq!(Category::from_mimetype(category.mimetype()), category);
        assert!(!category.is_custom());
    }
}

// ── Custom mimetypes ─────────────────────────────────────────────

#[test]
fn unknown_mimetype_is_custom() {
    let category = Category::from_mimetype("vnd.example.cursor.item/profile");
    assert!(category.is_custom());
    assert_eq!(category.mimetype(), "vnd.example.cursor.item/profile");
    assert_eq!(category.to_string(), "vnd.example.cursor.item/profile");
}

#[test]
fn parse_rejects_blank() {
    assert!(matches!(Category::parse("   "), Err(Error::EmptyMimetype)));
    assert_eq!(Category::parse(mimetype::NOTE).unwrap(), Category::Note);
}

proptest! {
    #[test]
    fn custom_mimetype_is_preserved(s in "[a-z./_]{1,40}") {
        let category = Category::from_mimetype(&s);
        prop_assert_eq!(category.mimetype(), s.as_str());
    }
}
