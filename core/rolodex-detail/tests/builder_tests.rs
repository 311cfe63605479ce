use pretty_assertions::assert_eq;
use rolodex_detail::{
    Action, Buckets, Capabilities, ChatMode, DefaultLocaleFormatter, DetailEntry, EntryBuilder,
    build_im_actions, im_protocol,
};
use rolodex_model::{
    AccountType, AccountTypeKey, AccountTypeRegistry, AccountTypeResolver, ContactSnapshot,
    DataKind, DataRow, DataStatus, DisplayNameSource, IconRef, RawContact, columns, icons,
};
use rolodex_types::{Category, DataId, GroupId, RawContactId, mimetype};

const SOCIAL: &str = "com.example.social";
const PROFILE: &str = "vnd.example/profile";

fn registry() -> AccountTypeRegistry {
    AccountTypeRegistry::new()
        .with_account_type(
            AccountType::new(AccountTypeKey::of(SOCIAL), "Social")
                .read_only()
                .with_kind(DataKind::new(PROFILE, "Profile").with_body_social()),
        )
        .unwrap()
}

fn row(id: i64, mimetype: &str, data: &str) -> DataRow {
    DataRow::new(DataId::new(id), mimetype).with_value(columns::DATA, data)
}

fn snapshot_of(rows: Vec<DataRow>) -> ContactSnapshot {
    let mut raw = RawContact::new(RawContactId::new(10), None);
    raw.rows = rows;
    ContactSnapshot::default().with_raw_contact(raw)
}

fn build_with(snapshot: &ContactSnapshot, capabilities: Capabilities) -> Buckets {
    let registry = registry();
    EntryBuilder::new(
        snapshot,
        &registry,
        capabilities,
        &DefaultLocaleFormatter,
        "US",
    )
    .build()
}

fn build(snapshot: &ContactSnapshot) -> Buckets {
    build_with(snapshot, Capabilities::default())
}

// ── Phone ────────────────────────────────────────────────────────

#[test]
fn super_primary_phone_with_call_and_sms() {
    let snapshot = snapshot_of(vec![
        row(1, mimetype::PHONE, "+1 650-555-0123").super_primary(true),
    ]);
    let buckets = build(&snapshot);

    let entry = &buckets.phone[0];
    assert_eq!(entry.data, "+1 650-555-0123");
    assert_eq!(entry.primary_action, Some(Action::call("+16505550123")));
    assert_eq!(entry.secondary_action, Some(Action::sms("+16505550123")));
    assert_eq!(entry.action_icon, Some(IconRef::new(icons::CALL)));
    assert_eq!(entry.secondary_action_icon, Some(IconRef::new(icons::SMS)));
    assert!(entry.is_primary);
    assert_eq!(buckets.preferred_phone, entry.uri);
    assert_eq!(buckets.phone_count, 1);
}

#[test]
fn sms_only_device_swaps_icon() {
    let snapshot = snapshot_of(vec![row(1, mimetype::PHONE, "6505550123")]);
    let capabilities = Capabilities {
        can_place_calls: false,
        ..Capabilities::default()
    };
    let entry = &build_with(&snapshot, capabilities).phone[0];
    assert_eq!(entry.data, "(650) 555-0123");
    assert_eq!(entry.primary_action, Some(Action::sms("6505550123")));
    assert_eq!(entry.secondary_action, None);
    assert_eq!(entry.action_icon, Some(IconRef::new(icons::SMS)));
}

#[test]
fn no_telephony_means_no_phone_action() {
    let snapshot = snapshot_of(vec![row(1, mimetype::PHONE, "6505550123")]);
    let entry = &build_with(&snapshot, Capabilities::none()).phone[0];
    assert!(entry.primary_action.is_none());
    assert!(entry.action_icon.is_none());
}

#[test]
fn last_super_primary_phone_wins() {
    let snapshot = snapshot_of(vec![
        row(1, mimetype::PHONE, "111-1111").super_primary(true),
        row(2, mimetype::PHONE, "222-2222").super_primary(true),
        row(3, mimetype::PHONE, ""),
    ]);
    let buckets = build(&snapshot);
    assert_eq!(buckets.preferred_phone.map(|u| u.data_id), Some(DataId::new(2)));
    assert_eq!(buckets.phone_count, 2);
    assert_eq!(buckets.phone.len(), 2);
}

#[test]
fn phone_type_label_resolves() {
    let snapshot = snapshot_of(vec![
        row(1, mimetype::PHONE, "6505550123").with_value(columns::TYPE, "2"),
        row(2, mimetype::PHONE, "6505550124")
            .with_value(columns::TYPE, 0)
            .with_value(columns::LABEL, "Boat"),
        row(3, mimetype::PHONE, "6505550125").with_value(columns::TYPE, 999),
    ]);
    let labels: Vec<_> = build(&snapshot)
        .phone
        .iter()
        .map(|e| e.type_label.clone())
        .collect();
    assert_eq!(labels, ["Mobile", "Boat", ""]);
}

// ── Email and IM ─────────────────────────────────────────────────

#[test]
fn email_gets_compose_action() {
    let snapshot = snapshot_of(vec![row(1, mimetype::EMAIL, "a@b.com")]);
    let buckets = build(&snapshot);
    assert_eq!(buckets.email[0].primary_action, Some(Action::email("a@b.com")));
    assert!(buckets.im.is_empty());
}

#[test]
fn email_with_status_adds_chat_entry() {
    let mut snapshot = snapshot_of(vec![
        row(1, mimetype::EMAIL, "a@b.com").with_value(columns::IM_CHAT_CAPABILITY, 1),
    ]);
    snapshot.statuses.insert(
        DataId::new(1),
        DataStatus {
            presence: Some(5),
            status: Some("Lunch".to_string()),
            ..DataStatus::default()
        },
    );
    let buckets = build(&snapshot);

    let im = &buckets.im[0];
    assert_eq!(im.category(), Some(&Category::Im));
    assert_eq!(im.id(), Some(DataId::new(1)));
    assert_eq!(im.data, "a@b.com");
    assert_eq!(im.presence, Some(5));
    assert_eq!(im.primary_action, Some(Action::chat("a@b.com", ChatMode::Text)));
    assert_eq!(im.secondary_action, Some(Action::chat("a@b.com", ChatMode::Voice)));
}

fn im_entry(row: &DataRow) -> DetailEntry {
    let registry = AccountTypeRegistry::new();
    let kind = registry.fallback().kind_for(mimetype::IM).unwrap();
    let mut entry = DetailEntry::from_row(Category::Im, kind, row, None);
    build_im_actions(&mut entry, row, false);
    entry
}

#[test]
fn talk_capabilities_pick_secondary_chat() {
    let base = row(1, mimetype::IM, "me@gmail.com")
        .with_value(columns::IM_PROTOCOL, im_protocol::GOOGLE_TALK);

    let text_only = im_entry(&base);
    assert_eq!(text_only.secondary_action, None);
    assert_eq!(text_only.chat_capability, 0);

    let video = im_entry(&base.clone().with_value(
        columns::IM_CHAT_CAPABILITY,
        im_protocol::capability::CAMERA | im_protocol::capability::VOICE,
    ));
    assert_eq!(
        video.secondary_action,
        Some(Action::chat("me@gmail.com", ChatMode::Video))
    );
    assert_eq!(video.secondary_action.unwrap().uri(), "xmpp:me@gmail.com?call");
}

#[test]
fn known_protocols_message_their_host() {
    let entry = im_entry(
        &row(1, mimetype::IM, "buddy").with_value(columns::IM_PROTOCOL, im_protocol::YAHOO),
    );
    let action = entry.primary_action.unwrap();
    assert_eq!(action, Action::instant_message("Yahoo", "buddy"));
    assert_eq!(action.uri(), "imto://yahoo/buddy");
    assert_eq!(entry.action_icon, Some(IconRef::new(icons::TALK)));
}

#[test]
fn custom_protocol_uses_custom_host() {
    let entry = im_entry(
        &row(1, mimetype::IM, "buddy")
            .with_value(columns::IM_PROTOCOL, "-1")
            .with_value(columns::IM_CUSTOM_PROTOCOL, "MyChat"),
    );
    assert_eq!(entry.primary_action, Some(Action::instant_message("mychat", "buddy")));
}

#[test]
fn missing_or_garbage_protocol_means_no_action() {
    let missing = im_entry(&row(1, mimetype::IM, "buddy"));
    assert!(missing.primary_action.is_none());
    let garbage = im_entry(&row(1, mimetype::IM, "buddy").with_value(columns::IM_PROTOCOL, "aim"));
    assert!(garbage.primary_action.is_none());
    let unknown = im_entry(&row(1, mimetype::IM, "buddy").with_value(columns::IM_PROTOCOL, 42));
    assert!(unknown.primary_action.is_none());
}

#[test]
fn im_status_only_updates_presence() {
    let mut snapshot = snapshot_of(vec![
        row(1, mimetype::IM, "buddy").with_value(columns::IM_PROTOCOL, im_protocol::AIM),
    ]);
    snapshot.statuses.insert(
        DataId::new(1),
        DataStatus {
            presence: Some(2),
            status: Some("Away from desk".to_string()),
            ..DataStatus::default()
        },
    );
    let im = &build(&snapshot).im[0];
    assert_eq!(im.data, "buddy");
    assert_eq!(im.presence, Some(2));
    assert!(im.footer.is_none());
}

// ── Other built-in categories ────────────────────────────────────

#[test]
fn postal_opens_map() {
    let snapshot = snapshot_of(vec![row(1, mimetype::STRUCTURED_POSTAL, "1 Main St, Springfield")]);
    let entry = &build(&snapshot).postal[0];
    assert_eq!(entry.max_lines, 4);
    assert_eq!(
        entry.primary_action.as_ref().unwrap().uri(),
        "geo:0,0?q=1+Main+St%2C+Springfield"
    );
}

#[test]
fn names_and_organizations_are_skipped() {
    let snapshot = snapshot_of(vec![
        row(1, mimetype::STRUCTURED_NAME, "Ada Lovelace"),
        row(2, mimetype::ORGANIZATION, "Analytical Engines"),
    ]);
    let buckets = build(&snapshot);
    assert!(buckets.other.is_empty());
    assert!(buckets.phone.is_empty() && buckets.email.is_empty());
}

#[test]
fn nickname_duplicating_display_name_is_skipped() {
    let mut snapshot = snapshot_of(vec![row(1, mimetype::NICKNAME, "Ada")]);
    assert_eq!(build(&snapshot).nickname.len(), 1);

    snapshot.name_raw_contact_id = Some(RawContactId::new(10));
    snapshot.display_name_source = DisplayNameSource::Nickname;
    assert!(build(&snapshot).nickname.is_empty());
}

#[test]
fn notes_and_nicknames_have_no_row_reference() {
    let snapshot = snapshot_of(vec![
        row(1, mimetype::NOTE, "Met at the conference"),
        row(2, mimetype::NICKNAME, "Ada"),
    ]);
    let buckets = build(&snapshot);
    assert_eq!(buckets.note[0].max_lines, 100);
    assert!(buckets.note[0].uri.is_none());
    assert!(buckets.nickname[0].uri.is_none());
    assert!(buckets.note[0].primary_action.is_none());
}

#[test]
fn website_parses_or_keeps_data_without_action() {
    let snapshot = snapshot_of(vec![
        row(1, mimetype::WEBSITE, "example.com"),
        row(2, mimetype::WEBSITE, "gopher://example.com"),
    ]);
    let website = build(&snapshot).website;
    assert_eq!(website[0].max_lines, 10);
    assert_eq!(
        website[0].primary_action,
        Some(Action::ViewUrl {
            url: "http://example.com/".to_string()
        })
    );
    assert_eq!(website[1].data, "gopher://example.com");
    assert!(website[1].primary_action.is_none());
}

#[test]
fn sip_follows_capability() {
    let snapshot = snapshot_of(vec![row(1, mimetype::SIP_ADDRESS, "ada@sip.example.com")]);
    let without = &build(&snapshot).sip[0];
    assert!(without.primary_action.is_none());
    assert!(without.action_icon.is_none());

    let capabilities = Capabilities {
        can_use_sip: true,
        ..Capabilities::default()
    };
    let with = &build_with(&snapshot, capabilities).sip[0];
    assert_eq!(with.primary_action, Some(Action::sip_call("ada@sip.example.com")));
}

#[test]
fn events_are_reformatted() {
    let snapshot = snapshot_of(vec![
        row(1, mimetype::EVENT, "1815-12-10").with_value(columns::TYPE, 3),
        row(2, mimetype::EVENT, "--03-14"),
    ]);
    let events = build(&snapshot).event;
    assert_eq!(events[0].data, "December 10, 1815");
    assert_eq!(events[0].type_label, "Birthday");
    assert_eq!(events[1].data, "March 14");
    assert!(events[0].uri.is_none());
}

#[test]
fn relation_searches_contacts() {
    let snapshot = snapshot_of(vec![row(1, mimetype::RELATION, "Charles Babbage")]);
    let entry = &build(&snapshot).relation[0];
    match entry.primary_action.as_ref().unwrap() {
        Action::SearchContacts { query, type_filter } => {
            assert_eq!(query, "Charles Babbage");
            assert_eq!(type_filter, "vnd.android.cursor.dir/contact");
        }
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn group_rows_are_collected_not_built() {
    let snapshot = snapshot_of(vec![
        DataRow::new(DataId::new(1), mimetype::GROUP_MEMBERSHIP)
            .with_value(columns::GROUP_ROW_ID, 4),
        DataRow::new(DataId::new(2), mimetype::GROUP_MEMBERSHIP),
    ]);
    assert_eq!(build(&snapshot).group_ids, [GroupId::new(4)]);
}

// ── Custom rows and accounts ─────────────────────────────────────

#[test]
fn custom_rows_file_under_their_account() {
    let mut raw = RawContact::new(RawContactId::new(20), Some(SOCIAL));
    raw.rows = vec![
        row(1, PROFILE, "View profile"),
        row(2, PROFILE, ""),
        row(3, "vnd.unknown/thing", "ignored"),
    ];
    let snapshot = ContactSnapshot::default().with_raw_contact(raw);
    let buckets = build(&snapshot);

    let entries = &buckets.other[&AccountTypeKey::of(SOCIAL)];
    assert_eq!(entries.len(), 1);
    let uri = entries[0].uri.unwrap();
    assert_eq!(entries[0].primary_action, Some(Action::view_data(&uri, PROFILE)));
    assert_eq!(uri.to_string(), "content://com.android.contacts/data/1");
}

#[test]
fn social_status_replaces_custom_body() {
    let mut raw = RawContact::new(RawContactId::new(20), Some(SOCIAL));
    raw.rows = vec![row(1, PROFILE, "")];
    let mut snapshot = ContactSnapshot::default().with_raw_contact(raw);
    snapshot.statuses.insert(
        DataId::new(1),
        DataStatus {
            status: Some("At the beach".to_string()),
            timestamp: Some(0),
            source_label: Some("Social".to_string()),
            ..DataStatus::default()
        },
    );
    let buckets = build(&snapshot);
    let entry = &buckets.other[&AccountTypeKey::of(SOCIAL)][0];
    assert_eq!(entry.data, "At the beach");
    assert_eq!(entry.footer.as_deref(), Some("Jan 1, 1970 00:00 via Social"));
}

#[test]
fn raw_contact_ids_and_writability() {
    let snapshot = ContactSnapshot::default()
        .with_raw_contact(RawContact::new(RawContactId::new(1), None))
        .with_raw_contact(RawContact::new(RawContactId::new(2), Some(SOCIAL)))
        .with_raw_contact(RawContact::new(RawContactId::new(3), Some("com.unknown")))
        .with_raw_contact(RawContact::new(RawContactId::new(1), None));
    let buckets = build(&snapshot);
    assert_eq!(
        buckets.raw_contact_ids,
        [1, 2, 3].map(RawContactId::new)
    );
    assert_eq!(
        buckets.writable_raw_contact_ids,
        [1, 3].map(RawContactId::new)
    );
}

#[test]
fn directory_rows_carry_directory_parameter() {
    let mut snapshot = snapshot_of(vec![row(7, mimetype::EMAIL, "a@b.com")]);
    snapshot.directory_id = 3;
    let entry = &build(&snapshot).email[0];
    assert_eq!(
        entry.uri.unwrap().to_string(),
        "content://com.android.contacts/data/7?directory=3"
    );
}

#[test]
fn rows_without_mimetype_are_skipped() {
    let mut no_mimetype = row(1, mimetype::EMAIL, "a@b.com");
    no_mimetype.mimetype = None;
    let buckets = build(&snapshot_of(vec![no_mimetype]));
    assert!(buckets.email.is_empty());
}
