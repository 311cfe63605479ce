//! Row-to-entry transformation and bucketing.

use indexmap::IndexMap;
use rolodex_model::{
    AccountTypeKey, AccountTypeResolver, ContactSnapshot, DataKind, DataRow, DisplayNameSource,
    IconRef, RawContact, columns, icons,
};
use rolodex_types::{Category, GroupId, RawContactId, mimetype};
use tracing::{debug, warn};

use crate::{
    Action, Capabilities, ChatMode, DataUri, DetailEntry, LocaleFormatter, WebAddress,
    collapse_list,
};

/// Instant-messaging protocol codes and chat capability bits.
pub mod im_protocol {
    pub const CUSTOM: i64 = -1;
    pub const AIM: i64 = 0;
    pub const MSN: i64 = 1;
    pub const YAHOO: i64 = 2;
    pub const SKYPE: i64 = 3;
    pub const QQ: i64 = 4;
    pub const GOOGLE_TALK: i64 = 5;
    pub const ICQ: i64 = 6;
    pub const JABBER: i64 = 7;

    pub mod capability {
        pub const VOICE: i64 = 1;
        pub const VIDEO: i64 = 2;
        pub const CAMERA: i64 = 4;
    }

    /// Host name of a well-known protocol.
    #[must_use]
    pub fn provider_host(protocol: i64) -> Option<&'static str> {
        match protocol {
            AIM => Some("AIM"),
            MSN => Some("MSN"),
            YAHOO => Some("Yahoo"),
            SKYPE => Some("SKYPE"),
            QQ => Some("QQ"),
            GOOGLE_TALK => Some("GTalk"),
            ICQ => Some("ICQ"),
            JABBER => Some("JABBER"),
            _ => None,
        }
    }
}

/// Entries filed by category, plus the counters gathered on the way.
#[derive(Debug, Default)]
pub struct Buckets {
    pub phone: Vec<DetailEntry>,
    pub email: Vec<DetailEntry>,
    pub im: Vec<DetailEntry>,
    pub postal: Vec<DetailEntry>,
    pub nickname: Vec<DetailEntry>,
    pub website: Vec<DetailEntry>,
    pub sip: Vec<DetailEntry>,
    pub event: Vec<DetailEntry>,
    pub relation: Vec<DetailEntry>,
    pub note: Vec<DetailEntry>,
    /// Group summary, filled in after building.
    pub group: Option<DetailEntry>,
    /// Third-party rows by account type, in first-encountered order.
    pub other: IndexMap<AccountTypeKey, Vec<DetailEntry>>,
    /// Group memberships in row order; duplicates are kept.
    pub group_ids: Vec<GroupId>,
    pub phone_count: usize,
    pub preferred_phone: Option<DataUri>,
    pub raw_contact_ids: Vec<RawContactId>,
    pub writable_raw_contact_ids: Vec<RawContactId>,
}

impl Buckets {
    /// Collapses the phone, email, postal and IM buckets in place.
    pub fn collapse(&mut self) {
        let collapsible = [
            ("phone", &mut self.phone),
            ("email", &mut self.email),
            ("postal", &mut self.postal),
            ("im", &mut self.im),
        ];
        for (name, bucket) in collapsible {
            let before = bucket.len();
            *bucket = collapse_list(std::mem::take(bucket));
            if bucket.len() != before {
                debug!(bucket = name, before, after = bucket.len(), "collapsed entries");
            }
        }
    }
}

/// Turns the rows of a snapshot into [`Buckets`].
pub struct EntryBuilder<'a> {
    snapshot: &'a ContactSnapshot,
    resolver: &'a dyn AccountTypeResolver,
    capabilities: Capabilities,
    locale: &'a dyn LocaleFormatter,
    country_iso: &'a str,
}

impl<'a> EntryBuilder<'a> {
    #[must_use]
    pub fn new(
        snapshot: &'a ContactSnapshot,
        resolver: &'a dyn AccountTypeResolver,
        capabilities: Capabilities,
        locale: &'a dyn LocaleFormatter,
        country_iso: &'a str,
    ) -> Self {
        Self {
            snapshot,
            resolver,
            capabilities,
            locale,
            country_iso,
        }
    }

    /// Builds every row of every raw contact. Nothing is collapsed yet.
    #[must_use]
    pub fn build(&self) -> Buckets {
        let mut buckets = Buckets::default();
        for raw in &self.snapshot.raw_contacts {
            self.build_raw_contact(raw, &mut buckets);
        }
        buckets
    }

    fn directory_id(&self) -> Option<i64> {
        self.snapshot
            .is_directory_entry()
            .then_some(self.snapshot.directory_id)
    }

    fn build_raw_contact(&self, raw: &RawContact, buckets: &mut Buckets) {
        let key = raw.account_key();
        debug!(raw_contact = %raw.id, account = %key, rows = raw.rows.len(), "building entries");

        if !buckets.raw_contact_ids.contains(&raw.id) {
            buckets.raw_contact_ids.push(raw.id);
        }
        if self.resolver.is_writable(&key) && !buckets.writable_raw_contact_ids.contains(&raw.id) {
            buckets.writable_raw_contact_ids.push(raw.id);
        }

        for row in &raw.rows {
            let Some(row_mimetype) = row.mimetype.as_deref() else {
                debug!(data_id = %row.id, "row without mimetype skipped");
                continue;
            };

            if row_mimetype == mimetype::GROUP_MEMBERSHIP {
                if let Some(group_id) = row.get_int(columns::GROUP_ROW_ID) {
                    buckets.group_ids.push(GroupId::new(group_id));
                }
                continue;
            }

            let Some(kind) = self.resolver.kind_or_fallback(&key, row_mimetype) else {
                debug!(data_id = %row.id, mimetype = row_mimetype, "no kind for row, skipped");
                continue;
            };

            self.build_row(raw, &key, kind, row, buckets);
        }
    }

    fn build_row(
        &self,
        raw: &RawContact,
        key: &AccountTypeKey,
        kind: &DataKind,
        row: &DataRow,
        buckets: &mut Buckets,
    ) {
        let category = Category::from_mimetype(&kind.mimetype);
        let mut entry = DetailEntry::from_row(category.clone(), kind, row, self.directory_id());
        let has_data = entry.has_data();

        match category {
            Category::StructuredName | Category::Organization => {}
            Category::Phone if has_data => {
                self.shape_phone(&mut entry, kind, row, buckets);
                buckets.phone.push(entry);
            }
            Category::Email if has_data => {
                entry.primary_action = Some(Action::email(&entry.data));
                entry.is_primary = row.is_super_primary;
                buckets.email.push(entry);

                if let Some(im) = self.im_entry_from_email(key, row) {
                    buckets.im.push(im);
                }
            }
            Category::StructuredPostal if has_data => {
                entry.max_lines = 4;
                entry.primary_action = Some(Action::map(&entry.data));
                buckets.postal.push(entry);
            }
            Category::Im if has_data => {
                build_im_actions(&mut entry, row, false);
                if let Some(status) = self.snapshot.status_for(row.id) {
                    entry.apply_status(status, false, self.locale);
                }
                buckets.im.push(entry);
            }
            Category::Nickname if has_data => {
                let duplicates_title = self.snapshot.name_raw_contact_id == Some(raw.id)
                    && self.snapshot.display_name_source == DisplayNameSource::Nickname;
                if !duplicates_title {
                    entry.uri = None;
                    buckets.nickname.push(entry);
                }
            }
            Category::Note if has_data => {
                entry.uri = None;
                entry.max_lines = 100;
                buckets.note.push(entry);
            }
            Category::Website if has_data => {
                entry.uri = None;
                entry.max_lines = 10;
                match WebAddress::parse(&entry.data) {
                    Ok(address) => {
                        entry.primary_action = Some(Action::ViewUrl {
                            url: address.to_string(),
                        });
                    }
                    Err(err) => warn!(data_id = %row.id, error = %err, "could not parse website"),
                }
                buckets.website.push(entry);
            }
            Category::SipAddress if has_data => {
                entry.uri = None;
                entry.max_lines = 1;
                if self.capabilities.can_use_sip {
                    entry.primary_action = Some(Action::sip_call(&entry.data));
                } else {
                    entry.action_icon = None;
                }
                buckets.sip.push(entry);
            }
            Category::Event if has_data => {
                entry.data = self.locale.format_date(&entry.data);
                entry.uri = None;
                buckets.event.push(entry);
            }
            Category::Relation if has_data => {
                entry.primary_action = Some(Action::search_contacts(&entry.data));
                buckets.relation.push(entry);
            }
            Category::Custom(_) => self.file_custom(entry, key, kind, row, buckets),
            _ => debug!(data_id = %row.id, "row without data skipped"),
        }
    }

    fn shape_phone(
        &self,
        entry: &mut DetailEntry,
        kind: &DataKind,
        row: &DataRow,
        buckets: &mut Buckets,
    ) {
        buckets.phone_count += 1;

        let e164 = row.get_str(columns::PHONE_NORMALIZED_NUMBER);
        entry.data = self
            .locale
            .format_phone(&entry.data, e164, self.country_iso);

        let Capabilities {
            can_place_calls,
            can_send_sms,
            ..
        } = self.capabilities;
        match (can_place_calls, can_send_sms) {
            (true, true) => {
                entry.primary_action = Some(Action::call(&entry.data));
                entry.secondary_action = Some(Action::sms(&entry.data));
                entry.secondary_action_icon = kind.icon_alt.clone();
            }
            (true, false) => entry.primary_action = Some(Action::call(&entry.data)),
            (false, true) => {
                entry.primary_action = Some(Action::sms(&entry.data));
                entry.action_icon = kind.icon_alt.clone();
            }
            (false, false) => entry.action_icon = None,
        }

        if row.is_super_primary {
            buckets.preferred_phone = entry.uri;
        }
        entry.is_primary = row.is_super_primary;
    }

    /// Email rows with a status also show up as a chat entry.
    fn im_entry_from_email(&self, key: &AccountTypeKey, row: &DataRow) -> Option<DetailEntry> {
        let status = self.snapshot.status_for(row.id)?;
        let Some(im_kind) = self.resolver.kind_or_fallback(key, mimetype::IM) else {
            debug!(data_id = %row.id, "no IM kind for email status");
            return None;
        };
        let mut im = DetailEntry::from_row(Category::Im, im_kind, row, self.directory_id());
        build_im_actions(&mut im, row, true);
        im.apply_status(status, false, self.locale);
        Some(im)
    }

    fn file_custom(
        &self,
        mut entry: DetailEntry,
        key: &AccountTypeKey,
        kind: &DataKind,
        row: &DataRow,
        buckets: &mut Buckets,
    ) {
        if let Some(uri) = &entry.uri {
            entry.primary_action = Some(Action::view_data(uri, &kind.mimetype));
        }

        let status = self
            .snapshot
            .status_for(row.id)
            .filter(|_| kind.action_body_social);
        if let Some(status) = status {
            entry.apply_status(status, true, self.locale);
        }

        if status.is_some() || entry.has_data() {
            buckets.other.entry(key.clone()).or_default().push(entry);
        } else {
            debug!(data_id = %row.id, mimetype = %kind.mimetype, "custom row without data skipped");
        }
    }
}

/// Sets the chat actions of an IM entry built from `row`.
///
/// `from_email` treats the row as an email row reached over Google Talk.
/// Rows without a usable protocol or handle are left untouched.
pub fn build_im_actions(entry: &mut DetailEntry, row: &DataRow, from_email: bool) {
    let protocol = if from_email {
        Some(im_protocol::GOOGLE_TALK)
    } else {
        row.get_int(columns::IM_PROTOCOL)
    };
    let Some(protocol) = protocol else {
        return;
    };
    let Some(handle) = row.get_string(columns::DATA).filter(|h| !h.is_empty()) else {
        return;
    };

    if protocol == im_protocol::GOOGLE_TALK {
        use im_protocol::capability;

        let chat_capability = row.get_int(columns::IM_CHAT_CAPABILITY).unwrap_or(0);
        entry.chat_capability = chat_capability;
        entry.action_icon = Some(IconRef::new(icons::TALK));
        entry.primary_action = Some(Action::chat(&handle, ChatMode::Text));
        entry.secondary_action = if chat_capability & capability::CAMERA != 0 {
            Some(Action::chat(&handle, ChatMode::Video))
        } else if chat_capability & capability::VOICE != 0 {
            Some(Action::chat(&handle, ChatMode::Voice))
        } else {
            None
        };
        return;
    }

    let host = if protocol == im_protocol::CUSTOM {
        row.get_string(columns::IM_CUSTOM_PROTOCOL)
    } else {
        im_protocol::provider_host(protocol).map(str::to_string)
    };
    if let Some(host) = host.filter(|h| !h.is_empty()) {
        entry.action_icon = Some(IconRef::new(icons::TALK));
        entry.primary_action = Some(Action::instant_message(&host, &handle));
    }
}
