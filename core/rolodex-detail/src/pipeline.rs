//! End-to-end list building.

use rolodex_model::{AccountTypeResolver, ContactSnapshot};
use rolodex_types::RawContactId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    DataUri, DefaultLocaleFormatter, DefaultStrings, DetailEntry, EntryBuilder, GroupSummarizer,
    ListAssembler, ListEntry, LocaleFormatter, StringKey, StringResolver,
};

/// Which actions the device can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub can_place_calls: bool,
    pub can_send_sms: bool,
    pub can_use_sip: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            can_place_calls: true,
            can_send_sms: true,
            can_use_sip: false,
        }
    }
}

impl Capabilities {
    /// No calls, no messages, no SIP.
    #[must_use]
    pub fn none() -> Self {
        Self {
            can_place_calls: false,
            can_send_sms: false,
            can_use_sip: false,
        }
    }
}

fn default_country_iso() -> String {
    "US".to_string()
}

/// Settings for one pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub capabilities: Capabilities,
    /// Region used to format numbers without a country code.
    #[serde(default = "default_country_iso")]
    pub default_country_iso: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            capabilities: Capabilities::default(),
            default_country_iso: default_country_iso(),
        }
    }
}

/// The built list and the facts gathered while building it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailList {
    pub entries: Vec<ListEntry>,
    pub phone_count: usize,
    pub preferred_phone: Option<DataUri>,
    pub raw_contact_ids: Vec<RawContactId>,
    pub writable_raw_contact_ids: Vec<RawContactId>,
}

impl DetailList {
    /// The detail entry holding the preferred phone number, if any.
    ///
    /// Collapsing may have merged the preferred row into another entry, so
    /// this searches merged ids rather than the surviving entry's own id.
    #[must_use]
    pub fn preferred_phone_entry(&self) -> Option<&DetailEntry> {
        let preferred = self.preferred_phone?.data_id;
        self.details().find(|e| e.ids().contains(&preferred))
    }

    /// All detail entries in list order.
    pub fn details(&self) -> impl Iterator<Item = &DetailEntry> {
        self.entries.iter().filter_map(ListEntry::as_detail)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs builder, collapser, group summarizer and assembler over a snapshot.
pub struct DetailPipeline<'a> {
    resolver: &'a dyn AccountTypeResolver,
    locale: Box<dyn LocaleFormatter>,
    strings: Box<dyn StringResolver>,
    options: BuildOptions,
}

impl<'a> DetailPipeline<'a> {
    /// A pipeline with the default formatter and English strings.
    #[must_use]
    pub fn new(resolver: &'a dyn AccountTypeResolver, options: BuildOptions) -> Self {
        Self {
            resolver,
            locale: Box::new(DefaultLocaleFormatter),
            strings: Box::new(DefaultStrings),
            options,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl LocaleFormatter + 'static) -> Self {
        self.locale = Box::new(locale);
        self
    }

    #[must_use]
    pub fn with_strings(mut self, strings: impl StringResolver + 'static) -> Self {
        self.strings = Box::new(strings);
        self
    }

    #[must_use]
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Builds the list for `snapshot`. No snapshot yields an empty list.
    #[must_use]
    pub fn build(&self, snapshot: Option<&ContactSnapshot>) -> DetailList {
        let Some(snapshot) = snapshot else {
            return DetailList::default();
        };

        let mut buckets = EntryBuilder::new(
            snapshot,
            self.resolver,
            self.options.capabilities,
            self.locale.as_ref(),
            &self.options.default_country_iso,
        )
        .build();

        buckets.collapse();

        let mut groups = GroupSummarizer::new(snapshot.group_metadata.as_deref());
        for &group_id in &buckets.group_ids {
            groups.add(group_id);
        }
        buckets.group = groups.summarize(&self.strings.resolve(StringKey::GroupsLabel));

        let phone_count = buckets.phone_count;
        let preferred_phone = buckets.preferred_phone;
        let raw_contact_ids = std::mem::take(&mut buckets.raw_contact_ids);
        let writable_raw_contact_ids = std::mem::take(&mut buckets.writable_raw_contact_ids);

        let entries =
            ListAssembler::new(snapshot, self.resolver, self.strings.as_ref()).assemble(buckets);
        debug!(entries = entries.len(), phone_count, "built detail list");

        DetailList {
            entries,
            phone_count,
            preferred_phone,
            raw_contact_ids,
            writable_raw_contact_ids,
        }
    }
}
