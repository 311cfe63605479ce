use std::collections::BTreeMap;

use rolodex_types::{DataId, GroupId, RawContactId};
use serde::{Deserialize, Serialize};

use crate::{AccountTypeKey, DataRow, ModelResult};

/// Well-known directory ids.
pub mod directory {
    /// The local contacts directory.
    pub const DEFAULT: i64 = 0;
    /// Local contacts hidden from the default directory.
    pub const LOCAL_INVISIBLE: i64 = 1;
}

/// An account-bound record contributing rows to a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawContact {
    pub id: RawContactId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_set: Option<String>,
    #[serde(default)]
    pub rows: Vec<DataRow>,
}

impl RawContact {
    #[must_use]
    pub fn new(id: RawContactId, account_type: Option<&str>) -> Self {
        Self {
            id,
            account_type: account_type.map(str::to_string),
            data_set: None,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_row(mut self, row: DataRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Key used to look up this record's account type.
    #[must_use]
    pub fn account_key(&self) -> AccountTypeKey {
        AccountTypeKey::new(self.account_type.as_deref(), self.data_set.as_deref())
    }
}

/// Where the contact's display name was taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayNameSource {
    #[default]
    Undefined,
    Email,
    Phone,
    Organization,
    Nickname,
    StructuredName,
}

/// Catalog entry describing one contact group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMetaData {
    pub id: GroupId,
    pub title: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_favorites: bool,
}

impl GroupMetaData {
    #[must_use]
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id: GroupId::new(id),
            title: title.into(),
            is_default: false,
            is_favorites: false,
        }
    }

    #[must_use]
    pub fn default_group(mut self) -> Self {
        self.is_default = true;
        self
    }

    #[must_use]
    pub fn favorites(mut self) -> Self {
        self.is_favorites = true;
        self
    }
}

/// Presence and social status reported for a data row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Name of the app or service that posted the status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
}

impl DataStatus {
    /// True when the status carries text worth showing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Immutable point-in-time view of one logical contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_uri: Option<String>,
    #[serde(default)]
    pub directory_id: i64,
    #[serde(default)]
    pub raw_contacts: Vec<RawContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_raw_contact_id: Option<RawContactId>,
    #[serde(default)]
    pub display_name_source: DisplayNameSource,
    /// `None` for accounts without group support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_metadata: Option<Vec<GroupMetaData>>,
    #[serde(default)]
    pub invitable_account_types: Vec<AccountTypeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic_name: Option<String>,
    #[serde(default)]
    pub statuses: BTreeMap<DataId, DataStatus>,
}

impl ContactSnapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when the contact comes from a remote directory rather than local storage.
    #[must_use]
    pub fn is_directory_entry(&self) -> bool {
        self.directory_id != directory::DEFAULT && self.directory_id != directory::LOCAL_INVISIBLE
    }

    /// Status reported for a data row, if any.
    pub fn status_for(&self, id: DataId) -> Option<&DataStatus> {
        self.statuses.get(&id)
    }

    #[must_use]
    pub fn with_raw_contact(mut self, raw_contact: RawContact) -> Self {
        self.raw_contacts.push(raw_contact);
        self
    }
}
