use std::fmt;

use rolodex_model::{DataKind, DataRow, DataStatus, IconRef};
use rolodex_types::{Category, DataId};
use serde::Serialize;

use crate::{Action, LocaleFormatter};

const DATA_CONTENT_URI: &str = "content://com.android.contacts/data";

/// Reference to the data row an entry was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DataUri {
    pub data_id: DataId,
    /// Set for rows served by a remote directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<i64>,
}

impl DataUri {
    #[must_use]
    pub fn new(data_id: DataId, directory_id: Option<i64>) -> Self {
        Self {
            data_id,
            directory_id,
        }
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DATA_CONTENT_URI}/{}", self.data_id)?;
        if let Some(directory) = self.directory_id {
            write!(f, "?directory={directory}")?;
        }
        Ok(())
    }
}

/// One display-ready detail of a contact.
///
/// The category is fixed at construction. Collapsing only changes the
/// label, type, presence, primary flag and line count, and accumulates ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailEntry {
    id: Option<DataId>,
    ids: Vec<DataId>,
    category: Option<Category>,
    /// Section label, e.g. "Phone".
    pub kind: String,
    pub type_code: Option<i64>,
    /// Resolved type label, e.g. "Mobile". Empty when untyped.
    pub type_label: String,
    pub data: String,
    pub uri: Option<DataUri>,
    pub max_lines: u32,
    pub action_icon: Option<IconRef>,
    pub secondary_action_icon: Option<IconRef>,
    pub primary_action: Option<Action>,
    pub secondary_action: Option<Action>,
    pub is_primary: bool,
    pub presence: Option<i32>,
    pub chat_capability: i64,
    pub footer: Option<String>,
    pub in_sub_section: bool,
    collapse_count: u32,
}

impl DetailEntry {
    fn empty(id: Option<DataId>, category: Option<Category>) -> Self {
        Self {
            id,
            ids: id.into_iter().collect(),
            category,
            kind: String::new(),
            type_code: None,
            type_label: String::new(),
            data: String::new(),
            uri: None,
            max_lines: 1,
            action_icon: None,
            secondary_action_icon: None,
            primary_action: None,
            secondary_action: None,
            is_primary: false,
            presence: None,
            chat_capability: 0,
            footer: None,
            in_sub_section: false,
            collapse_count: 0,
        }
    }

    /// A synthetic entry with a label and text but no backing row.
    #[must_use]
    pub fn plain(category: Option<Category>, kind: &str, data: &str) -> Self {
        let mut entry = Self::empty(None, category);
        entry.kind = kind.to_string();
        entry.data = data.to_string();
        entry
    }

    /// Builds an entry from a row using the category metadata in `kind`.
    ///
    /// Sets the label, body text, type and type label, row reference and
    /// primary icon. Category-specific shaping happens in the entry builder.
    #[must_use]
    pub fn from_row(
        category: Category,
        kind: &DataKind,
        row: &DataRow,
        directory_id: Option<i64>,
    ) -> Self {
        let mut entry = Self::empty(Some(row.id), Some(category));
        entry.uri = Some(DataUri::new(row.id, directory_id));
        entry.kind = kind.title_or_empty().to_string();
        entry.data = kind.data_string(row).unwrap_or_default();
        if let Some(code) = kind.type_code(row) {
            entry.type_code = Some(code);
            entry.type_label = kind.type_label(code, row);
        }
        entry.action_icon = kind.icon.clone();
        entry
    }

    /// Row id this entry was built from. `None` for synthetic entries.
    #[must_use]
    pub fn id(&self) -> Option<DataId> {
        self.id
    }

    /// Ids of every row merged into this entry, its own first.
    #[must_use]
    pub fn ids(&self) -> &[DataId] {
        &self.ids
    }

    #[must_use]
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    #[must_use]
    pub fn mimetype(&self) -> Option<&str> {
        self.category.as_ref().map(Category::mimetype)
    }

    /// Number of entries merged into this one.
    #[must_use]
    pub fn collapse_count(&self) -> u32 {
        self.collapse_count
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    /// The action to run when the entry itself is tapped.
    #[must_use]
    pub fn click_action(&self) -> Option<&Action> {
        self.primary_action.as_ref()
    }

    /// Applies presence and status.
    ///
    /// With `fill_data`, a valid status also replaces the body text and sets
    /// the footer to its timestamp label. Otherwise only presence changes.
    pub fn apply_status(
        &mut self,
        status: &DataStatus,
        fill_data: bool,
        locale: &dyn LocaleFormatter,
    ) -> &mut Self {
        self.presence = status.presence;
        if fill_data && status.is_valid() {
            self.data = status.status.clone().unwrap_or_default();
            self.footer = timestamp_label(status, locale);
        }
        self
    }

    pub(crate) fn absorb(&mut self, other: Self) {
        self.ids.extend(other.ids);
        self.collapse_count += 1 + other.collapse_count;
    }
}

fn timestamp_label(status: &DataStatus, locale: &dyn LocaleFormatter) -> Option<String> {
    let time = status.timestamp.map(|millis| locale.format_timestamp(millis));
    match (time, status.source_label.as_deref()) {
        (Some(time), Some(source)) => Some(format!("{time} via {source}")),
        (None, Some(source)) => Some(format!("via {source}")),
        (time, None) => time,
    }
}
