use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DataRow;

/// Reference to an icon resource. Rendering resolves the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Identifies an account type: the account type string plus optional data set.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountTypeKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_set: Option<String>,
}

impl AccountTypeKey {
    #[must_use]
    pub fn new(account_type: Option<&str>, data_set: Option<&str>) -> Self {
        Self {
            account_type: account_type.map(str::to_string),
            data_set: data_set.map(str::to_string),
        }
    }

    /// Shorthand for an account type without a data set.
    #[must_use]
    pub fn of(account_type: &str) -> Self {
        Self::new(Some(account_type), None)
    }
}

impl fmt::Display for AccountTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account_type = self.account_type.as_deref().unwrap_or("<local>");
        match &self.data_set {
            Some(data_set) => write!(f, "{account_type}/{data_set}"),
            None => f.write_str(account_type),
        }
    }
}

/// One selectable type code of a data kind (e.g. phone "Mobile").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditType {
    pub raw_value: i64,
    pub label: String,
    /// When set, the label is read from this column of the row instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_column: Option<String>,
}

impl EditType {
    #[must_use]
    pub fn new(raw_value: i64, label: &str) -> Self {
        Self {
            raw_value,
            label: label.into(),
            custom_column: None,
        }
    }

    /// A type whose label is user-supplied and stored in `column`.
    #[must_use]
    pub fn custom(raw_value: i64, label: &str, column: &str) -> Self {
        Self {
            raw_value,
            label: label.into(),
            custom_column: Some(column.into()),
        }
    }
}

fn default_body_column() -> Option<String> {
    Some(crate::columns::DATA.into())
}

/// Category metadata an account type declares for one mimetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataKind {
    pub mimetype: String,
    /// Section title, e.g. "Phone". Empty titles render as "".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    /// Alternate action icon (the SMS icon for phones).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_alt: Option<IconRef>,
    /// Column whose value becomes the entry's data string.
    #[serde(default = "default_body_column")]
    pub body_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_column: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_list: Vec<EditType>,
    /// Status updates replace the body text of rows of this kind.
    #[serde(default)]
    pub action_body_social: bool,
}

impl DataKind {
    /// A kind with a title and the usual `data1` body column.
    #[must_use]
    pub fn new(mimetype: &str, title: &str) -> Self {
        Self {
            mimetype: mimetype.into(),
            title: (!title.is_empty()).then(|| title.to_string()),
            icon: None,
            icon_alt: None,
            body_column: Some(crate::columns::DATA.into()),
            type_column: None,
            type_list: Vec::new(),
            action_body_social: false,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_icon_alt(mut self, icon: &str) -> Self {
        self.icon_alt = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_types(mut self, column: &str, types: Vec<EditType>) -> Self {
        self.type_column = Some(column.into());
        self.type_list = types;
        self
    }

    #[must_use]
    pub fn with_body_social(mut self) -> Self {
        self.action_body_social = true;
        self
    }

    /// Title text, or "" when the kind has none.
    #[must_use]
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// The row's body text according to this kind.
    pub fn data_string(&self, row: &DataRow) -> Option<String> {
        self.body_column
            .as_deref()
            .and_then(|column| row.get_string(column))
    }

    /// The row's type code, if this kind has a type column and the row
    /// carries an integer in it.
    pub fn type_code(&self, row: &DataRow) -> Option<i64> {
        self.type_column
            .as_deref()
            .and_then(|column| row.get_int(column))
    }

    /// Resolves a type code to its label. Unlisted codes resolve to "".
    pub fn type_label(&self, type_code: i64, row: &DataRow) -> String {
        self.type_list
            .iter()
            .find(|t| t.raw_value == type_code)
            .map(|t| match &t.custom_column {
                None => t.label.clone(),
                Some(column) => row.get_string(column).unwrap_or_default(),
            })
            .unwrap_or_default()
    }
}

/// An account type and the data kinds it declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountType {
    #[serde(flatten)]
    pub key: AccountTypeKey,
    pub display_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    #[serde(default)]
    pub read_only: bool,
    /// Package hosting the account type's resources and activities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_action_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_activity: Option<String>,
    #[serde(default)]
    pub kinds: Vec<DataKind>,
}

impl AccountType {
    /// A writable account type with no kinds.
    #[must_use]
    pub fn new(key: AccountTypeKey, display_label: &str) -> Self {
        Self {
            key,
            display_label: display_label.into(),
            icon: None,
            read_only: false,
            res_package_name: None,
            invite_action_label: None,
            invite_activity: None,
            kinds: Vec::new(),
        }
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: DataKind) -> Self {
        self.kinds.push(kind);
        self
    }

    #[must_use]
    pub fn with_invite(mut self, activity: &str, action_label: Option<&str>) -> Self {
        self.invite_activity = Some(activity.into());
        self.invite_action_label = action_label.map(str::to_string);
        self
    }

    /// The kind this account type declares for `mimetype`.
    pub fn kind_for(&self, mimetype: &str) -> Option<&DataKind> {
        self.kinds.iter().find(|k| k.mimetype == mimetype)
    }
}
