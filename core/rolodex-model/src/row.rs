use rolodex_types::{Category, DataId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column names used by the well-known categories.
pub mod columns {
    /// Main payload of most categories (number, address, handle, text, ...).
    pub const DATA: &str = "data1";
    /// Type code column.
    pub const TYPE: &str = "data2";
    /// Free-text label for custom type codes.
    pub const LABEL: &str = "data3";
    /// Pre-normalized E.164 form of a phone number.
    pub const PHONE_NORMALIZED_NUMBER: &str = "data4";
    /// Instant-messaging protocol code.
    pub const IM_PROTOCOL: &str = "data5";
    /// Instant-messaging protocol name when the protocol code is custom.
    pub const IM_CUSTOM_PROTOCOL: &str = "data6";
    /// Chat capability bitmask reported by the presence provider.
    pub const IM_CHAT_CAPABILITY: &str = "chat_capability";
    /// Group referenced by a group-membership row.
    pub const GROUP_ROW_ID: &str = "data1";
}

/// One typed data row belonging to a raw contact.
///
/// `values` holds arbitrary column → value pairs. Which columns are
/// meaningful is decided by the row's [`DataKind`](crate::DataKind).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub id: DataId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(default = "empty_object")]
    pub values: Value,
    #[serde(default)]
    pub is_super_primary: bool,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

impl DataRow {
    /// Creates a row with no values.
    #[must_use]
    pub fn new(id: DataId, mimetype: &str) -> Self {
        Self {
            id,
            mimetype: Some(mimetype.to_string()),
            values: empty_object(),
            is_super_primary: false,
        }
    }

    /// Builder-style setter for one column.
    #[must_use]
    pub fn with_value(mut self, column: &str, value: impl Into<Value>) -> Self {
        if let Value::Object(map) = &mut self.values {
            map.insert(column.to_string(), value.into());
        }
        self
    }

    /// Builder-style setter for the super-primary flag.
    #[must_use]
    pub fn super_primary(mut self, is_super_primary: bool) -> Self {
        self.is_super_primary = is_super_primary;
        self
    }

    /// The row's category, or `None` when the mimetype is missing or blank.
    pub fn category(&self) -> Option<Category> {
        self.mimetype.as_deref().and_then(|m| Category::parse(m).ok())
    }

    /// True if the column is present (even when null).
    pub fn contains(&self, column: &str) -> bool {
        self.values.get(column).is_some()
    }

    /// Extract a string value, borrowing it.
    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.values.get(column).and_then(|v| v.as_str())
    }

    /// Extract a value as text. Numbers and booleans are rendered.
    pub fn get_string(&self, column: &str) -> Option<String> {
        match self.values.get(column)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Extract an integer value. Numeric strings are parsed; anything else is `None`.
    pub fn get_int(&self, column: &str) -> Option<i64> {
        match self.values.get(column)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
