//! Data row categories.
//!
//! Every data row carries a mimetype string. The well-known mimetypes map to
//! a fixed [`Category`]; anything else is a custom (usually third-party)
//! category and keeps its mimetype verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mimetype strings of the well-known categories.
pub mod mimetype {
    pub const STRUCTURED_NAME: &str = "vnd.android.cursor.item/name";
    pub const PHONE: &str = "vnd.android.cursor.item/phone_v2";
    pub const EMAIL: &str = "vnd.android.cursor.item/email_v2";
    pub const STRUCTURED_POSTAL: &str = "vnd.android.cursor.item/postal-address_v2";
    pub const IM: &str = "vnd.android.cursor.item/im";
    pub const ORGANIZATION: &str = "vnd.android.cursor.item/organization";
    pub const NICKNAME: &str = "vnd.android.cursor.item/nickname";
    pub const NOTE: &str = "vnd.android.cursor.item/note";
    pub const WEBSITE: &str = "vnd.android.cursor.item/website";
    pub const SIP_ADDRESS: &str = "vnd.android.cursor.item/sip_address";
    pub const EVENT: &str = "vnd.android.cursor.item/contact_event";
    pub const RELATION: &str = "vnd.android.cursor.item/relation";
    pub const GROUP_MEMBERSHIP: &str = "vnd.android.cursor.item/group_membership";
}

/// The semantic kind of a data row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StructuredName,
    Phone,
    Email,
    StructuredPostal,
    Im,
    Organization,
    Nickname,
    Note,
    Website,
    SipAddress,
    Event,
    Relation,
    GroupMembership,
    /// Any mimetype not listed above. Holds the original mimetype.
    Custom(String),
}

impl Category {
    /// Classifies a mimetype string.
    #[must_use]
    pub fn from_mimetype(mimetype: &str) -> Self {
        match mimetype {
            mimetype::STRUCTURED_NAME => Self::StructuredName,
            mimetype::PHONE => Self::Phone,
            mimetype::EMAIL => Self::Email,
            mimetype::STRUCTURED_POSTAL => Self::StructuredPostal,
            mimetype::IM => Self::Im,
            mimetype::ORGANIZATION => Self::Organization,
            mimetype::NICKNAME => Self::Nickname,
            mimetype::NOTE => Self::Note,
            mimetype::WEBSITE => Self::Website,
            mimetype::SIP_ADDRESS => Self::SipAddress,
            mimetype::EVENT => Self::Event,
            mimetype::RELATION => Self::Relation,
            mimetype::GROUP_MEMBERSHIP => Self::GroupMembership,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Classifies a mimetype string, rejecting blank input.
    pub fn parse(mimetype: &str) -> crate::Result<Self> {
        let mimetype = mimetype.trim();
        if mimetype.is_empty() {
            return Err(crate::Error::EmptyMimetype);
        }
        Ok(Self::from_mimetype(mimetype))
    }

    /// Returns the mimetype string for this category.
    #[must_use]
    pub fn mimetype(&self) -> &str {
        match self {
            Self::StructuredName => mimetype::STRUCTURED_NAME,
            Self::Phone => mimetype::PHONE,
            Self::Email => mimetype::EMAIL,
            Self::StructuredPostal => mimetype::STRUCTURED_POSTAL,
            Self::Im => mimetype::IM,
            Self::Organization => mimetype::ORGANIZATION,
            Self::Nickname => mimetype::NICKNAME,
            Self::Note => mimetype::NOTE,
            Self::Website => mimetype::WEBSITE,
            Self::SipAddress => mimetype::SIP_ADDRESS,
            Self::Event => mimetype::EVENT,
            Self::Relation => mimetype::RELATION,
            Self::GroupMembership => mimetype::GROUP_MEMBERSHIP,
            Self::Custom(mimetype) => mimetype,
        }
    }

    /// True for categories not defined by the contact store itself.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mimetype())
    }
}
