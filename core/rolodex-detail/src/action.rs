//! Action descriptors attached to detail entries.
//!
//! An [`Action`] says what tapping an entry should do. The presentation
//! layer maps it to a platform operation; [`Action::uri`] gives the
//! conventional URI form for platforms that dispatch on URIs.

use serde::Serialize;
use url::form_urlencoded::byte_serialize;

use crate::DataUri;
use crate::phone::{normalize_number, numbers_match};

/// Which chat channel a chat action opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMode {
    Text,
    Voice,
    Video,
}

/// Fieldless discriminant of [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Call,
    SipCall,
    SendSms,
    SendEmail,
    ViewMap,
    Chat,
    InstantMessage,
    ViewUrl,
    SearchContacts,
    ViewData,
    InviteContact,
}

/// What an entry does when activated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Place a call. `number` is normalized.
    Call { number: String },
    SipCall { address: String },
    /// Compose a text message. `number` is normalized.
    SendSms { number: String },
    SendEmail { address: String },
    ViewMap { query: String },
    /// Google Talk style chat on `handle`.
    Chat { handle: String, mode: ChatMode },
    /// Message `handle` on the provider at `host` (lower-cased).
    InstantMessage { host: String, handle: String },
    ViewUrl { url: String },
    /// Search the user's contacts for `query`, restricted to `type_filter`.
    SearchContacts { query: String, type_filter: String },
    /// Open the raw data row with whatever handles its mimetype.
    ViewData { uri: String, mimetype: String },
    InviteContact {
        lookup_uri: String,
        activity: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        package: Option<String>,
    },
}

/// Type filter used by relation searches.
pub(crate) const CONTACTS_TYPE: &str = "vnd.android.cursor.dir/contact";

impl Action {
    #[must_use]
    pub fn call(number: &str) -> Self {
        Self::Call {
            number: normalize_number(number),
        }
    }

    #[must_use]
    pub fn sms(number: &str) -> Self {
        Self::SendSms {
            number: normalize_number(number),
        }
    }

    #[must_use]
    pub fn sip_call(address: &str) -> Self {
        Self::SipCall {
            address: address.to_string(),
        }
    }

    #[must_use]
    pub fn email(address: &str) -> Self {
        Self::SendEmail {
            address: address.to_string(),
        }
    }

    #[must_use]
    pub fn map(query: &str) -> Self {
        Self::ViewMap {
            query: query.to_string(),
        }
    }

    #[must_use]
    pub fn chat(handle: &str, mode: ChatMode) -> Self {
        Self::Chat {
            handle: handle.to_string(),
            mode,
        }
    }

    #[must_use]
    pub fn instant_message(host: &str, handle: &str) -> Self {
        Self::InstantMessage {
            host: host.to_lowercase(),
            handle: handle.to_string(),
        }
    }

    #[must_use]
    pub fn search_contacts(query: &str) -> Self {
        Self::SearchContacts {
            query: query.to_string(),
            type_filter: CONTACTS_TYPE.to_string(),
        }
    }

    #[must_use]
    pub fn view_data(uri: &DataUri, mimetype: &str) -> Self {
        Self::ViewData {
            uri: uri.to_string(),
            mimetype: mimetype.to_string(),
        }
    }

    /// The fieldless kind of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Call { .. } => ActionKind::Call,
            Self::SipCall { .. } => ActionKind::SipCall,
            Self::SendSms { .. } => ActionKind::SendSms,
            Self::SendEmail { .. } => ActionKind::SendEmail,
            Self::ViewMap { .. } => ActionKind::ViewMap,
            Self::Chat { .. } => ActionKind::Chat,
            Self::InstantMessage { .. } => ActionKind::InstantMessage,
            Self::ViewUrl { .. } => ActionKind::ViewUrl,
            Self::SearchContacts { .. } => ActionKind::SearchContacts,
            Self::ViewData { .. } => ActionKind::ViewData,
            Self::InviteContact { .. } => ActionKind::InviteContact,
        }
    }

    /// The value the action operates on: a number, address, handle, URL or query.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Call { number } | Self::SendSms { number } => number,
            Self::SipCall { address } | Self::SendEmail { address } => address,
            Self::ViewMap { query } | Self::SearchContacts { query, .. } => query,
            Self::Chat { handle, .. } | Self::InstantMessage { handle, .. } => handle,
            Self::ViewUrl { url } => url,
            Self::ViewData { uri, .. } => uri,
            Self::InviteContact { lookup_uri, .. } => lookup_uri,
        }
    }

    /// Conventional URI for the action.
    #[must_use]
    pub fn uri(&self) -> String {
        match self {
            Self::Call { number } => format!("tel:{number}"),
            Self::SipCall { address } => format!("sip:{address}"),
            Self::SendSms { number } => format!("smsto:{number}"),
            Self::SendEmail { address } => format!("mailto:{address}"),
            Self::ViewMap { query } => format!("geo:0,0?q={}", encode(query)),
            Self::Chat { handle, mode } => match mode {
                ChatMode::Text => format!("xmpp:{handle}?message"),
                ChatMode::Voice | ChatMode::Video => format!("xmpp:{handle}?call"),
            },
            Self::InstantMessage { host, handle } => format!("imto://{host}/{}", encode(handle)),
            Self::ViewUrl { url } => url.clone(),
            Self::SearchContacts { query, .. } => format!("search:?q={}", encode(query)),
            Self::ViewData { uri, .. } | Self::InviteContact { lookup_uri: uri, .. } => {
                uri.clone()
            }
        }
    }

    /// True if both actions would do the same thing.
    ///
    /// Calls and messages reach the same line when their numbers match
    /// loosely, so a country code prefix does not make them differ.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Call { number: a }, Self::Call { number: b })
            | (Self::SendSms { number: a }, Self::SendSms { number: b }) => numbers_match(a, b),
            _ => self == other,
        }
    }
}

/// Equivalence over optional actions: both absent, or both present and equivalent.
#[must_use]
pub fn actions_equivalent(a: Option<&Action>, b: Option<&Action>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.is_equivalent(b),
        _ => false,
    }
}

fn encode(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}
