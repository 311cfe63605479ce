use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// Why a website row could not be turned into an address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebAddressError {
    #[error("web address is empty")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("no host in web address")]
    MissingHost,

    #[error("invalid web address: {0}")]
    Invalid(#[from] url::ParseError),
}

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "file"];

/// A parsed, normalized web address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebAddress(Url);

impl WebAddress {
    /// Parses free text as typed into a website field.
    ///
    /// Text without a scheme is read as `http`. Only `http`, `https` and
    /// `file` are accepted, and http(s) addresses need a host.
    pub fn parse(text: &str) -> Result<Self, WebAddressError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WebAddressError::Empty);
        }

        let url = match text.split_once("://") {
            Some((scheme, _)) => {
                let scheme = scheme.to_ascii_lowercase();
                if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                    return Err(WebAddressError::UnsupportedScheme(scheme));
                }
                Url::parse(text)?
            }
            None => Url::parse(&format!("http://{text}"))?,
        };

        if url.scheme() != "file" && url.host_str().is_none_or(str::is_empty) {
            return Err(WebAddressError::MissingHost);
        }
        Ok(Self(url))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl FromStr for WebAddress {
    type Err = WebAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WebAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
