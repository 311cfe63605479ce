//! Locale-dependent formatting and string lookup.
//!
//! Both are collaborators the host application normally supplies. The
//! defaults here produce US English output.

use chrono::{DateTime, NaiveDate};

/// Formats numbers, dates and timestamps for display.
pub trait LocaleFormatter: Send + Sync {
    /// Formats a phone number. `e164` is the pre-normalized form, when known.
    fn format_phone(&self, number: &str, e164: Option<&str>, country_iso: &str) -> String;

    /// Formats a stored event date. Text that is not a date comes back unchanged.
    fn format_date(&self, text: &str) -> String;

    /// Formats a status timestamp given in milliseconds since the Unix epoch.
    fn format_timestamp(&self, millis: i64) -> String;
}

/// Keys of the fixed strings the list needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Label of the group summary entry.
    GroupsLabel,
    /// Title above the phonetic name.
    PhoneticName,
    /// Title of the networks section.
    Network,
    /// Label of the "more networks" entry.
    MoreNetworks,
}

/// Looks up display strings.
pub trait StringResolver: Send + Sync {
    fn resolve(&self, key: StringKey) -> String;
}

/// English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrings;

impl StringResolver for DefaultStrings {
    fn resolve(&self, key: StringKey) -> String {
        match key {
            StringKey::GroupsLabel => "Groups",
            StringKey::PhoneticName => "Phonetic name",
            StringKey::Network => "Networks",
            StringKey::MoreNetworks => "More networks",
        }
        .to_string()
    }
}

/// NANP phone grouping for US/CA, English month names, UTC timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocaleFormatter;

const NANP_REGIONS: &[&str] = &["US", "CA"];
const FORMATTING_CHARS: &[char] = &[' ', '-', '(', ')', '.', '/'];

impl DefaultLocaleFormatter {
    fn group_nanp(national: &str) -> String {
        format!("{}-{}-{}", &national[..3], &national[3..6], &national[6..])
    }

    fn format_nanp(number: &str, e164: Option<&str>) -> Option<String> {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        let international = number.starts_with('+');
        match (international, digits.len()) {
            (false, 10) => Some(format!(
                "({}) {}-{}",
                &digits[..3],
                &digits[3..6],
                &digits[6..]
            )),
            (false, 11) if digits.starts_with('1') => {
                Some(format!("1 {}", Self::group_nanp(&digits[1..])))
            }
            (true, 11) if digits.starts_with('1') => {
                Some(format!("+1 {}", Self::group_nanp(&digits[1..])))
            }
            _ => e164
                .filter(|e| e.len() == 12 && e.starts_with("+1"))
                .and_then(|e| Self::format_nanp(&e[2..], None)),
        }
    }
}

impl LocaleFormatter for DefaultLocaleFormatter {
    fn format_phone(&self, number: &str, e164: Option<&str>, country_iso: &str) -> String {
        if number.contains(FORMATTING_CHARS) {
            return number.to_string();
        }
        if !NANP_REGIONS.iter().any(|r| r.eq_ignore_ascii_case(country_iso)) {
            return number.to_string();
        }
        Self::format_nanp(number, e164).unwrap_or_else(|| number.to_string())
    }

    fn format_date(&self, text: &str) -> String {
        let trimmed = text.trim();
        if let Some(month_day) = trimmed.strip_prefix("--") {
            // Year-less dates; 2000 is a leap year so Feb 29 parses.
            return NaiveDate::parse_from_str(&format!("2000-{month_day}"), "%Y-%m-%d")
                .map(|d| d.format("%B %-d").to_string())
                .unwrap_or_else(|_| text.to_string());
        }
        let date_part = trimmed.split('T').next().unwrap_or(trimmed);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y%m%d"))
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| text.to_string())
    }

    fn format_timestamp(&self, millis: i64) -> String {
        DateTime::from_timestamp_millis(millis)
            .map(|t| t.format("%b %-d, %Y %H:%M").to_string())
            .unwrap_or_default()
    }
}
