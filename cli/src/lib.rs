//! File loading and rendering for the `rolodex` binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rolodex_detail::{BuildOptions, DetailList, DetailPipeline};
use rolodex_model::{AccountTypeRegistry, ContactSnapshot};
use serde::Serialize;
use tracing::{debug, info};

/// Command-line settings layered over the options file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub no_calls: bool,
    pub no_sms: bool,
    pub sip: bool,
    pub country_iso: Option<String>,
}

impl Overrides {
    /// Applies the flags that were given. Unset flags leave `options` alone.
    pub fn apply(&self, options: &mut BuildOptions) {
        if self.no_calls {
            options.capabilities.can_place_calls = false;
        }
        if self.no_sms {
            options.capabilities.can_send_sms = false;
        }
        if self.sip {
            options.capabilities.can_use_sip = true;
        }
        if let Some(iso) = &self.country_iso {
            options.default_country_iso = iso.to_ascii_uppercase();
        }
    }
}

pub fn load_snapshot(path: &Path) -> Result<ContactSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot = ContactSnapshot::from_json(&json)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    debug!(raw_contacts = snapshot.raw_contacts.len(), "loaded snapshot");
    Ok(snapshot)
}

/// Loads account types from `path`, or the built-in fallback only.
pub fn load_registry(path: Option<&Path>) -> Result<AccountTypeRegistry> {
    let Some(path) = path else {
        return Ok(AccountTypeRegistry::new());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read account types {}", path.display()))?;
    let registry = AccountTypeRegistry::from_json(&json)
        .with_context(|| format!("Failed to load account types {}", path.display()))?;
    info!(count = registry.account_types().len(), "registered account types");
    Ok(registry)
}

pub fn load_options(path: Option<&Path>) -> Result<BuildOptions> {
    let Some(path) = path else {
        return Ok(BuildOptions::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse options {}", path.display()))
}

#[derive(Serialize)]
struct Rendered<'a> {
    #[serde(flatten)]
    list: &'a DetailList,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferred_phone_uri: Option<String>,
}

/// Serializes a built list, adding the preferred phone's row uri.
pub fn render(list: &DetailList, pretty: bool) -> Result<String> {
    let rendered = Rendered {
        list,
        preferred_phone_uri: list.preferred_phone.map(|uri| uri.to_string()),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&rendered)
    } else {
        serde_json::to_string(&rendered)
    };
    json.context("Failed to serialize detail list")
}

/// Loads every input and builds the list for the snapshot at `snapshot`.
pub fn run(
    snapshot: &Path,
    accounts: Option<&Path>,
    options: Option<&Path>,
    overrides: &Overrides,
) -> Result<DetailList> {
    let snapshot = load_snapshot(snapshot)?;
    let registry = load_registry(accounts)?;
    let mut options = load_options(options)?;
    overrides.apply(&mut options);
    debug!(?options, "build options");

    let list = DetailPipeline::new(&registry, options).build(Some(&snapshot));
    info!(
        entries = list.entries.len(),
        phones = list.phone_count,
        "built detail list"
    );
    Ok(list)
}
