//! Flattening of buckets into the final list.

use rolodex_model::{AccountTypeKey, AccountTypeResolver, ContactSnapshot, IconRef, icons};
use rolodex_types::DataId;
use serde::Serialize;
use tracing::debug;

use crate::{Action, Buckets, DetailEntry, StringKey, StringResolver};

/// One item of the rendered detail list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListEntry {
    /// Placeholder for the contact header. Always first.
    Header,
    PhoneticName(DetailEntry),
    /// Section title, already upper-cased.
    KindTitle { title: String },
    NetworkTitle(NetworkTitle),
    Separator { in_sub_section: bool },
    Detail(DetailEntry),
}

impl ListEntry {
    /// Row id of a detail, `None` for every other item.
    #[must_use]
    pub fn id(&self) -> Option<DataId> {
        match self {
            Self::Detail(entry) | Self::PhoneticName(entry) => entry.id(),
            _ => None,
        }
    }

    /// Whether the item reacts to taps.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Detail(_) | Self::PhoneticName(_) => true,
            Self::NetworkTitle(title) => matches!(title.target, NetworkTarget::MoreNetworks(_)),
            Self::Header | Self::KindTitle { .. } | Self::Separator { .. } => false,
        }
    }

    #[must_use]
    pub fn as_detail(&self) -> Option<&DetailEntry> {
        match self {
            Self::Detail(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Title row of the networks section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkTitle {
    pub label: String,
    pub icon: Option<IconRef>,
    pub target: NetworkTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkTarget {
    /// Heads the entries of one third-party account type.
    Account(AccountTypeKey),
    /// Offers the account types the contact can be invited to.
    MoreNetworks(Activation),
}

/// What activating the "more networks" item offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activation {
    choices: Vec<InviteChoice>,
}

impl Activation {
    /// Invitable account types, sorted by display label.
    #[must_use]
    pub fn choices(&self) -> &[InviteChoice] {
        &self.choices
    }

    /// The invite action of the choice at `index`.
    #[must_use]
    pub fn choose(&self, index: usize) -> Option<&Action> {
        self.choices.get(index)?.action.as_ref()
    }
}

/// One account type the contact can be invited to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InviteChoice {
    pub account: AccountTypeKey,
    pub label: String,
    /// Shown instead of the label when set, with the label underneath.
    pub action_label: Option<String>,
    pub icon: Option<IconRef>,
    /// `None` when the contact has no lookup uri or the account type no
    /// invite activity.
    pub action: Option<Action>,
}

/// Builds the flat list from collapsed buckets.
pub struct ListAssembler<'a> {
    snapshot: &'a ContactSnapshot,
    resolver: &'a dyn AccountTypeResolver,
    strings: &'a dyn StringResolver,
}

impl<'a> ListAssembler<'a> {
    #[must_use]
    pub fn new(
        snapshot: &'a ContactSnapshot,
        resolver: &'a dyn AccountTypeResolver,
        strings: &'a dyn StringResolver,
    ) -> Self {
        Self {
            snapshot,
            resolver,
            strings,
        }
    }

    #[must_use]
    pub fn assemble(&self, buckets: Buckets) -> Vec<ListEntry> {
        let mut out = vec![ListEntry::Header];

        self.add_phonetic_name(&mut out);

        flatten(&mut out, buckets.phone);
        flatten(&mut out, buckets.email);
        flatten(&mut out, buckets.im);
        flatten(&mut out, buckets.nickname);
        flatten(&mut out, buckets.website);

        self.add_networks(&mut out, buckets.other);

        flatten(&mut out, buckets.sip);
        flatten(&mut out, buckets.postal);
        flatten(&mut out, buckets.event);
        flatten(&mut out, buckets.group.into_iter().collect());
        flatten(&mut out, buckets.relation);
        flatten(&mut out, buckets.note);

        out
    }

    fn add_phonetic_name(&self, out: &mut Vec<ListEntry>) {
        let Some(name) = self.snapshot.phonetic_name.as_deref().filter(|n| !n.is_empty()) else {
            return;
        };
        let title = self.strings.resolve(StringKey::PhoneticName);
        out.push(ListEntry::KindTitle {
            title: title.to_uppercase(),
        });
        out.push(ListEntry::PhoneticName(DetailEntry::plain(None, &title, name)));
    }

    fn add_networks(
        &self,
        out: &mut Vec<ListEntry>,
        other: indexmap::IndexMap<AccountTypeKey, Vec<DetailEntry>>,
    ) {
        let attribution = self
            .snapshot
            .attribution
            .as_deref()
            .filter(|a| !a.is_empty());
        let activation = self.invite_activation();
        if attribution.is_none() && other.is_empty() && activation.choices.is_empty() {
            return;
        }

        let network = self.strings.resolve(StringKey::Network);
        out.push(ListEntry::KindTitle {
            title: network.to_uppercase(),
        });

        if let Some(attribution) = attribution {
            out.push(ListEntry::Detail(DetailEntry::plain(
                None,
                &network,
                attribution,
            )));
            if !other.is_empty() {
                out.push(ListEntry::Separator {
                    in_sub_section: false,
                });
            }
        }

        for (key, entries) in other {
            out.push(ListEntry::NetworkTitle(self.account_title(key)));
            for mut entry in entries {
                out.push(ListEntry::Separator {
                    in_sub_section: true,
                });
                entry.in_sub_section = true;
                out.push(ListEntry::Detail(entry));
            }
        }

        if !activation.choices.is_empty() {
            out.push(ListEntry::NetworkTitle(NetworkTitle {
                label: self.strings.resolve(StringKey::MoreNetworks),
                icon: Some(IconRef::new(icons::ADD_NETWORK)),
                target: NetworkTarget::MoreNetworks(activation),
            }));
        }
    }

    fn account_title(&self, key: AccountTypeKey) -> NetworkTitle {
        let (label, icon) = match self.resolver.account_type(&key) {
            Some(account) => (account.display_label.clone(), account.icon.clone()),
            None => (key.to_string(), None),
        };
        NetworkTitle {
            label,
            icon,
            target: NetworkTarget::Account(key),
        }
    }

    fn invite_activation(&self) -> Activation {
        let mut seen: Vec<&AccountTypeKey> = Vec::new();
        let mut choices = Vec::new();
        for key in &self.snapshot.invitable_account_types {
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);

            let Some(account) = self.resolver.account_type(key) else {
                debug!(account = %key, "invitable account type not registered, skipped");
                continue;
            };
            let action = match (&self.snapshot.lookup_uri, &account.invite_activity) {
                (Some(lookup_uri), Some(activity)) => Some(Action::InviteContact {
                    lookup_uri: lookup_uri.clone(),
                    activity: activity.clone(),
                    package: account.res_package_name.clone(),
                }),
                _ => None,
            };
            choices.push(InviteChoice {
                account: key.clone(),
                label: account.display_label.clone(),
                action_label: account.invite_action_label.clone(),
                icon: account.icon.clone(),
                action,
            });
        }
        choices.sort_by(|a, b| a.label.cmp(&b.label));
        Activation { choices }
    }
}

/// Appends a titled run of entries with separators between them.
fn flatten(out: &mut Vec<ListEntry>, entries: Vec<DetailEntry>) {
    let Some(first) = entries.first() else {
        return;
    };
    out.push(ListEntry::KindTitle {
        title: first.kind.to_uppercase(),
    });
    for (i, entry) in entries.into_iter().enumerate() {
        if i != 0 {
            out.push(ListEntry::Separator {
                in_sub_section: false,
            });
        }
        out.push(ListEntry::Detail(entry));
    }
}
