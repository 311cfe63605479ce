//! Group membership summary.

use std::collections::{BTreeSet, HashMap};

use rolodex_model::GroupMetaData;
use rolodex_types::{Category, GroupId};
use tracing::{debug, warn};

use crate::DetailEntry;

/// The id of the one group flagged as default.
///
/// Returns `None` when no group, or more than one group, carries the flag.
#[must_use]
pub fn default_group_id(catalog: &[GroupMetaData]) -> Option<GroupId> {
    let mut defaults = catalog.iter().filter(|g| g.is_default);
    let first = defaults.next()?;
    if defaults.next().is_some() {
        warn!("more than one default group in catalog");
        return None;
    }
    Some(first.id)
}

/// Collects group memberships and folds them into one entry.
#[derive(Debug, Default)]
pub struct GroupSummarizer<'a> {
    catalog: HashMap<GroupId, &'a GroupMetaData>,
    titles: BTreeSet<String>,
}

impl<'a> GroupSummarizer<'a> {
    /// A summarizer resolving ids against `catalog`. With no catalog every
    /// membership is ignored.
    #[must_use]
    pub fn new(catalog: Option<&'a [GroupMetaData]>) -> Self {
        Self {
            catalog: catalog
                .unwrap_or_default()
                .iter()
                .map(|g| (g.id, g))
                .collect(),
            titles: BTreeSet::new(),
        }
    }

    /// Records membership in `group_id`.
    pub fn add(&mut self, group_id: GroupId) {
        match self.catalog.get(&group_id) {
            Some(group) if group.is_default || group.is_favorites => {}
            Some(group) => {
                self.titles.insert(group.title.clone());
            }
            None => debug!(%group_id, "membership in unknown group ignored"),
        }
    }

    /// Distinct titles collected so far, sorted.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    /// The summary entry labelled `label`, or `None` if no group qualified.
    #[must_use]
    pub fn summarize(&self, label: &str) -> Option<DetailEntry> {
        if self.titles.is_empty() {
            return None;
        }
        let joined = self.titles().collect::<Vec<_>>().join(", ");
        Some(DetailEntry::plain(
            Some(Category::GroupMembership),
            label,
            &joined,
        ))
    }
}
