//! Merging of equivalent entries.

use rolodex_types::Category;

use crate::phone::numbers_match;
use crate::precedence::{presence_precedence, type_precedence};
use crate::{DetailEntry, actions_equivalent};

/// Items that can be merged with an equivalent item of the same type.
pub trait Collapsible {
    /// True if `other` is the same fact as `self` and may be merged into it.
    fn should_collapse_with(&self, other: &Self) -> bool;

    /// Merges `other` into `self`.
    ///
    /// # Panics
    ///
    /// Implementations panic when `other` is not collapsible with `self`;
    /// callers check [`should_collapse_with`](Self::should_collapse_with) first.
    fn collapse_with(&mut self, other: Self);
}

/// Merges equivalent items in one left-to-right pass.
///
/// Each item is merged into the earliest surviving item it matches. The
/// relation is not closed transitively: with A~B, B~C and A!~C, C stays
/// separate when B was already merged into A. Survivors keep their order.
pub fn collapse_list<T: Collapsible>(items: Vec<T>) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    for i in 0..slots.len() {
        let Some(mut head) = slots[i].take() else {
            continue;
        };
        for slot in slots.iter_mut().skip(i + 1) {
            if slot.as_ref().is_some_and(|item| head.should_collapse_with(item)) {
                if let Some(item) = slot.take() {
                    head.collapse_with(item);
                }
            }
        }
        slots[i] = Some(head);
    }
    slots.into_iter().flatten().collect()
}

/// Near-duplicate test over two data strings of the given categories.
///
/// Phone numbers compare loosely; everything else must match exactly.
#[must_use]
pub fn should_collapse_data(
    category_a: Option<&Category>,
    data_a: &str,
    category_b: Option<&Category>,
    data_b: &str,
) -> bool {
    match (category_a, category_b) {
        (Some(Category::Phone), Some(Category::Phone)) => numbers_match(data_a, data_b),
        _ => category_a == category_b && data_a == data_b,
    }
}

impl Collapsible for DetailEntry {
    fn should_collapse_with(&self, other: &Self) -> bool {
        should_collapse_data(self.category(), &self.data, other.category(), &other.data)
            && self.category() == other.category()
            && actions_equivalent(self.primary_action.as_ref(), other.primary_action.as_ref())
            && actions_equivalent(
                self.secondary_action.as_ref(),
                other.secondary_action.as_ref(),
            )
            && self.action_icon == other.action_icon
            && self.secondary_action_icon == other.secondary_action_icon
    }

    fn collapse_with(&mut self, other: Self) {
        assert_eq!(
            self.category(),
            other.category(),
            "cannot collapse entries of different categories"
        );
        assert!(
            self.should_collapse_with(&other),
            "collapse_with called on entries that are not equivalent"
        );

        if type_precedence(other.category(), other.type_code)
            > type_precedence(self.category(), self.type_code)
        {
            self.type_code = other.type_code;
            self.kind = other.kind.clone();
            self.type_label = other.type_label.clone();
        }

        self.max_lines = self.max_lines.max(other.max_lines);

        if presence_precedence(other.presence) > presence_precedence(self.presence) {
            self.presence = other.presence;
        }

        self.is_primary |= other.is_primary;
        self.absorb(other);
    }
}
