//! Contact detail list pipeline.
//!
//! Turns a [`ContactSnapshot`](rolodex_model::ContactSnapshot) into the flat,
//! ordered list a detail screen renders:
//!
//! 1. [`EntryBuilder`] turns each data row into a [`DetailEntry`] and files it
//!    into a per-category bucket (or a per-account bucket for third-party rows).
//! 2. [`collapse_list`] merges equivalent entries of the phone, email, postal
//!    and IM buckets.
//! 3. [`GroupSummarizer`] folds group memberships into one entry.
//! 4. [`ListAssembler`] flattens everything into [`ListEntry`] items with
//!    titles and separators.
//!
//! [`DetailPipeline`] runs all four steps. Every call starts from fresh state;
//! nothing is cached between snapshots.

mod action;
mod assemble;
mod builder;
mod collapse;
mod entry;
mod groups;
mod locale;
mod phone;
mod pipeline;
mod precedence;
mod web;

pub use action::{Action, ActionKind, ChatMode, actions_equivalent};
pub use assemble::{Activation, InviteChoice, ListAssembler, ListEntry, NetworkTarget, NetworkTitle};
pub use builder::{Buckets, EntryBuilder, build_im_actions, im_protocol};
pub use collapse::{Collapsible, collapse_list, should_collapse_data};
pub use entry::{DataUri, DetailEntry};
pub use groups::{GroupSummarizer, default_group_id};
pub use locale::{DefaultLocaleFormatter, DefaultStrings, LocaleFormatter, StringKey, StringResolver};
pub use phone::{compare_loosely, normalize_number, numbers_match};
pub use pipeline::{BuildOptions, Capabilities, DetailList, DetailPipeline};
pub use precedence::{presence, presence_precedence, type_precedence};
pub use web::{WebAddress, WebAddressError};
