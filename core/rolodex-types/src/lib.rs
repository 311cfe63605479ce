//! Core type definitions for Rolodex.
//!
//! This crate defines the fundamental types shared by the snapshot model and
//! the detail pipeline:
//! - Row, raw contact and group identifiers
//! - The [`Category`] tag derived from a data row's mimetype
//!
//! Account-specific metadata (labels, icons, type lists) belongs to
//! `rolodex-model`, not here.

mod category;
mod ids;

pub use category::{Category, mimetype};
pub use ids::{DataId, GroupId, RawContactId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("empty mimetype")]
    EmptyMimetype,
}
