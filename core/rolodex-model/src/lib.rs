//! Contact snapshot model for Rolodex.
//!
//! Defines the immutable input consumed by the detail pipeline:
//! - [`ContactSnapshot`]: one logical contact with its raw contacts, group catalog,
//!   statuses and display metadata
//! - [`RawContact`] / [`DataRow`]: account-bound records and their typed rows
//! - [`AccountType`] / [`DataKind`]: per-account category metadata (labels,
//!   icons, type lists)
//! - [`AccountTypeResolver`]: lookup seam between the pipeline and whatever
//!   knows about installed account types
//!
//! Snapshots and registries are plain serde types so a loader can hand them
//! over as JSON.

mod account;
mod error;
mod fallback;
mod registry;
mod resolver;
mod row;
mod snapshot;

pub use account::{AccountType, AccountTypeKey, DataKind, EditType, IconRef};
pub use error::{ModelError, ModelResult};
pub use fallback::{fallback_account_type, icons, types};
pub use registry::AccountTypeRegistry;
pub use resolver::AccountTypeResolver;
pub use row::{DataRow, columns};
pub use snapshot::{
    ContactSnapshot, DataStatus, DisplayNameSource, GroupMetaData, RawContact, directory,
};
