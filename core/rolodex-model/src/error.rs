//! Error types for the snapshot model.

use thiserror::Error;

/// Errors raised while loading snapshots or account-type registries.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Snapshot or registry JSON is malformed.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Two account types registered under the same key.
    #[error("account type already registered: {0}")]
    DuplicateAccountType(String),

    /// A data kind without a mimetype.
    #[error("data kind for account type {account} has no mimetype")]
    MissingMimetype { account: String },
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
