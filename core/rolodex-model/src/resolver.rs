use crate::{AccountType, AccountTypeKey, DataKind};

/// Lookup seam for account-type metadata.
///
/// The pipeline never knows which account types are installed; it asks a
/// resolver. Only [`account_type`](Self::account_type) and
/// [`fallback`](Self::fallback) must be provided; the rest follow from them.
pub trait AccountTypeResolver: Send + Sync {
    /// The account type registered under `key`, if known.
    fn account_type(&self, key: &AccountTypeKey) -> Option<&AccountType>;

    /// The account type used when an account type is unknown or does not
    /// declare a kind.
    fn fallback(&self) -> &AccountType;

    /// The account type's kind for `mimetype`, falling back to the fallback
    /// account type's kind.
    fn kind_or_fallback(&self, key: &AccountTypeKey, mimetype: &str) -> Option<&DataKind> {
        self.account_type(key)
            .and_then(|t| t.kind_for(mimetype))
            .or_else(|| self.fallback().kind_for(mimetype))
    }

    /// Whether records of this account type may be edited. Unknown account
    /// types count as writable.
    fn is_writable(&self, key: &AccountTypeKey) -> bool {
        self.account_type(key).is_none_or(|t| !t.read_only)
    }
}
