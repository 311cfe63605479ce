use serde::Deserialize;

use crate::{AccountType, AccountTypeKey, AccountTypeResolver, ModelError, ModelResult};

/// In-memory [`AccountTypeResolver`] backed by a list of account types.
#[derive(Debug, Clone)]
pub struct AccountTypeRegistry {
    account_types: Vec<AccountType>,
    fallback: AccountType,
}

#[derive(Deserialize)]
struct RegistryFile {
    #[serde(default)]
    account_types: Vec<AccountType>,
}

impl AccountTypeRegistry {
    /// A registry holding only the built-in fallback account type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            account_types: Vec::new(),
            fallback: crate::fallback_account_type(),
        }
    }

    /// Loads account types from `{"account_types": [...]}` JSON on top of the
    /// built-in fallback.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for account_type in file.account_types {
            registry.register(account_type)?;
        }
        Ok(registry)
    }

    /// Adds an account type. Keys must be unique and every kind needs a mimetype.
    pub fn register(&mut self, account_type: AccountType) -> ModelResult<()> {
        if self.account_types.iter().any(|t| t.key == account_type.key) {
            return Err(ModelError::DuplicateAccountType(account_type.key.to_string()));
        }
        if account_type.kinds.iter().any(|k| k.mimetype.trim().is_empty()) {
            return Err(ModelError::MissingMimetype {
                account: account_type.key.to_string(),
            });
        }
        self.account_types.push(account_type);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_account_type(mut self, account_type: AccountType) -> ModelResult<Self> {
        self.register(account_type)?;
        Ok(self)
    }

    /// Registered account types in registration order.
    pub fn account_types(&self) -> &[AccountType] {
        &self.account_types
    }
}

impl Default for AccountTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountTypeResolver for AccountTypeRegistry {
    fn account_type(&self, key: &AccountTypeKey) -> Option<&AccountType> {
        self.account_types.iter().find(|t| &t.key == key)
    }

    fn fallback(&self) -> &AccountType {
        &self.fallback
    }
}
