//! Account registration and credential verification

use std::sync::Arc;

use pokedex_team::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::AuthError;
use crate::state::UserInfo;

/// Registers accounts and verifies credentials
pub trait AccountService: Send + Sync {
    /// Create an account; emails are unique ignoring case
    fn register(&self, name: &str, email: &str, password: &str) -> Result<UserInfo, AuthError>;

    /// Check credentials, returning the account's public profile
    fn verify(&self, email: &str, password: &str) -> Result<UserInfo, AuthError>;
}

/// Accounts kept in the session's own key-value store
///
/// Only a per-account salt and the SHA-256 digest of salt and password are
/// stored; the password itself never is.
pub struct LocalAccounts {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    name: String,
    email: String,
    salt: String,
    password_hash: String,
}

impl StoredAccount {
    fn profile(&self) -> UserInfo {
        UserInfo {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl LocalAccounts {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    fn load(&self) -> Result<Vec<StoredAccount>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(accounts) => Ok(accounts),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to parse stored accounts, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, accounts: &[StoredAccount]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(accounts)?;
        self.store.set(&self.key, &raw)?;
        Ok(())
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(())
}

impl AccountService for LocalAccounts {
    fn register(&self, name: &str, email: &str, password: &str) -> Result<UserInfo, AuthError> {
        require(name, "name")?;
        require(email, "email")?;
        require(password, "password")?;
        let email = email.trim();

        let mut accounts = self.load()?;
        if accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
            return Err(AuthError::EmailTaken);
        }

        let salt = hex::encode(rand::random::<[u8; 16]>());
        let account = StoredAccount {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: digest(&salt, password),
            salt,
        };
        let profile = account.profile();

        accounts.push(account);
        self.save(&accounts)?;
        Ok(profile)
    }

    fn verify(&self, email: &str, password: &str) -> Result<UserInfo, AuthError> {
        let email = email.trim();
        let accounts = self.load()?;
        let account = accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .ok_or(AuthError::InvalidCredentials)?;

        if digest(&account.salt, password) != account.password_hash {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(account.profile())
    }
}
