//! Key-value storage collaborator

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{Result, anyhow};

/// String key-value store the session persists through (browser-storage shaped)
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Keys under which session data is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub team: String,
    pub accounts: String,
    pub session_user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            team: "pokemonTeam".to_string(),
            accounts: "pokeUsers".to_string(),
            session_user: "authUser".to_string(),
        }
    }
}

/// In-memory [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}
