//! Team and comparison rosters, and the storage they persist through.
//!
//! - [`Team`] holds up to six distinct creatures and is persisted through a
//!   [`KeyValueStore`] by [`TeamRepository`].
//! - [`CompareSelection`] holds up to two and lives in memory only.

mod repository;
mod roster;
mod storage;

use thiserror::Error;

pub use repository::TeamRepository;
pub use roster::{COMPARE_CAPACITY, CompareSelection, Roster, TEAM_CAPACITY, Team};
pub use storage::{KeyValueStore, MemoryStore, StorageKeys};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Roster is full ({capacity} members)")]
    Full { capacity: usize },

    #[error("Creature {0} is already in the roster")]
    Duplicate(u32),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(#[from] anyhow::Error),

    #[error("Failed to serialize stored value: {0}")]
    Serialize(#[from] serde_json::Error),
}
