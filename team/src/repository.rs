//! Team persistence

use std::sync::Arc;

use pokedex_core::Creature;

use crate::roster::Team;
use crate::storage::KeyValueStore;
use crate::StoreError;

/// Saves and restores the team as a JSON array under one key
pub struct TeamRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl TeamRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Restore the persisted team
    ///
    /// A missing entry yields an empty team. An entry that cannot be parsed
    /// is logged and also yields an empty team; members beyond capacity or
    /// with repeated ids are dropped. Only backend failures are errors.
    pub fn load(&self) -> Result<Team, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Team::new());
        };

        let members: Vec<Creature> = match serde_json::from_str(&raw) {
            Ok(members) => members,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to parse stored team, starting empty");
                return Ok(Team::new());
            }
        };

        let mut team = Team::new();
        for creature in members {
            let id = creature.id();
            if let Err(e) = team.add(creature) {
                tracing::warn!(key = %self.key, id, error = %e, "dropping stored team member");
            }
        }
        Ok(team)
    }

    pub fn save(&self, team: &Team) -> Result<(), StoreError> {
        let raw = serde_json::to_string(team.members())?;
        self.store.set(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pokedex_core::{BaseStat, ElementalType};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::MemoryStore;

    fn repository() -> (Arc<MemoryStore>, TeamRepository) {
        let store = Arc::new(MemoryStore::new());
        let repo = TeamRepository::new(store.clone(), "pokemonTeam");
        (store, repo)
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (_, repo) = repository();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let (_, repo) = repository();
        let mut team = Team::new();
        team.add(
            Creature::new(6, "charizard", vec![ElementalType::Fire, ElementalType::Flying])
                .unwrap()
                .with_stats([BaseStat::new("hp", 78)].into_iter().collect()),
        )
        .unwrap();
        team.add(Creature::new(9, "blastoise", vec![ElementalType::Water]).unwrap())
            .unwrap();

        repo.save(&team).unwrap();
        assert_eq!(repo.load().unwrap(), team);
    }

    #[test]
    fn test_stored_format() {
        let (store, repo) = repository();
        let mut team = Team::new();
        team.add(Creature::new(25, "pikachu", vec![ElementalType::Electric]).unwrap())
            .unwrap();
        repo.save(&team).unwrap();

        let raw = store.get("pokemonTeam").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["name"], "pikachu");
        assert_eq!(value[0]["types"][0], "electric");
    }

    #[test]
    fn test_load_corrupt_is_empty() {
        let (store, repo) = repository();
        store.set("pokemonTeam", "{not json").unwrap();
        assert!(repo.load().unwrap().is_empty());

        // typing with no types fails validation
        store
            .set("pokemonTeam", r#"[{"id": 1, "name": "missingno", "types": []}]"#)
            .unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_drops_duplicates_and_overflow() {
        let (store, repo) = repository();
        let entries: Vec<String> = [1, 1, 2, 3, 4, 5, 6, 7]
            .iter()
            .map(|id| format!(r#"{{"id": {id}, "name": "mon-{id}", "types": ["normal"]}}"#))
            .collect();
        store
            .set("pokemonTeam", &format!("[{}]", entries.join(",")))
            .unwrap();

        let team = repo.load().unwrap();
        let ids: Vec<_> = team.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
