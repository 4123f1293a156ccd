//! Capacity-bounded rosters of distinct creatures

use pokedex_core::{
    Attribution, Coverage, Creature, RelationTable, SharedWeakness, team_offensive_coverage_with,
    team_shared_weaknesses,
};

use crate::RosterError;

pub const TEAM_CAPACITY: usize = 6;
pub const COMPARE_CAPACITY: usize = 2;

/// Ordered creatures, at most `CAP` of them, unique by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster<const CAP: usize> {
    members: Vec<Creature>,
}

/// The player's team
pub type Team = Roster<TEAM_CAPACITY>;

/// Creatures picked for side-by-side comparison
pub type CompareSelection = Roster<COMPARE_CAPACITY>;

impl<const CAP: usize> Roster<CAP> {
    pub fn new() -> Self {
        Self {
            members: Vec::with_capacity(CAP),
        }
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Append a creature
    ///
    /// Rejected if the roster is full or already holds the same id; the
    /// roster is left unchanged on rejection.
    pub fn add(&mut self, creature: Creature) -> Result<(), RosterError> {
        if self.contains(creature.id()) {
            tracing::debug!(id = creature.id(), name = creature.name(), "duplicate roster entry rejected");
            return Err(RosterError::Duplicate(creature.id()));
        }
        if self.is_full() {
            tracing::debug!(id = creature.id(), capacity = CAP, "roster full, entry rejected");
            return Err(RosterError::Full { capacity: CAP });
        }

        self.members.push(creature);
        Ok(())
    }

    /// Remove a creature by id, returning it if it was present
    pub fn remove(&mut self, id: u32) -> Option<Creature> {
        let idx = self.members.iter().position(|c| c.id() == id)?;
        Some(self.members.remove(idx))
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.members.iter().any(|c| c.id() == id)
    }

    pub fn get(&self, id: u32) -> Option<&Creature> {
        self.members.iter().find(|c| c.id() == id)
    }

    pub fn members(&self) -> &[Creature] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= CAP
    }

    /// Free slots left
    pub fn remaining_slots(&self) -> usize {
        CAP - self.members.len()
    }
}

impl Team {
    /// Super-effective coverage of this team, first member credited per type
    pub fn offensive_coverage(&self, relations: &RelationTable) -> Vec<Coverage> {
        self.offensive_coverage_with(relations, Attribution::FirstMember)
    }

    pub fn offensive_coverage_with(
        &self,
        relations: &RelationTable,
        attribution: Attribution,
    ) -> Vec<Coverage> {
        team_offensive_coverage_with(&self.members, relations, attribution)
    }

    /// Attacking types several members are weak to, most shared first
    pub fn shared_weaknesses(&self, relations: &RelationTable) -> Vec<SharedWeakness> {
        team_shared_weaknesses(&self.members, relations)
    }
}

impl<'a, const CAP: usize> IntoIterator for &'a Roster<CAP> {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use pokedex_core::ElementalType;
    use pretty_assertions::assert_eq;

    use super::*;

    fn creature(id: u32) -> Creature {
        Creature::new(id, format!("mon-{id}"), vec![ElementalType::Normal]).unwrap()
    }

    fn full_team() -> Team {
        let mut team = Team::new();
        for id in 1..=6 {
            team.add(creature(id)).unwrap();
        }
        team
    }

    #[test]
    fn test_new_roster() {
        let team = Team::new();
        assert!(team.is_empty());
        assert_eq!(team.capacity(), 6);
        assert_eq!(team.remaining_slots(), 6);
        assert_eq!(CompareSelection::new().capacity(), 2);
    }

    #[test]
    fn test_seventh_member_rejected() {
        let mut team = full_team();
        assert!(team.is_full());

        assert_eq!(team.add(creature(7)), Err(RosterError::Full { capacity: 6 }));
        assert_eq!(team.len(), 6);
        assert!(!team.contains(7));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut team = Team::new();
        team.add(creature(25)).unwrap();

        assert_eq!(team.add(creature(25)), Err(RosterError::Duplicate(25)));
        assert_eq!(team.len(), 1);
    }

    #[test]
    fn test_duplicate_in_full_roster_reports_duplicate() {
        let mut team = full_team();
        assert_eq!(team.add(creature(3)), Err(RosterError::Duplicate(3)));
    }

    #[test]
    fn test_remove() {
        let mut team = full_team();

        let removed = team.remove(3).unwrap();
        assert_eq!(removed.id(), 3);
        assert_eq!(team.remove(3), None);

        let ids: Vec<_> = team.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6]);
        assert_eq!(team.remaining_slots(), 1);
        assert!(team.add(creature(7)).is_ok());
    }

    #[test]
    fn test_compare_selection_capacity() {
        let mut compare = CompareSelection::new();
        compare.add(creature(1)).unwrap();
        compare.add(creature(2)).unwrap();

        assert_eq!(compare.add(creature(3)), Err(RosterError::Full { capacity: 2 }));
        assert_eq!(compare.len(), 2);

        compare.clear();
        assert!(compare.is_empty());
    }

    #[test]
    fn test_team_analysis_delegates_to_engine() {
        let mut team = Team::new();
        team.add(Creature::new(9, "blastoise", vec![ElementalType::Water]).unwrap())
            .unwrap();
        let table = RelationTable::standard();

        let shared = team.shared_weaknesses(&table);
        assert_eq!(shared.len(), 2);
        assert!(shared.iter().all(|w| w.count == 1));

        let targets: Vec<_> = team.offensive_coverage(&table).iter().map(|c| c.target).collect();
        assert_eq!(
            targets,
            vec![ElementalType::Fire, ElementalType::Ground, ElementalType::Rock]
        );
    }
}
