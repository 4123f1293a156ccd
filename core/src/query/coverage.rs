//! Team-wide offensive coverage and shared weaknesses

use crate::types::{Creature, ElementalType, RelationTable};

use super::matchup::defensive_profile_partial;

/// How covering creatures are credited for a super-effective target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Attribution {
    /// Credit only the first team member (in team order) carrying the source type
    #[default]
    FirstMember,
    /// Credit every team member carrying the source type
    AllMembers,
}

/// Team members able to hit one target type super-effectively
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coverage {
    pub target: ElementalType,
    /// Distinct creature names, in the order they were first credited
    pub covered_by: Vec<String>,
}

/// Number of team members weak to one attacking type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedWeakness {
    pub attacker: ElementalType,
    pub count: usize,
}

/// Offensive coverage of a team, crediting the first member per source type
///
/// See [`team_offensive_coverage_with`].
pub fn team_offensive_coverage(team: &[Creature], relations: &RelationTable) -> Vec<Coverage> {
    team_offensive_coverage_with(team, relations, Attribution::FirstMember)
}

/// Which target types the team's own types hit for double damage
///
/// Source types are visited in order of first appearance (team order, then
/// slot order) and targets in relation order; entries appear in the order
/// their target was first covered. Source types with no relation data are
/// skipped, and targets nobody covers are omitted.
pub fn team_offensive_coverage_with(
    team: &[Creature],
    relations: &RelationTable,
    attribution: Attribution,
) -> Vec<Coverage> {
    let mut coverage: Vec<Coverage> = Vec::new();

    for source in distinct_types(team) {
        let Some(relation) = relations.get(source) else {
            tracing::debug!(ty = %source, "no damage relations for team type, skipping coverage");
            continue;
        };

        let mut carriers = team.iter().filter(|c| c.has_type(source));
        let credited: Vec<&str> = match attribution {
            Attribution::FirstMember => carriers.next().map(Creature::name).into_iter().collect(),
            Attribution::AllMembers => carriers.map(Creature::name).collect(),
        };

        for target in &relation.double_damage_to {
            let idx = match coverage.iter().position(|c| c.target == *target) {
                Some(idx) => idx,
                None => {
                    coverage.push(Coverage {
                        target: *target,
                        covered_by: Vec::new(),
                    });
                    coverage.len() - 1
                }
            };

            let names = &mut coverage[idx].covered_by;
            for name in &credited {
                if !names.iter().any(|n| n == name) {
                    names.push((*name).to_string());
                }
            }
        }
    }

    coverage.retain(|c| !c.covered_by.is_empty());
    coverage
}

/// Attacking types the team is weak to, most shared first
///
/// Each distinct creature (by id) counts at most once per attacking type.
/// Profiles use whichever of a creature's types have relation data, so a
/// partial table under-reports instead of failing. Equal counts keep the
/// order in which the type was first reported: earlier team members first,
/// and catalog order within one member.
pub fn team_shared_weaknesses(team: &[Creature], relations: &RelationTable) -> Vec<SharedWeakness> {
    let mut seen_ids: Vec<u32> = Vec::with_capacity(team.len());
    let mut shared: Vec<SharedWeakness> = Vec::new();

    for creature in team {
        if seen_ids.contains(&creature.id()) {
            continue;
        }
        seen_ids.push(creature.id());

        let profile = defensive_profile_partial(creature.types(), relations);
        for attacker in profile.weaknesses {
            match shared.iter_mut().find(|w| w.attacker == attacker) {
                Some(entry) => entry.count += 1,
                None => shared.push(SharedWeakness { attacker, count: 1 }),
            }
        }
    }

    // sort_by is stable, so ties keep first-reported order
    shared.sort_by(|a, b| b.count.cmp(&a.count));
    shared
}

fn distinct_types(team: &[Creature]) -> Vec<ElementalType> {
    let mut types: Vec<ElementalType> = Vec::new();
    for ty in team.iter().flat_map(|c| c.types()) {
        if !types.contains(ty) {
            types.push(*ty);
        }
    }
    types
}
