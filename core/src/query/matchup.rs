//! Defensive matchups for a single typing

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{DamageRelation, ElementalType, LookupError, RelationTable};

/// Weakness/resistance/immunity classification of one typing
///
/// Neutral (1x) attacking types are not reported. Sets iterate in catalog
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefensiveProfile {
    /// Attacking types dealing more than 1x
    pub weaknesses: BTreeSet<ElementalType>,
    /// Attacking types dealing between 0x and 1x
    pub resistances: BTreeSet<ElementalType>,
    /// Attacking types dealing 0x
    pub immunities: BTreeSet<ElementalType>,
}

impl DefensiveProfile {
    /// Classify a multiplier map
    pub fn from_multipliers(multipliers: &BTreeMap<ElementalType, f32>) -> Self {
        let mut profile = Self::default();
        for (&attacker, &multiplier) in multipliers {
            if multiplier == 0.0 {
                profile.immunities.insert(attacker);
            } else if multiplier > 1.0 {
                profile.weaknesses.insert(attacker);
            } else if multiplier < 1.0 {
                profile.resistances.insert(attacker);
            }
        }
        profile
    }

    pub fn is_weak_to(&self, attacker: ElementalType) -> bool {
        self.weaknesses.contains(&attacker)
    }

    pub fn resists(&self, attacker: ElementalType) -> bool {
        self.resistances.contains(&attacker)
    }

    pub fn is_immune_to(&self, attacker: ElementalType) -> bool {
        self.immunities.contains(&attacker)
    }

    /// Check if any of the attacking types is a weakness
    pub fn is_weak_to_any(&self, attackers: &[ElementalType]) -> bool {
        attackers.iter().any(|t| self.is_weak_to(*t))
    }

    /// Check if every attacking type is resisted or blocked outright
    pub fn resists_all(&self, attackers: &[ElementalType]) -> bool {
        !attackers.is_empty()
            && attackers
                .iter()
                .all(|t| self.resists(*t) || self.is_immune_to(*t))
    }

    /// True when nothing is reported at all
    pub fn is_neutral(&self) -> bool {
        self.weaknesses.is_empty() && self.resistances.is_empty() && self.immunities.is_empty()
    }
}

/// Damage multiplier per attacking type against `types`
///
/// Only attacking types mentioned by at least one relation appear in the
/// map. Zero is absorbing, so an immunity from either type wins regardless
/// of the other type's entries.
///
/// Fails with [`LookupError::MissingRelation`] naming the first type of
/// `types` that has no entry in `relations`.
pub fn defensive_multipliers(
    types: &[ElementalType],
    relations: &RelationTable,
) -> Result<BTreeMap<ElementalType, f32>, LookupError> {
    let resolved = types
        .iter()
        .map(|ty| relations.require(*ty))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(accumulate(resolved))
}

/// Weaknesses, resistances and immunities of a typing
pub fn defensive_profile(
    types: &[ElementalType],
    relations: &RelationTable,
) -> Result<DefensiveProfile, LookupError> {
    defensive_multipliers(types, relations).map(|m| DefensiveProfile::from_multipliers(&m))
}

/// Profile computed from whichever of `types` have relation data
///
/// Types without an entry contribute nothing rather than failing.
pub fn defensive_profile_partial(
    types: &[ElementalType],
    relations: &RelationTable,
) -> DefensiveProfile {
    let resolved = types.iter().filter_map(|ty| {
        let relation = relations.get(*ty);
        if relation.is_none() {
            tracing::debug!(ty = %ty, "no damage relations for type, skipping");
        }
        relation
    });

    DefensiveProfile::from_multipliers(&accumulate(resolved))
}

fn accumulate<'a>(
    relations: impl IntoIterator<Item = &'a DamageRelation>,
) -> BTreeMap<ElementalType, f32> {
    let mut multipliers = BTreeMap::new();

    for relation in relations {
        let mut scale = |attackers: &[ElementalType], factor: f32| {
            for attacker in attackers {
                *multipliers.entry(*attacker).or_insert(1.0) *= factor;
            }
        };
        scale(relation.double_damage_from.as_slice(), 2.0);
        scale(relation.half_damage_from.as_slice(), 0.5);
        scale(relation.no_damage_from.as_slice(), 0.0);
    }

    multipliers
}
