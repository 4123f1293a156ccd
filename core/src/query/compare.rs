//! Side-by-side base stat comparison

use std::cmp::Ordering;

use crate::types::Creature;

/// One stat compared across two creatures
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRow {
    /// API stat name, e.g. `special-attack`
    pub stat: String,
    /// Display label, e.g. `SP. ATK`
    pub label: String,
    pub values: [Option<u16>; 2],
}

impl StatRow {
    /// Index (0 or 1) of the creature with the higher value; `None` on a tie
    /// or when either value is missing
    pub fn leader(&self) -> Option<usize> {
        match self.values {
            [Some(a), Some(b)] => match a.cmp(&b) {
                Ordering::Greater => Some(0),
                Ordering::Less => Some(1),
                Ordering::Equal => None,
            },
            _ => None,
        }
    }
}

/// Display label for an API stat name
pub fn stat_label(name: &str) -> String {
    name.replacen("special-attack", "Sp. Atk", 1)
        .replacen("special-defense", "Sp. Def", 1)
        .replacen('-', " ", 1)
        .to_uppercase()
}

/// Rows in the first creature's stat order
///
/// Stats only the second creature has are ignored; stats it lacks read as
/// `None`.
pub fn compare_stats(first: &Creature, second: &Creature) -> Vec<StatRow> {
    first
        .stats()
        .iter()
        .map(|stat| StatRow {
            stat: stat.name.clone(),
            label: stat_label(&stat.name),
            values: [Some(stat.value), second.stats().get(&stat.name)],
        })
        .collect()
}
