//! Domain types for type matchups and creatures

mod creature;
mod elemental_type;
mod relation;
mod stats;

pub use creature::{Creature, CreatureError};
pub use elemental_type::{ElementalType, TYPE_CHART};
pub use relation::{DamageRelation, LookupError, RelationTable};
pub use stats::{BaseStat, BaseStats};
