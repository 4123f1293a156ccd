//! Domain types and the type-effectiveness engine for Pokedex tooling.
//!
//! # Overview
//!
//! `pokedex-core` sits between `pokedex-resource` (API documents) and the
//! stateful layers:
//!
//! ```text
//! pokedex-resource (API documents)
//!        │
//!        ▼
//! pokedex-core (domain types + engine) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-team ─> pokedex-session
//! ```
//!
//! # Main Types
//!
//! - [`ElementalType`] - the 18 elemental types
//! - [`DamageRelation`] / [`RelationTable`] - damage facts per type, fetched or built-in
//! - [`Creature`] - id, name, 1-2 types and base stats
//! - [`DefensiveProfile`] - weaknesses, resistances and immunities of a typing
//!
//! # Example Usage
//!
//! ```
//! use pokedex_core::{defensive_profile, Creature, ElementalType, RelationTable};
//!
//! let table = RelationTable::standard();
//! let gengar = Creature::new(94, "gengar", vec![ElementalType::Ghost, ElementalType::Poison])?;
//!
//! let profile = defensive_profile(gengar.types(), &table)?;
//! assert!(profile.is_immune_to(ElementalType::Normal));
//! assert!(profile.is_weak_to(ElementalType::Psychic));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod query;
pub mod types;

pub use query::{
    Attribution, Coverage, DefensiveProfile, EvolutionStage, PageConfig, PokedexView,
    SharedWeakness, StatRow, compare_stats, defensive_multipliers, defensive_profile,
    defensive_profile_partial, evolution_line, search_by_name, stat_label,
    team_offensive_coverage, team_offensive_coverage_with, team_shared_weaknesses,
};
pub use types::{
    BaseStat, BaseStats, Creature, CreatureError, DamageRelation, ElementalType, LookupError,
    RelationTable, TYPE_CHART,
};
