//! Queries over already-resolved domain data
//!
//! The matchup and coverage functions form the type-effectiveness engine:
//! pure functions over caller-supplied snapshots that never fetch, cache or
//! mutate anything, so they can be called from any thread without
//! coordination. The remaining helpers back Pokedex browsing.

mod browse;
mod compare;
mod coverage;
mod evolution;
mod matchup;

pub use browse::{PageConfig, PokedexView, search_by_name};
pub use compare::{StatRow, compare_stats, stat_label};
pub use coverage::{
    Attribution, Coverage, SharedWeakness, team_offensive_coverage,
    team_offensive_coverage_with, team_shared_weaknesses,
};
pub use evolution::{EvolutionStage, evolution_line};
pub use matchup::{
    DefensiveProfile, defensive_multipliers, defensive_profile, defensive_profile_partial,
};
