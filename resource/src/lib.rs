//! Resource models for the PokeAPI REST endpoints.
//!
//! These types mirror the JSON documents served by `/pokemon`, `/type`,
//! `/pokemon-species` and `/evolution-chain`, keeping only the fields the
//! rest of the workspace reads. Fetching is left to the caller; this crate
//! only turns response bodies into typed values.

use thiserror::Error;

mod evolution;
mod listing;
mod named;
mod pokemon;
mod species;
mod type_resource;

pub use evolution::{ChainLink, EvolutionChainResource, parse_evolution_chain};
pub use listing::{PokemonListResource, parse_pokemon_list};
pub use named::NamedResource;
pub use pokemon::{AbilitySlot, PokemonResource, StatEntry, TypeSlot, parse_pokemon};
pub use species::{EvolutionChainRef, FlavorTextEntry, SpeciesResource, parse_species};
pub use type_resource::{DamageRelationsResource, TypeResource, parse_type};

/// Base URL of the public data API
pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty resource body")]
    EmptyBody,
}

/// Deserialize a resource body, mapping serde failures onto [`ParseError`]
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> anyhow::Result<T> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody.into());
    }

    serde_json::from_str(body).map_err(|e| {
        if e.is_data() {
            ParseError::MissingField(e.to_string()).into()
        } else {
            ParseError::InvalidFormat(e.to_string()).into()
        }
    })
}
