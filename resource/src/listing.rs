use serde::{Deserialize, Serialize};

use crate::named::NamedResource;
use crate::parse_json;

/// Paged `/pokemon?limit=N&offset=M` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResource {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Parse a `/pokemon` listing response body
pub fn parse_pokemon_list(body: &str) -> anyhow::Result<PokemonListResource> {
    parse_json(body)
}
