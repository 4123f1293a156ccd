use serde::{Deserialize, Serialize};

use crate::named::NamedResource;
use crate::parse_json;

/// `/evolution-chain/{id}` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainResource {
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Parse an `/evolution-chain/{id}` response body
pub fn parse_evolution_chain(body: &str) -> anyhow::Result<EvolutionChainResource> {
    parse_json(body)
}
