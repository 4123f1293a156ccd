use serde::{Deserialize, Serialize};

use crate::named::NamedResource;
use crate::parse_json;

/// `/pokemon-species/{id}` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesResource {
    pub evolution_chain: EvolutionChainRef,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainRef {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

impl SpeciesResource {
    /// First English flavor text, with line and page breaks flattened to spaces
    pub fn english_flavor_text(&self) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.flavor_text.replace(['\n', '\u{c}'], " "))
    }
}

/// Parse a `/pokemon-species/{id}` response body
pub fn parse_species(body: &str) -> anyhow::Result<SpeciesResource> {
    parse_json(body)
}
