use serde::{Deserialize, Serialize};

use crate::named::NamedResource;
use crate::parse_json;

/// `/pokemon/{name}` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResource {
    pub id: u32,
    pub name: String,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub species: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u16,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

impl PokemonResource {
    /// Type names in slot order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.kind.name.as_str())
    }

    /// Height in metres
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

/// Parse a `/pokemon/{name}` response body
pub fn parse_pokemon(body: &str) -> anyhow::Result<PokemonResource> {
    parse_json(body)
}
