use serde::{Deserialize, Serialize};

use crate::named::NamedResource;
use crate::parse_json;

/// `/type/{name}` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeResource {
    pub name: String,
    pub damage_relations: DamageRelationsResource,
}

/// Directed damage facts for one type, as served by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelationsResource {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

/// Parse a `/type/{name}` response body
pub fn parse_type(body: &str) -> anyhow::Result<TypeResource> {
    parse_json(body)
}
