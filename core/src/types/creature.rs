//! Creature snapshots

use pokedex_resource::PokemonResource;
use thiserror::Error;

use super::elemental_type::ElementalType;
use super::stats::{BaseStat, BaseStats};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreatureError {
    #[error("A creature must have one or two types, got {0}")]
    InvalidTypeCount(usize),

    #[error("Type listed twice in typing: {0}")]
    DuplicateType(ElementalType),

    #[error("Unknown elemental type: {0}")]
    UnknownType(String),
}

/// An immutable snapshot of one creature's identity, typing and base stats
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_impl::RawCreature"))]
pub struct Creature {
    id: u32,
    name: String,
    types: Vec<ElementalType>,
    stats: BaseStats,
}

impl Creature {
    /// Create a creature, validating that its typing has 1-2 distinct types
    pub fn new(
        id: u32,
        name: impl Into<String>,
        types: Vec<ElementalType>,
    ) -> Result<Self, CreatureError> {
        validate_typing(&types)?;
        Ok(Self {
            id,
            name: name.into(),
            types,
            stats: BaseStats::new(),
        })
    }

    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Typing in slot order
    pub fn types(&self) -> &[ElementalType] {
        &self.types
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn has_type(&self, ty: ElementalType) -> bool {
        self.types.contains(&ty)
    }
}

fn validate_typing(types: &[ElementalType]) -> Result<(), CreatureError> {
    if types.is_empty() || types.len() > 2 {
        return Err(CreatureError::InvalidTypeCount(types.len()));
    }
    if types.len() == 2 && types[0] == types[1] {
        return Err(CreatureError::DuplicateType(types[0]));
    }
    Ok(())
}

impl TryFrom<&PokemonResource> for Creature {
    type Error = CreatureError;

    fn try_from(resource: &PokemonResource) -> Result<Self, Self::Error> {
        let types = resource
            .type_names()
            .map(|name| {
                ElementalType::from_api_name(name)
                    .ok_or_else(|| CreatureError::UnknownType(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let stats = resource
            .stats
            .iter()
            .map(|entry| BaseStat::new(entry.stat.name.clone(), entry.base_stat))
            .collect();

        Ok(Self::new(resource.id, resource.name.clone(), types)?.with_stats(stats))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;

    /// Unvalidated wire shape; converted through [`Creature::new`]
    #[derive(serde::Deserialize)]
    pub(super) struct RawCreature {
        id: u32,
        name: String,
        types: Vec<ElementalType>,
        #[serde(default)]
        stats: BaseStats,
    }

    impl TryFrom<RawCreature> for Creature {
        type Error = CreatureError;

        fn try_from(raw: RawCreature) -> Result<Self, Self::Error> {
            Ok(Creature::new(raw.id, raw.name, raw.types)?.with_stats(raw.stats))
        }
    }
}

#[cfg(test)]
mod tests {
    use pokedex_resource::parse_pokemon;

    use super::*;

    #[test]
    fn test_new_single_type() {
        let pikachu = Creature::new(25, "pikachu", vec![ElementalType::Electric]).unwrap();
        assert_eq!(pikachu.id(), 25);
        assert_eq!(pikachu.name(), "pikachu");
        assert!(pikachu.has_type(ElementalType::Electric));
        assert!(!pikachu.has_type(ElementalType::Water));
        assert!(pikachu.stats().is_empty());
    }

    #[test]
    fn test_new_rejects_bad_typing() {
        assert_eq!(
            Creature::new(0, "missingno", vec![]),
            Err(CreatureError::InvalidTypeCount(0))
        );
        assert_eq!(
            Creature::new(
                0,
                "missingno",
                vec![ElementalType::Normal, ElementalType::Fire, ElementalType::Water]
            ),
            Err(CreatureError::InvalidTypeCount(3))
        );
        assert_eq!(
            Creature::new(0, "missingno", vec![ElementalType::Ice, ElementalType::Ice]),
            Err(CreatureError::DuplicateType(ElementalType::Ice))
        );
    }

    #[test]
    fn test_from_resource() {
        let body = r#"{
            "id": 6,
            "name": "charizard",
            "stats": [
                {"base_stat": 78, "stat": {"name": "hp"}},
                {"base_stat": 84, "stat": {"name": "attack"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "fire"}},
                {"slot": 2, "type": {"name": "flying"}}
            ],
            "species": {"name": "charizard", "url": ""}
        }"#;
        let resource = parse_pokemon(body).unwrap();
        let charizard = Creature::try_from(&resource).unwrap();

        assert_eq!(charizard.types(), &[ElementalType::Fire, ElementalType::Flying]);
        assert_eq!(charizard.stats().get("attack"), Some(84));
        assert_eq!(charizard.stats().total(), 162);
    }

    #[test]
    fn test_from_resource_unknown_type() {
        let body = r#"{
            "id": 1,
            "name": "oddity",
            "types": [{"slot": 1, "type": {"name": "shadow"}}],
            "species": {"name": "oddity"}
        }"#;
        let resource = parse_pokemon(body).unwrap();

        assert_eq!(
            Creature::try_from(&resource),
            Err(CreatureError::UnknownType("shadow".to_string()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_typing() {
        let json = r#"{"id": 131, "name": "lapras", "types": ["water", "ice"], "stats": [{"name": "hp", "value": 130}]}"#;
        let lapras: Creature = serde_json::from_str(json).unwrap();
        assert_eq!(lapras.types(), &[ElementalType::Water, ElementalType::Ice]);
        assert_eq!(lapras.stats().get("hp"), Some(130));

        let raw = serde_json::to_string(&lapras).unwrap();
        assert_eq!(serde_json::from_str::<Creature>(&raw).unwrap(), lapras);

        assert!(serde_json::from_str::<Creature>(r#"{"id": 0, "name": "missingno", "types": []}"#).is_err());
        assert!(
            serde_json::from_str::<Creature>(r#"{"id": 0, "name": "missingno", "types": ["ice", "ice"]}"#)
                .is_err()
        );
    }
}
