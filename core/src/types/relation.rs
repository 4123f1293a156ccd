//! Damage relations and the table they are looked up in

use std::collections::HashMap;

use pokedex_resource::{NamedResource, TypeResource};
use thiserror::Error;

use super::elemental_type::{ElementalType, TYPE_CHART};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No damage relations supplied for type: {0}")]
    MissingRelation(ElementalType),

    #[error("Unknown elemental type: {0}")]
    UnknownType(String),
}

/// Directed damage facts for one defending (and, for offense, attacking) type
///
/// Entries are kept in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRelation {
    /// Attacking types that deal double damage to this type
    pub double_damage_from: Vec<ElementalType>,
    /// Attacking types that deal half damage to this type
    pub half_damage_from: Vec<ElementalType>,
    /// Attacking types that deal no damage to this type
    pub no_damage_from: Vec<ElementalType>,
    /// Defending types this type deals double damage to
    pub double_damage_to: Vec<ElementalType>,
}

impl DamageRelation {
    /// Convert an API type resource into its type and relation
    ///
    /// Fails if the resource or any referenced type is outside the catalog.
    pub fn from_resource(resource: &TypeResource) -> Result<(ElementalType, Self), LookupError> {
        let ty = parse_type_name(&resource.name)?;
        let relations = &resource.damage_relations;

        let relation = Self {
            double_damage_from: parse_type_list(&relations.double_damage_from)?,
            half_damage_from: parse_type_list(&relations.half_damage_from)?,
            no_damage_from: parse_type_list(&relations.no_damage_from)?,
            double_damage_to: parse_type_list(&relations.double_damage_to)?,
        };

        Ok((ty, relation))
    }

    /// Relation for `ty` as described by [`TYPE_CHART`]
    pub fn from_chart(ty: ElementalType) -> Self {
        let defending = ty as usize;
        let attacking_with = |multiplier: f32| -> Vec<ElementalType> {
            ElementalType::all()
                .iter()
                .copied()
                .filter(|attacker| TYPE_CHART[*attacker as usize][defending] == multiplier)
                .collect()
        };

        Self {
            double_damage_from: attacking_with(2.0),
            half_damage_from: attacking_with(0.5),
            no_damage_from: attacking_with(0.0),
            double_damage_to: ElementalType::all()
                .iter()
                .copied()
                .filter(|target| ty.chart_effectiveness(*target) == 2.0)
                .collect(),
        }
    }
}

fn parse_type_name(name: &str) -> Result<ElementalType, LookupError> {
    ElementalType::from_api_name(name).ok_or_else(|| LookupError::UnknownType(name.to_string()))
}

fn parse_type_list(list: &[NamedResource]) -> Result<Vec<ElementalType>, LookupError> {
    list.iter().map(|r| parse_type_name(&r.name)).collect()
}

/// Damage relations keyed by the type they describe
///
/// A table may be partial: callers often fill it incrementally as type
/// resources arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationTable {
    relations: HashMap<ElementalType, DamageRelation>,
}

impl RelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete table for all 18 types, derived from the built-in chart
    pub fn standard() -> Self {
        ElementalType::all()
            .iter()
            .map(|ty| (*ty, DamageRelation::from_chart(*ty)))
            .collect()
    }

    /// Build a table from fetched type resources
    pub fn from_resources<'a>(
        resources: impl IntoIterator<Item = &'a TypeResource>,
    ) -> Result<Self, LookupError> {
        let mut table = Self::new();
        for resource in resources {
            table.insert_resource(resource)?;
        }
        Ok(table)
    }

    /// Insert a relation, returning the one it replaced
    pub fn insert(&mut self, ty: ElementalType, relation: DamageRelation) -> Option<DamageRelation> {
        self.relations.insert(ty, relation)
    }

    /// Convert and insert a fetched type resource
    pub fn insert_resource(&mut self, resource: &TypeResource) -> Result<ElementalType, LookupError> {
        let (ty, relation) = DamageRelation::from_resource(resource)?;
        self.relations.insert(ty, relation);
        Ok(ty)
    }

    pub fn get(&self, ty: ElementalType) -> Option<&DamageRelation> {
        self.relations.get(&ty)
    }

    /// Like [`get`](Self::get), but a missing entry is an error
    pub fn require(&self, ty: ElementalType) -> Result<&DamageRelation, LookupError> {
        self.get(ty).ok_or(LookupError::MissingRelation(ty))
    }

    pub fn contains(&self, ty: ElementalType) -> bool {
        self.relations.contains_key(&ty)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl FromIterator<(ElementalType, DamageRelation)> for RelationTable {
    fn from_iter<I: IntoIterator<Item = (ElementalType, DamageRelation)>>(iter: I) -> Self {
        Self {
            relations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pokedex_resource::parse_type;

    use super::*;

    #[test]
    fn test_from_chart_ice() {
        let ice = DamageRelation::from_chart(ElementalType::Ice);
        assert_eq!(
            ice.double_damage_from,
            vec![
                ElementalType::Fire,
                ElementalType::Fighting,
                ElementalType::Rock,
                ElementalType::Steel,
            ]
        );
        assert_eq!(ice.half_damage_from, vec![ElementalType::Ice]);
        assert!(ice.no_damage_from.is_empty());
        assert_eq!(
            ice.double_damage_to,
            vec![
                ElementalType::Grass,
                ElementalType::Ground,
                ElementalType::Flying,
                ElementalType::Dragon,
            ]
        );
    }

    #[test]
    fn test_from_chart_ghost_immunities() {
        let ghost = DamageRelation::from_chart(ElementalType::Ghost);
        assert_eq!(
            ghost.no_damage_from,
            vec![ElementalType::Normal, ElementalType::Fighting]
        );
    }

    #[test]
    fn test_standard_table_is_complete() {
        let table = RelationTable::standard();
        assert_eq!(table.len(), 18);
        for ty in ElementalType::all() {
            assert!(table.contains(*ty));
        }
    }

    #[test]
    fn test_from_resource() {
        let body = r#"{
            "name": "ghost",
            "damage_relations": {
                "double_damage_from": [{"name": "ghost"}, {"name": "dark"}],
                "half_damage_from": [{"name": "poison"}, {"name": "bug"}],
                "no_damage_from": [{"name": "normal"}, {"name": "fighting"}],
                "double_damage_to": [{"name": "psychic"}, {"name": "ghost"}]
            }
        }"#;
        let resource = parse_type(body).unwrap();
        let (ty, relation) = DamageRelation::from_resource(&resource).unwrap();

        assert_eq!(ty, ElementalType::Ghost);
        assert_eq!(relation, DamageRelation::from_chart(ElementalType::Ghost));
    }

    #[test]
    fn test_from_resource_unknown_type() {
        let body = r#"{
            "name": "fire",
            "damage_relations": {"double_damage_from": [{"name": "shadow"}]}
        }"#;
        let resource = parse_type(body).unwrap();

        assert_eq!(
            DamageRelation::from_resource(&resource),
            Err(LookupError::UnknownType("shadow".to_string()))
        );
    }

    #[test]
    fn test_require_missing() {
        let table = RelationTable::new();
        assert!(table.is_empty());
        assert_eq!(
            table.require(ElementalType::Fire),
            Err(LookupError::MissingRelation(ElementalType::Fire))
        );
    }

    #[test]
    fn test_from_resources() {
        let fire = parse_type(r#"{"name": "fire", "damage_relations": {}}"#).unwrap();
        let water = parse_type(r#"{"name": "water", "damage_relations": {}}"#).unwrap();
        let table = RelationTable::from_resources([&fire, &water]).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(ElementalType::Water), Some(&DamageRelation::default()));
    }
}
