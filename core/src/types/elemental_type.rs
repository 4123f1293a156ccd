//! The closed catalog of elemental types

/// Elemental types (the 18 used since Gen 6)
///
/// Variant order is the catalog order: it drives `Ord`, the row/column order
/// of [`TYPE_CHART`], and the order in which sets of types iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum ElementalType {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl ElementalType {
    pub const ALL: [ElementalType; 18] = [
        ElementalType::Normal,
        ElementalType::Fire,
        ElementalType::Water,
        ElementalType::Electric,
        ElementalType::Grass,
        ElementalType::Ice,
        ElementalType::Fighting,
        ElementalType::Poison,
        ElementalType::Ground,
        ElementalType::Flying,
        ElementalType::Psychic,
        ElementalType::Bug,
        ElementalType::Rock,
        ElementalType::Ghost,
        ElementalType::Dragon,
        ElementalType::Dark,
        ElementalType::Steel,
        ElementalType::Fairy,
    ];

    pub fn all() -> &'static [ElementalType] {
        &Self::ALL
    }

    /// Chart multiplier when `self` attacks a single `defender` type
    pub fn chart_effectiveness(&self, defender: ElementalType) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Look up a type by its API name (case-insensitive)
    pub fn from_api_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(ElementalType::Normal),
            "fire" => Some(ElementalType::Fire),
            "water" => Some(ElementalType::Water),
            "electric" => Some(ElementalType::Electric),
            "grass" => Some(ElementalType::Grass),
            "ice" => Some(ElementalType::Ice),
            "fighting" => Some(ElementalType::Fighting),
            "poison" => Some(ElementalType::Poison),
            "ground" => Some(ElementalType::Ground),
            "flying" => Some(ElementalType::Flying),
            "psychic" => Some(ElementalType::Psychic),
            "bug" => Some(ElementalType::Bug),
            "rock" => Some(ElementalType::Rock),
            "ghost" => Some(ElementalType::Ghost),
            "dragon" => Some(ElementalType::Dragon),
            "dark" => Some(ElementalType::Dark),
            "steel" => Some(ElementalType::Steel),
            "fairy" => Some(ElementalType::Fairy),
            _ => None,
        }
    }

    /// API name, always lowercase
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementalType::Normal => "normal",
            ElementalType::Fire => "fire",
            ElementalType::Water => "water",
            ElementalType::Electric => "electric",
            ElementalType::Grass => "grass",
            ElementalType::Ice => "ice",
            ElementalType::Fighting => "fighting",
            ElementalType::Poison => "poison",
            ElementalType::Ground => "ground",
            ElementalType::Flying => "flying",
            ElementalType::Psychic => "psychic",
            ElementalType::Bug => "bug",
            ElementalType::Rock => "rock",
            ElementalType::Ghost => "ghost",
            ElementalType::Dragon => "dragon",
            ElementalType::Dark => "dark",
            ElementalType::Steel => "steel",
            ElementalType::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for ElementalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in Gen 6+ damage chart, used to derive a complete relation table
/// when none has been fetched.
///
/// Row = attacking type, column = defending type, both in catalog order.
/// 0.0 = no effect, 0.5 = half, 1.0 = neutral, 2.0 = double.
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 18]; 18] = [
    //nor  fir  wat  ele  gra  ice  fig  poi  gro  fly  psy  bug  roc  gho  dra  dar  ste  fai
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0], // normal
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0], // fire
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0], // water
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0], // electric
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0], // grass
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0], // ice
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5], // fighting
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0], // poison
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0], // ground
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0], // flying
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0], // psychic
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5], // bug
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0], // rock
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0], // ghost
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0], // dragon
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5], // dark
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0], // steel
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0], // fairy
];
