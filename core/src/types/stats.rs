//! Base stats

/// One named base stat (conventionally 0-255)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStat {
    pub name: String,
    pub value: u16,
}

impl BaseStat {
    pub fn new(name: impl Into<String>, value: u16) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Base stats in the order the data source lists them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BaseStats(Vec<BaseStat>);

impl BaseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stat, or overwrite it in place if the name already exists
    pub fn set(&mut self, name: &str, value: u16) {
        match self.0.iter_mut().find(|s| s.name == name) {
            Some(stat) => stat.value = value,
            None => self.0.push(BaseStat::new(name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.0.iter().find(|s| s.name == name).map(|s| s.value)
    }

    /// Sum of all base stats
    pub fn total(&self) -> u32 {
        self.0.iter().map(|s| u32::from(s.value)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BaseStat> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<BaseStat> for BaseStats {
    fn from_iter<I: IntoIterator<Item = BaseStat>>(iter: I) -> Self {
        let mut stats = Self::new();
        for stat in iter {
            stats.set(&stat.name, stat.value);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu_stats() -> BaseStats {
        [
            BaseStat::new("hp", 35),
            BaseStat::new("attack", 55),
            BaseStat::new("defense", 40),
            BaseStat::new("special-attack", 50),
            BaseStat::new("special-defense", 50),
            BaseStat::new("speed", 90),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_get() {
        let stats = pikachu_stats();
        assert_eq!(stats.get("speed"), Some(90));
        assert_eq!(stats.get("luck"), None);
    }

    #[test]
    fn test_total() {
        assert_eq!(pikachu_stats().total(), 320);
        assert_eq!(BaseStats::new().total(), 0);
    }

    #[test]
    fn test_set_keeps_order() {
        let mut stats = pikachu_stats();
        stats.set("attack", 60);
        stats.set("evasion", 1);

        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["hp", "attack", "defense", "special-attack", "special-defense", "speed", "evasion"]
        );
        assert_eq!(stats.get("attack"), Some(60));
        assert_eq!(stats.len(), 7);
    }
}
