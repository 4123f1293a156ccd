//! Evolution line extraction

use pokedex_resource::{ChainLink, EvolutionChainResource};

/// One step of an evolution line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionStage {
    pub name: String,
    /// Species id parsed from the species url
    pub species_id: Option<u32>,
}

/// Linear evolution line from the root of the chain
///
/// Branching chains follow the first branch at every step.
pub fn evolution_line(chain: &EvolutionChainResource) -> Vec<EvolutionStage> {
    let mut line = Vec::new();
    let mut link: Option<&ChainLink> = Some(&chain.chain);

    while let Some(current) = link {
        line.push(EvolutionStage {
            name: current.species.name.clone(),
            species_id: current.species.id(),
        });
        link = current.evolves_to.first();
    }

    line
}
