//! Specifies the mutable genes of a parameter vector together with their valid ranges.

#[cfg(test)]
#[path = "../tests/unit/genome_test.rs"]
mod genome_test;

use aco_core::models::AcoParameters;
use aco_core::utils::{Float, Random};
use serde::{Deserialize, Serialize};

/// A mutable gene of a colony parameter vector. `gamma` and `max_iterations` are not genes:
/// they stay fixed during the whole search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gene {
    /// Pheromone influence exponent.
    Alpha,
    /// Visibility influence exponent.
    Beta,
    /// Deposited pheromone amount.
    Q,
    /// Evaporation rate.
    EvaporationRate,
    /// MinMax best tour probability.
    PBest,
    /// MinMax smoothing share.
    Smoothing,
    /// Amount of ants.
    Ants,
}

impl Gene {
    /// All mutable genes in a fixed order.
    pub const ALL: [Gene; 7] =
        [Gene::Alpha, Gene::Beta, Gene::Q, Gene::EvaporationRate, Gene::PBest, Gene::Smoothing, Gene::Ants];

    /// Reads gene value from the genome.
    pub fn get(self, genome: &AcoParameters) -> Float {
        match self {
            Gene::Alpha => genome.alpha,
            Gene::Beta => genome.beta,
            Gene::Q => genome.q,
            Gene::EvaporationRate => genome.evaporation_rate,
            Gene::PBest => genome.p_best,
            Gene::Smoothing => genome.smoothing,
            Gene::Ants => genome.ants as Float,
        }
    }

    /// Writes gene value into the genome. Integer genes are rounded to the closest non negative value.
    pub fn set(self, genome: &mut AcoParameters, value: Float) {
        match self {
            Gene::Alpha => genome.alpha = value,
            Gene::Beta => genome.beta = value,
            Gene::Q => genome.q = value,
            Gene::EvaporationRate => genome.evaporation_rate = value,
            Gene::PBest => genome.p_best = value,
            Gene::Smoothing => genome.smoothing = value,
            Gene::Ants => genome.ants = value.max(0.).round() as usize,
        }
    }

    /// Returns true if gene holds an integer value.
    pub fn is_integer(self) -> bool {
        matches!(self, Gene::Ants)
    }

    /// Returns gene name as used in parameter vector serialization.
    pub fn name(self) -> &'static str {
        match self {
            Gene::Alpha => "alpha",
            Gene::Beta => "beta",
            Gene::Q => "Q",
            Gene::EvaporationRate => "evaporationRate",
            Gene::PBest => "pBest",
            Gene::Smoothing => "smoothing",
            Gene::Ants => "nbAnts",
        }
    }

    /// Returns a uniform random value in gene's range: floored for integer genes, rounded to
    /// three decimals otherwise.
    pub fn random_value(self, range: &GeneRange, random: &dyn Random) -> Float {
        self.round(random.uniform_real(range.min, range.max))
    }

    /// Returns a uniform random shift within `share` of the range ceiling in both directions.
    pub fn random_delta(self, range: &GeneRange, share: Float, random: &dyn Random) -> Float {
        let delta = (range.max * share).abs();

        self.round(random.uniform_real(-delta, delta))
    }

    /// Keeps genome values comparable: integer genes are floored, the rest has up to three decimals.
    pub fn round(self, value: Float) -> Float {
        if self.is_integer() { value.floor() } else { (value * 1000.).round() / 1000. }
    }
}

/// A closed interval of valid gene values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneRange {
    /// Min value.
    pub min: Float,
    /// Max value.
    pub max: Float,
}

impl GeneRange {
    /// Creates a new instance of `GeneRange`.
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }

    /// Checks whether value is within the range.
    pub fn contains(&self, value: Float) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Valid ranges of every mutable gene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneRanges {
    /// Alpha range.
    pub alpha: GeneRange,
    /// Beta range.
    pub beta: GeneRange,
    /// Q range.
    #[serde(rename = "Q", alias = "q")]
    pub q: GeneRange,
    /// Evaporation rate range.
    pub evaporation_rate: GeneRange,
    /// pBest range.
    pub p_best: GeneRange,
    /// Smoothing range.
    pub smoothing: GeneRange,
    /// Amount of ants range.
    #[serde(rename = "nbAnts")]
    pub ants: GeneRange,
}

impl GeneRanges {
    /// Returns range of the gene.
    pub fn get(&self, gene: Gene) -> &GeneRange {
        match gene {
            Gene::Alpha => &self.alpha,
            Gene::Beta => &self.beta,
            Gene::Q => &self.q,
            Gene::EvaporationRate => &self.evaporation_rate,
            Gene::PBest => &self.p_best,
            Gene::Smoothing => &self.smoothing,
            Gene::Ants => &self.ants,
        }
    }

    /// Returns mutable range of the gene.
    pub fn get_mut(&mut self, gene: Gene) -> &mut GeneRange {
        match gene {
            Gene::Alpha => &mut self.alpha,
            Gene::Beta => &mut self.beta,
            Gene::Q => &mut self.q,
            Gene::EvaporationRate => &mut self.evaporation_rate,
            Gene::PBest => &mut self.p_best,
            Gene::Smoothing => &mut self.smoothing,
            Gene::Ants => &mut self.ants,
        }
    }
}

impl Default for GeneRanges {
    fn default() -> Self {
        Self {
            alpha: GeneRange::new(0.5, 5.),
            beta: GeneRange::new(0.5, 5.),
            q: GeneRange::new(0.1, 10.),
            evaporation_rate: GeneRange::new(0.01, 0.5),
            p_best: GeneRange::new(0.01, 0.5),
            smoothing: GeneRange::new(0., 0.5),
            ants: GeneRange::new(5., 50.),
        }
    }
}
