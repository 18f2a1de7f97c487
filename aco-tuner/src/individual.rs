//! Specifies an individual of the genetic search.

use crate::genome::Gene;
use aco_core::models::AcoParameters;
use aco_core::utils::Float;
use serde::Serialize;

/// A candidate parameter vector together with its evaluation results.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    /// Colony parameters.
    pub genome: AcoParameters,
    /// The best tour length found with the genome, smaller is better. Zero until evaluated.
    pub fitness: Float,
    /// Standardized fitness used for selection, bigger is better.
    pub std_fitness: Float,
    /// Cumulative selection probability in population order.
    pub probability: Float,
    /// Evaluation time in milliseconds.
    pub computation_time: Float,
}

impl Individual {
    /// Creates a new not evaluated individual.
    pub fn new(genome: AcoParameters) -> Self {
        Self { genome, fitness: 0., std_fitness: 0., probability: 0., computation_time: 0. }
    }

    /// Returns true if the individual has been evaluated already.
    pub fn is_evaluated(&self) -> bool {
        self.fitness > 0.
    }

    /// Returns amount of genes which have the same value in both genomes.
    pub fn same_genes(&self, other: &Individual) -> usize {
        Gene::ALL.iter().filter(|gene| gene.get(&self.genome) == gene.get(&other.genome)).count()
    }
}
