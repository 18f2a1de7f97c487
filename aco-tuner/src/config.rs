//! Contains the genetic search configuration and its builder.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::genome::{Gene, GeneRange, GeneRanges};
use aco_core::models::AcoParameters;
use aco_core::utils::{Float, GenericResult};
use serde::{Deserialize, Serialize};

/// Keeps the genetic search settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneticConfig {
    /// Amount of generations, the initial one included.
    pub max_generations: usize,
    /// Amount of individuals in every generation.
    pub population_size: usize,
    /// Upper bound of per gene probability to inherit the weaker parent's value.
    pub crossover_rate: Float,
    /// Probability to mutate a child.
    pub mutation_rate: Float,
    /// Amount of the fittest individuals carried over unchanged.
    pub elite_size: usize,
    /// Amount of fresh random individuals in every generation.
    pub random_individuals: usize,
    /// If set, random individuals are rejected when they share all but one gene with a known one.
    pub strict_duplicates: bool,
    /// A scale used to standardize fitness: `(scale / fitness)^2`.
    pub fitness_scale: Float,
    /// Valid gene ranges.
    pub ranges: GeneRanges,
    /// Parameters which every genome starts from: non mutable values are taken from here.
    pub base: AcoParameters,
}

impl GeneticConfig {
    /// Returns amount of children produced by crossover and mutation in every generation.
    pub fn children_size(&self) -> usize {
        self.population_size.saturating_sub(self.elite_size + self.random_individuals)
    }

    /// Checks config consistency.
    pub fn validate(&self) -> GenericResult<()> {
        if self.max_generations == 0 {
            return Err("maxGenerations must be positive".into());
        }

        if self.population_size == 0 {
            return Err("populationSize must be positive".into());
        }

        if self.elite_size == 0 {
            return Err("eliteSize must be positive".into());
        }

        if self.elite_size + self.random_individuals > self.population_size {
            return Err(format!(
                "eliteSize ({}) and randomIndividuals ({}) exceed populationSize ({})",
                self.elite_size, self.random_individuals, self.population_size
            )
            .into());
        }

        [("crossoverRate", self.crossover_rate), ("mutationRate", self.mutation_rate)].iter().try_for_each(
            |(name, value)| {
                if (0. ..=1.).contains(value) { Ok(()) } else { Err(format!("{name} must be in [0, 1], got {value}")) }
            },
        )?;

        if !(self.fitness_scale.is_finite() && self.fitness_scale > 0.) {
            return Err(format!("fitnessScale must be positive, got {}", self.fitness_scale).into());
        }

        Gene::ALL.iter().try_for_each(|&gene| {
            let range = self.ranges.get(gene);
            if range.min.is_finite() && range.max.is_finite() && range.min <= range.max {
                Ok(())
            } else {
                Err(format!("invalid range of '{}': [{}, {}]", gene.name(), range.min, range.max))
            }
        })?;

        if self.ranges.ants.min < 1. {
            return Err(format!("range of 'nbAnts' should start from 1, got {}", self.ranges.ants.min).into());
        }

        self.base.validate()
    }
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            max_generations: 30,
            population_size: 20,
            crossover_rate: 0.5,
            mutation_rate: 0.05,
            elite_size: 1,
            random_individuals: 3,
            strict_duplicates: false,
            fitness_scale: 100_000.,
            ranges: GeneRanges::default(),
            base: AcoParameters { gamma: 0., max_iterations: 300, ..AcoParameters::default() },
        }
    }
}

/// Provides configurable way to build `GeneticConfig`.
#[derive(Default)]
pub struct GeneticConfigBuilder {
    config: GeneticConfig,
}

impl GeneticConfigBuilder {
    /// Sets amount of generations. Default is 30.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.config.max_generations = max_generations;
        self
    }

    /// Sets population size. Default is 20.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.config.population_size = population_size;
        self
    }

    /// Sets crossover rate. Default is 0.5.
    pub fn with_crossover_rate(mut self, crossover_rate: Float) -> Self {
        self.config.crossover_rate = crossover_rate;
        self
    }

    /// Sets mutation rate. Default is 0.05.
    pub fn with_mutation_rate(mut self, mutation_rate: Float) -> Self {
        self.config.mutation_rate = mutation_rate;
        self
    }

    /// Sets amount of elite individuals. Default is 1.
    pub fn with_elite_size(mut self, elite_size: usize) -> Self {
        self.config.elite_size = elite_size;
        self
    }

    /// Sets amount of random individuals per generation. Default is 3.
    pub fn with_random_individuals(mut self, random_individuals: usize) -> Self {
        self.config.random_individuals = random_individuals;
        self
    }

    /// Enables strict duplicate check for random individuals. Default is false.
    pub fn with_strict_duplicates(mut self, strict_duplicates: bool) -> Self {
        self.config.strict_duplicates = strict_duplicates;
        self
    }

    /// Sets fitness standardization scale. Default is 100000.
    pub fn with_fitness_scale(mut self, fitness_scale: Float) -> Self {
        self.config.fitness_scale = fitness_scale;
        self
    }

    /// Sets all gene ranges.
    pub fn with_ranges(mut self, ranges: GeneRanges) -> Self {
        self.config.ranges = ranges;
        self
    }

    /// Sets range of a single gene.
    pub fn with_range(mut self, gene: Gene, range: GeneRange) -> Self {
        *self.config.ranges.get_mut(gene) = range;
        self
    }

    /// Sets base colony parameters. Default has `gamma` 0 and 300 max iterations.
    pub fn with_base_parameters(mut self, base: AcoParameters) -> Self {
        self.config.base = base;
        self
    }

    /// Builds and validates the config.
    pub fn build(self) -> GenericResult<GeneticConfig> {
        self.config.validate()?;

        Ok(self.config)
    }
}
