//! Contains genetic operators: random creation, selection, crossover, mutation and fitness
//! standardization.

#[cfg(test)]
#[path = "../tests/unit/operators_test.rs"]
mod operators_test;

use crate::config::GeneticConfig;
use crate::genome::Gene;
use crate::individual::Individual;
use aco_core::utils::{Float, Random, compare_floats, cumulative_distribution, roulette_wheel};

/// Probability of a mutation which picks a completely new gene value instead of a local shift.
const FULL_RANDOM_MUTATION: Float = 0.2;
/// A share of the range ceiling used as max local mutation shift.
const LOCAL_MUTATION_SHARE: Float = 0.15;
/// Max attempts to draw a local shift which stays in range.
const MAX_SHIFT_ATTEMPTS: usize = 100;
/// Max attempts to draw a second parent distinct from the first one.
const MAX_PARENT_ATTEMPTS: usize = 100;

/// Creates a not evaluated individual with every gene drawn uniformly from its range.
pub(crate) fn create_random_individual(config: &GeneticConfig, random: &dyn Random) -> Individual {
    let mut genome = config.base.clone();

    Gene::ALL.iter().for_each(|&gene| {
        gene.set(&mut genome, gene.random_value(config.ranges.get(gene), random));
    });

    Individual::new(genome)
}

/// Checks whether a candidate repeats any known individual: all genes are equal or, in strict
/// mode, all but one.
pub(crate) fn is_duplicate<'a, I>(candidate: &Individual, known: I, strict: bool) -> bool
where
    I: IntoIterator<Item = &'a Individual>,
{
    let threshold = if strict { Gene::ALL.len() - 1 } else { Gene::ALL.len() };

    known.into_iter().any(|other| candidate.same_genes(other) >= threshold)
}

/// Selects two distinct parent indices using cumulative probabilities.
pub(crate) fn select_parents(probabilities: &[Float], random: &dyn Random) -> (usize, usize) {
    assert!(probabilities.len() > 1, "at least two individuals are required to select parents");

    let first = roulette_wheel(probabilities, random);
    let second = (0..MAX_PARENT_ATTEMPTS)
        .map(|_| roulette_wheel(probabilities, random))
        .find(|&idx| idx != first)
        .unwrap_or_else(|| {
            let other = random.uniform_int(0, probabilities.len() as i32 - 2) as usize;
            if other >= first { other + 1 } else { other }
        });

    (first, second)
}

/// Creates a child from the stronger parent's genome, every gene is replaced with the weaker
/// parent's value with probability `min(crossover_rate, weaker / stronger)` of standardized fitness.
pub(crate) fn crossover(
    parent_a: &Individual,
    parent_b: &Individual,
    crossover_rate: Float,
    random: &dyn Random,
) -> Individual {
    let (stronger, weaker) =
        if parent_a.std_fitness > parent_b.std_fitness { (parent_a, parent_b) } else { (parent_b, parent_a) };

    let quality_ratio = if stronger.std_fitness > 0. { weaker.std_fitness / stronger.std_fitness } else { 1. };
    let rate = crossover_rate.min(quality_ratio);

    let mut genome = stronger.genome.clone();
    Gene::ALL.iter().for_each(|&gene| {
        if random.uniform_real(0., 1.) < rate {
            gene.set(&mut genome, gene.get(&weaker.genome));
        }
    });

    Individual::new(genome)
}

/// Mutates one randomly chosen gene with mutation rate probability or unconditionally if forced.
pub(crate) fn mutate(individual: &Individual, config: &GeneticConfig, force: bool, random: &dyn Random) -> Individual {
    if !force && !random.is_hit(config.mutation_rate) {
        return individual.clone();
    }

    let gene = Gene::ALL[random.uniform_int(0, Gene::ALL.len() as i32 - 1) as usize];
    let range = config.ranges.get(gene);

    let value = if random.uniform_real(0., 1.) < FULL_RANDOM_MUTATION {
        gene.random_value(range, random)
    } else {
        let current = gene.get(&individual.genome);

        (0..MAX_SHIFT_ATTEMPTS)
            .map(|_| gene.round(current + gene.random_delta(range, LOCAL_MUTATION_SHARE, random)))
            .find(|&value| range.contains(value))
            .unwrap_or_else(|| current.max(range.min).min(range.max))
    };

    let mut genome = individual.genome.clone();
    gene.set(&mut genome, value);

    Individual::new(genome)
}

/// Assigns standardized fitness `(scale / fitness)^2`: individuals without any tour get zero.
pub(crate) fn standardize_fitness(population: &mut [Individual], fitness_scale: Float) {
    population.iter_mut().for_each(|individual| {
        let std_fitness = (fitness_scale / individual.fitness).powi(2);
        individual.std_fitness = if std_fitness.is_nan() { 0. } else { std_fitness };
    });
}

/// Sorts population from the fittest, keeping the order of equally fit individuals.
pub(crate) fn sort_by_fitness(population: &mut [Individual]) {
    population.sort_by(|a, b| compare_floats(b.std_fitness, a.std_fitness));
}

/// Assigns cumulative selection probabilities in population order, the last one is exactly one.
pub(crate) fn assign_probabilities(population: &mut [Individual]) {
    let weights = population.iter().map(|individual| individual.std_fitness).collect::<Vec<_>>();

    cumulative_distribution(&weights)
        .into_iter()
        .zip(population.iter_mut())
        .for_each(|(probability, individual)| individual.probability = probability);
}
