//! A genetic search over colony parameters.

#[cfg(test)]
#[path = "../tests/unit/genetic_test.rs"]
mod genetic_test;

use crate::config::GeneticConfig;
use crate::individual::Individual;
use crate::operators::*;
use crate::telemetry::{Telemetry, TelemetryMode};
use aco_core::colony::{ColonyOptimizer, MinMaxColony};
use aco_core::models::Graph;
use aco_core::utils::{Environment, Float, History, Timer};
use std::sync::Arc;

/// Max attempts to replace an individual which repeats a known one.
const MAX_DUPLICATE_ATTEMPTS: usize = 1000;

/// Searches colony parameters which give the shortest tours on a given graph.
///
/// Every generation keeps the elite, adds a few fresh random individuals and fills the rest with
/// mutated children of roulette selected parents. Individuals repeating a known genome are
/// regenerated. Each new genome is evaluated with a full `MinMaxColony` run on its own copy of
/// the graph.
pub struct GeneticTuner {
    config: GeneticConfig,
    graph: Graph,
    environment: Arc<Environment>,
    telemetry: Telemetry,
    population: Vec<Individual>,
    best: Option<Individual>,
    best_individuals: History<Individual>,
    current_generation: usize,
}

impl GeneticTuner {
    /// Creates a new instance of `GeneticTuner`. The config is expected to be validated.
    pub fn new(config: GeneticConfig, graph: &Graph, mode: TelemetryMode, environment: Arc<Environment>) -> Self {
        Self {
            best_individuals: History::new(config.max_generations),
            config,
            graph: graph.clone(),
            environment,
            telemetry: Telemetry::new(mode),
            population: vec![],
            best: None,
            current_generation: 0,
        }
    }

    /// Creates an initial population of unique random individuals and resets the search progress.
    pub fn initialize(&mut self) {
        let timer = Timer::start();
        let random = self.environment.random.clone();
        self.population.clear();

        let mut population = Vec::with_capacity(self.config.population_size);
        (0..self.config.population_size).for_each(|_| {
            let individual = self.create_unique(&population, self.config.strict_duplicates, |_| {
                create_random_individual(&self.config, random.as_ref())
            });
            population.push(individual);
        });

        self.population = population;
        self.best = None;
        self.best_individuals = History::new(self.config.max_generations);
        self.current_generation = 0;

        self.telemetry.on_initial(&self.population, timer);
    }

    /// Runs all remaining generations and returns the best individual. Initializes the search
    /// if it was not initialized yet.
    pub fn optimize(&mut self) -> Option<&Individual> {
        if self.population.is_empty() {
            self.initialize();
        }

        while !self.is_done() {
            self.step();
        }

        self.telemetry.on_result(self.current_generation, self.best.as_ref());

        self.best.as_ref()
    }

    /// Runs exactly one generation: the first one evaluates the initial population, every next
    /// one breeds and evaluates a new population. Does nothing once max generations are reached.
    pub fn optimize_by_step(&mut self) -> Option<&Individual> {
        if self.population.is_empty() {
            self.initialize();
        }

        if !self.is_done() {
            self.step();
        }

        self.best.as_ref()
    }

    /// Returns amount of completed generations.
    pub fn current_generation(&self) -> usize {
        self.current_generation
    }

    /// Returns amount of generations of a full search.
    pub fn max_generations(&self) -> usize {
        self.config.max_generations
    }

    /// Returns true when max generations are reached.
    pub fn is_done(&self) -> bool {
        self.current_generation >= self.config.max_generations
    }

    /// Returns the best individual found so far.
    pub fn best_individual(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Returns the best individual known after every generation.
    pub fn best_individuals(&self) -> &History<Individual> {
        &self.best_individuals
    }

    /// Returns the current population, sorted from the fittest once evaluated.
    pub fn population(&self) -> &[Individual] {
        self.population.as_slice()
    }

    /// Returns the search config.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    fn step(&mut self) {
        let timer = Timer::start();

        if self.current_generation > 0 {
            self.population = self.create_generation();
        }

        self.evaluate();
        self.update_best();

        self.telemetry.on_generation(self.current_generation, self.best.as_ref(), &self.population, timer);
        self.current_generation += 1;
    }

    fn evaluate(&mut self) {
        let environment = Arc::new(self.environment.silent());
        let graph = &self.graph;

        self.population.iter_mut().filter(|individual| !individual.is_evaluated()).for_each(|individual| {
            let timer = Timer::start();

            let mut colony = MinMaxColony::new(individual.genome.clone(), graph, environment.clone());
            colony.initialize();
            colony.optimize();

            // a zero length tour means there is nothing to route
            individual.fitness = colony
                .state()
                .best()
                .filter(|tour| tour.score > 0.)
                .map_or(Float::INFINITY, |tour| tour.score);
            individual.computation_time = timer.elapsed_millis() as Float;
        });

        standardize_fitness(&mut self.population, self.config.fitness_scale);
        sort_by_fitness(&mut self.population);
        assign_probabilities(&mut self.population);
    }

    fn update_best(&mut self) {
        let Some(fittest) = self.population.first() else { return };

        if self.best.as_ref().is_none_or(|best| fittest.std_fitness > best.std_fitness) {
            self.best = Some(fittest.clone());
        }

        if let Some(best) = self.best.as_ref() {
            self.best_individuals.push(best.clone());
        }
    }

    fn create_generation(&self) -> Vec<Individual> {
        let random = self.environment.random.as_ref();
        let config = &self.config;
        let probabilities = self.population.iter().map(|individual| individual.probability).collect::<Vec<_>>();

        let mut offspring = Vec::with_capacity(config.population_size);
        offspring.extend(self.population.iter().take(config.elite_size).cloned());

        (0..config.random_individuals).for_each(|_| {
            let individual =
                self.create_unique(&offspring, config.strict_duplicates, |_| create_random_individual(config, random));
            offspring.push(individual);
        });

        while offspring.len() < config.population_size {
            let (parent_a, parent_b) = select_parents(&probabilities, random);
            let child = self.create_child((&self.population[parent_a], &self.population[parent_b]), &offspring);

            offspring.push(child);
        }

        offspring
    }

    /// Breeds a child of the parents. A child repeating a known genome is bred again from the
    /// same parents, with a forced mutation.
    fn create_child(&self, parents: (&Individual, &Individual), offspring: &[Individual]) -> Individual {
        let random = self.environment.random.as_ref();
        let config = &self.config;

        self.create_unique(offspring, false, |attempt| {
            let child = crossover(parents.0, parents.1, config.crossover_rate, random);
            mutate(&child, config, attempt > 0, random)
        })
    }

    /// Creates individuals until one does not repeat the current population or the offspring.
    /// The creator receives the attempt number, starting from zero.
    fn create_unique<F>(&self, offspring: &[Individual], strict: bool, mut create: F) -> Individual
    where
        F: FnMut(usize) -> Individual,
    {
        let mut candidate = create(0);

        for attempt in 1..=MAX_DUPLICATE_ATTEMPTS {
            if !self.is_known(&candidate, offspring, strict) {
                return candidate;
            }
            candidate = create(attempt);
        }

        self.on_duplicate_limit(&candidate);

        candidate
    }

    fn is_known(&self, candidate: &Individual, offspring: &[Individual], strict: bool) -> bool {
        is_duplicate(candidate, self.population.iter().chain(offspring.iter()), strict)
    }

    fn on_duplicate_limit(&self, candidate: &Individual) {
        (self.environment.logger)(
            format!(
                "cannot create a unique individual after {MAX_DUPLICATE_ATTEMPTS} attempts, keeping a duplicate: {:?}",
                candidate.genome
            )
            .as_str(),
        );
    }
}
