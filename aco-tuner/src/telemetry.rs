//! A module which provides simple logging of the genetic search progress.

#[cfg(test)]
#[path = "../tests/unit/telemetry_test.rs"]
mod telemetry_test;

use crate::individual::Individual;
use aco_core::utils::{InfoLogger, Timer};

/// Amount of the fittest individuals shown when population is logged.
const POPULATION_HEAD: usize = 4;
/// Amount of the weakest individuals shown when population is logged.
const POPULATION_TAIL: usize = 3;

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often population is logged.
        log_population: usize,
    },
}

/// Reports search progress according to telemetry mode.
pub(crate) struct Telemetry {
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { time: Timer::start(), mode }
    }

    /// Reports initial population creation.
    pub fn on_initial(&self, population: &[Individual], item_time: Timer) {
        self.log(
            format!(
                "[{}s] created initial population of {} individuals in {}ms",
                self.time.elapsed_secs(),
                population.len(),
                item_time.elapsed_millis()
            )
            .as_str(),
        );
    }

    /// Reports evaluated generation. Population is expected to be sorted from the fittest.
    pub fn on_generation(
        &self,
        generation: usize,
        best: Option<&Individual>,
        population: &[Individual],
        generation_time: Timer,
    ) {
        let (log_best, log_population) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, log_population, .. } => (*log_best, *log_population),
        };

        if generation % log_best.max(1) == 0 {
            self.log(
                format!(
                    "[{}s] generation {} took {}ms",
                    self.time.elapsed_secs(),
                    generation,
                    generation_time.elapsed_millis()
                )
                .as_str(),
            );

            match best {
                Some(best) => self.log(format!("\tglobal best: {}", format_individual(best)).as_str()),
                None => self.log("no progress yet"),
            }
        }

        if generation % log_population.max(1) == 0 {
            self.on_population(population);
        }
    }

    /// Reports final statistic.
    pub fn on_result(&self, generations: usize, best: Option<&Individual>) {
        if matches!(self.mode, TelemetryMode::None) {
            return;
        }

        self.log(format!("[{}s] total generations: {}", self.time.elapsed_secs(), generations).as_str());
        match best {
            Some(best) => self.log(format!("\tbest individual: {}", format_individual(best)).as_str()),
            None => self.log("no individuals evaluated"),
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        if let Some(logger) = self.logger() {
            (logger)(message)
        }
    }

    /// Returns the logger if logging is enabled.
    pub fn logger(&self) -> Option<&InfoLogger> {
        match &self.mode {
            TelemetryMode::None => None,
            TelemetryMode::OnlyLogging { logger, .. } => Some(logger),
        }
    }

    fn on_population(&self, population: &[Individual]) {
        self.log(format!("\tpopulation state (size: {}):", population.len()).as_str());

        let tail_start = population.len().saturating_sub(POPULATION_TAIL).max(POPULATION_HEAD);

        population.iter().take(POPULATION_HEAD).for_each(|individual| {
            self.log(format!("\t\t{}", format_individual(individual)).as_str());
        });

        if tail_start > POPULATION_HEAD {
            self.log("\t\t...");
        }

        population.iter().skip(tail_start).for_each(|individual| {
            self.log(format!("\t\t{}", format_individual(individual)).as_str());
        });
    }
}

fn format_individual(individual: &Individual) -> String {
    let genome = serde_json::to_string(&individual.genome).unwrap_or_else(|err| format!("<{err}>"));

    format!(
        "parameters: {genome}, path: {:.3}, time: {:.2}s, fitness: {:.3}",
        individual.fitness,
        individual.computation_time / 1000.,
        individual.std_fitness
    )
}
