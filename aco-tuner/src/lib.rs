//! This crate contains a genetic algorithm which searches ant colony optimization parameters.
//!
//! Every individual's genome is a parameter vector, and its fitness is the best tour length found
//! by a full MinMax colony run with these parameters, so a smaller fitness is better. The search
//! uses fitness proportionate selection, biased crossover, range bounded mutation, elitism and
//! duplicate suppression.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod config;
pub mod genetic;
pub mod genome;
pub mod individual;
pub mod telemetry;

mod operators;

pub use self::config::{GeneticConfig, GeneticConfigBuilder};
pub use self::genetic::GeneticTuner;
pub use self::genome::{Gene, GeneRange, GeneRanges};
pub use self::individual::Individual;
pub use self::telemetry::TelemetryMode;
