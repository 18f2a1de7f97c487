//! This crate contains an ant colony optimization (ACO) solver for the travelling salesman
//! problem: a weighted graph with per link pheromone trails, a randomized tour construction
//! and two colony variants: a standard one and a bounded MinMax one.
//!
//! The solver is driven either to completion with `optimize` or one iteration at a time with
//! `optimize_turn`, which allows an external caller to interleave rendering between iterations.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod colony;
pub mod models;
pub mod prelude;
pub mod utils;
