//! This module contains the problem and solution models: a graph with pheromone trails,
//! tours over it and the parameters which drive a colony run.

mod graph;
pub use self::graph::*;

mod parameters;
pub use self::parameters::*;

mod solution;
pub use self::solution::*;
