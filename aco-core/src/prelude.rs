//! This module reimports a common used types.

pub use crate::colony::Ant;
pub use crate::colony::ColonyOptimizer;
pub use crate::colony::MinMaxColony;
pub use crate::colony::RunPhase;
pub use crate::colony::StandardColony;

pub use crate::models::AcoParameters;
pub use crate::models::Graph;
pub use crate::models::PheromoneCoverage;
pub use crate::models::Solution;
pub use crate::models::{LinkId, NodeId};

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::History;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::Timer;
pub use crate::utils::{GenericError, GenericResult};
