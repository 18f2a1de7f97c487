use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an instance of `Environment` which shares the random source, but does not log.
    pub fn silent(&self) -> Self {
        Self { random: self.random.clone(), logger: Arc::new(|_| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), Arc::new(|msg| println!("{msg}")))
    }
}
