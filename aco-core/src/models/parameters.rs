#[cfg(test)]
#[path = "../../tests/unit/models/parameters_test.rs"]
mod parameters_test;

use crate::utils::{Float, GenericResult};
use serde::{Deserialize, Serialize};

/// Algorithm knobs of a single colony run.
///
/// Values are not checked by the colony itself: invalid ones silently propagate into
/// degenerate scores, use `validate` before starting a run with user provided values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcoParameters {
    /// Pheromone influence exponent.
    pub alpha: Float,
    /// Visibility (inverse weight) influence exponent.
    pub beta: Float,
    /// Constant added to every transition weight. The standard colony also starts trails at it.
    pub gamma: Float,
    /// Amount of pheromone spread over a tour, divided by tour length.
    #[serde(rename = "Q", alias = "q")]
    pub q: Float,
    /// Share of pheromone which evaporates every iteration, in [0, 1].
    pub evaporation_rate: Float,
    /// Amount of ants (tours) per iteration.
    #[serde(rename = "nbAnts")]
    pub ants: usize,
    /// Amount of iterations of a full run.
    pub max_iterations: usize,
    /// MinMax only: probability to build the best tour once trails converged.
    pub p_best: Float,
    /// MinMax only: a share of the distance to the upper trail limit added every iteration.
    pub smoothing: Float,
}

impl Default for AcoParameters {
    fn default() -> Self {
        Self {
            alpha: 0.9,
            beta: 1.2,
            gamma: 0.,
            q: 0.2,
            evaporation_rate: 0.15,
            ants: 30,
            max_iterations: 500,
            p_best: 0.05,
            smoothing: 0.,
        }
    }
}

impl AcoParameters {
    /// Checks that parameters describe a meaningful run.
    pub fn validate(&self) -> GenericResult<()> {
        let check_finite = |name: &str, value: Float| {
            if value.is_finite() { Ok(()) } else { Err(format!("{name} must be a finite number, got {value}")) }
        };
        let check_unit = |name: &str, value: Float| {
            if (0. ..=1.).contains(&value) { Ok(()) } else { Err(format!("{name} must be in [0, 1], got {value}")) }
        };

        check_finite("alpha", self.alpha)?;
        check_finite("beta", self.beta)?;
        check_finite("gamma", self.gamma)?;
        check_finite("Q", self.q)?;
        check_unit("evaporationRate", self.evaporation_rate)?;
        check_unit("pBest", self.p_best)?;
        check_unit("smoothing", self.smoothing)?;

        if self.gamma < 0. {
            return Err(format!("gamma must be non negative, got {}", self.gamma).into());
        }

        if self.q <= 0. {
            return Err(format!("Q must be positive, got {}", self.q).into());
        }

        if self.ants == 0 {
            return Err("nbAnts must be positive".into());
        }

        if self.max_iterations == 0 {
            return Err("maxIterations must be positive".into());
        }

        Ok(())
    }
}
