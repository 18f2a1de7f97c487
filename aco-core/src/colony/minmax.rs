#[cfg(test)]
#[path = "../../tests/unit/colony/minmax_test.rs"]
mod minmax_test;

use super::*;

/// Every n-th iteration deposits the best known tour instead of the iteration best one.
const GLOBAL_BEST_DEPOSIT_PERIOD: usize = 10;

/// A MinMax ant colony: only one reference tour is credited per iteration (on both directions
/// of each edge) and trails are kept within `[tau_min, tau_max]` limits derived from the best
/// known score. Smoothing additionally pulls trails toward the upper limit.
pub struct MinMaxColony {
    state: ColonyState,
    n_root_p_best: Float,
    tau_min: Float,
    tau_max: Float,
}

impl MinMaxColony {
    /// Creates a new instance of `MinMaxColony` which owns a trail copy of the given graph.
    pub fn new(parameters: AcoParameters, graph: &Graph, environment: Arc<Environment>) -> Self {
        Self { state: ColonyState::new(parameters, graph, environment), n_root_p_best: 0., tau_min: 0., tau_max: 0. }
    }

    /// Returns current trail limits as `(tau_min, tau_max)`.
    pub fn trail_limits(&self) -> (Float, Float) {
        (self.tau_min, self.tau_max)
    }

    /// Recomputes limits from the best known score:
    /// `tau_max = 1 / (1 - rho) / best`, `tau_min = tau_max * (1 - p) / ((n / 2 - 1) * p)`
    /// where `p` is n-th root of `p_best`.
    fn update_trail_limits(&mut self) {
        let Some(best_score) = self.state.best().map(|tour| tour.score) else {
            return;
        };

        let size = self.state.problem().size() as Float;
        let evaporation_rate = self.state.parameters().evaporation_rate;

        self.tau_max = (1. / (1. - evaporation_rate)) * (1. / best_score);

        let tau_min = self.tau_max * (1. - self.n_root_p_best) / ((size / 2. - 1.) * self.n_root_p_best);
        self.tau_min = if tau_min.is_finite() { tau_min.clamp(0., self.tau_max.max(0.)) } else { self.tau_max };
    }

    /// Bootstraps trails to `tau_max` on the first iteration. Later, evaporates, smooths and
    /// clamps them into limits.
    fn update_trails(&mut self, iteration: usize) {
        let (tau_min, tau_max) = (self.tau_min, self.tau_max);
        let persistence = 1. - self.state.parameters().evaporation_rate;
        let smoothing = self.state.parameters().smoothing;

        let trails = self.state.problem_mut().trails_mut();

        if iteration == 0 {
            trails.for_each(|trail| trail.pheromone = tau_max);
        } else {
            trails.for_each(|trail| {
                let pheromone = persistence * trail.pheromone;
                let pheromone = pheromone + smoothing * (tau_max - pheromone);

                trail.pheromone = pheromone.max(tau_min).min(tau_max);
            });
        }
    }
}

impl ColonyOptimizer for MinMaxColony {
    fn state(&self) -> &ColonyState {
        &self.state
    }

    fn initialize(&mut self) {
        self.state.reset(0.);

        let size = self.state.problem().size();
        let p_best = self.state.parameters().p_best;

        self.n_root_p_best = if size > 0 { p_best.powf(1. / size as Float) } else { p_best };
        self.tau_min = 0.;
        self.tau_max = 0.;
    }

    fn optimize_turn(&mut self) {
        if self.state.phase() == RunPhase::Idle {
            self.initialize();
        }

        if self.state.phase() == RunPhase::Done {
            return;
        }

        self.state.reset_iteration_trails();

        let tours = self.state.construct_tours();
        self.state.update_best(tours);

        self.update_trail_limits();

        let iteration = self.state.current_iteration();
        let reference = if iteration % GLOBAL_BEST_DEPOSIT_PERIOD == 0 {
            self.state.best()
        } else {
            self.state.iteration_bests().last()
        }
        .map(|tour| (tour.nodes.clone(), tour.score));

        if let Some((nodes, score)) = reference {
            self.state.deposit(nodes.as_slice(), score, true);
        }

        self.update_trails(iteration);

        self.state.update_most_marked();
        self.state.finish_iteration();
    }
}
