#[cfg(test)]
#[path = "../../tests/unit/colony/standard_test.rs"]
mod standard_test;

use super::*;

/// A standard ant colony: trails start at `gamma`, every ant credits links it walked in the
/// walked direction and all trails evaporate without a floor.
pub struct StandardColony {
    state: ColonyState,
}

impl StandardColony {
    /// Creates a new instance of `StandardColony` which owns a trail copy of the given graph.
    pub fn new(parameters: AcoParameters, graph: &Graph, environment: Arc<Environment>) -> Self {
        Self { state: ColonyState::new(parameters, graph, environment) }
    }
}

impl ColonyOptimizer for StandardColony {
    fn state(&self) -> &ColonyState {
        &self.state
    }

    fn initialize(&mut self) {
        let gamma = self.state.parameters().gamma;
        self.state.reset(gamma);
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

        tours.iter().for_each(|tour| self.state.deposit(tour.nodes.as_slice(), tour.score, false));
        self.state.evaporate();

        self.state.update_best(tours);
        self.state.update_most_marked();

        self.state.finish_iteration();
    }
}
