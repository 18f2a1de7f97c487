#[cfg(test)]
#[path = "../../tests/unit/colony/ant_test.rs"]
mod ant_test;

use crate::models::{AcoParameters, Graph, NodeId};
use crate::utils::{Float, Random, cumulative_distribution, roulette_wheel};

/// An agent which builds one randomized tour over a graph. It keeps no state between walks.
#[derive(Clone, Debug)]
pub struct Ant {
    alpha: Float,
    beta: Float,
    gamma: Float,
}

impl Ant {
    /// Creates a new instance of `Ant`.
    pub fn new(alpha: Float, beta: Float, gamma: Float) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Creates a new instance of `Ant` using colony parameters.
    pub fn from_parameters(parameters: &AcoParameters) -> Self {
        Self::new(parameters.alpha, parameters.beta, parameters.gamma)
    }

    /// Builds a closed tour: starts from a uniformly random node, picks every next node with
    /// probability proportional to its transition weight and returns back to the start.
    /// An empty graph gives an empty path.
    pub fn random_walk(&self, graph: &Graph, random: &dyn Random) -> Vec<NodeId> {
        let size = graph.size();
        if size == 0 {
            return vec![];
        }

        let start = random.uniform_int(0, size as i32 - 1) as NodeId;

        let mut path = Vec::with_capacity(size + 1);
        let mut remaining = (0..size).filter(|&id| id != start).collect::<Vec<_>>();
        let mut current = start;

        path.push(start);

        while !remaining.is_empty() {
            let index = self.pick_next(graph, current, remaining.as_slice(), random);

            current = remaining.remove(index);
            path.push(current);
        }

        path.push(start);

        path
    }

    /// Returns an index of the next candidate.
    fn pick_next(&self, graph: &Graph, current: NodeId, candidates: &[NodeId], random: &dyn Random) -> usize {
        if candidates.len() == 1 {
            return 0;
        }

        let weights = candidates.iter().map(|&next| self.transition_weight(graph, current, next)).collect::<Vec<_>>();
        let distribution = cumulative_distribution(weights.as_slice());

        roulette_wheel(distribution.as_slice(), random)
    }

    /// Returns an unnormalized transition probability: gamma + pheromone^alpha * visibility^beta.
    fn transition_weight(&self, graph: &Graph, current: NodeId, next: NodeId) -> Float {
        let link_id = graph.expect_link_id(current, next);
        let visibility = 1. / graph.weight(link_id);

        self.gamma + graph.trail(link_id).pheromone.powf(self.alpha) * visibility.powf(self.beta)
    }
}
