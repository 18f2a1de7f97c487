use crate::models::{Graph, NodeId};
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// A closed tour over graph nodes: it visits every node once and returns to its start.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    /// Visited nodes, the first node is repeated at the end.
    pub nodes: Vec<NodeId>,
    /// Sum of consecutive link weights.
    pub score: Float,
}

impl Tour {
    /// Creates a tour from a closed path, scoring it on the given graph.
    pub fn new(nodes: Vec<NodeId>, graph: &Graph) -> Self {
        let score = graph.path_length(nodes.as_slice());

        Self { nodes, score }
    }

    /// Converts the tour into a labeled solution.
    pub fn to_solution(&self, graph: &Graph) -> Solution {
        Solution { path: graph.labels_of(self.nodes.as_slice()), score: self.score }
    }
}

/// A tour expressed by node labels, as consumed by rendering code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Ordered node labels, the first label is repeated at the end.
    pub path: Vec<String>,
    /// Tour length.
    pub score: Float,
}

/// A pheromone level of a single directed link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PheromoneCoverage {
    /// Origin label.
    pub origin: String,
    /// Destination label.
    pub destination: String,
    /// Current pheromone level.
    pub pheromone_level: Float,
}
