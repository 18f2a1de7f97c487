#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::utils::{Float, GenericResult};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// An index of a node inside its graph.
pub type NodeId = usize;

/// An index of a directed link inside its graph.
pub type LinkId = usize;

/// Represents a city: a unique label and a fixed location used to derive link weights.
#[derive(Clone, Debug)]
pub struct Node {
    label: String,
    x: Float,
    y: Float,
    links: Vec<LinkId>,
}

impl Node {
    /// Returns node's label.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Returns x coordinate.
    pub fn x(&self) -> Float {
        self.x
    }

    /// Returns y coordinate.
    pub fn y(&self) -> Float {
        self.y
    }

    /// Returns outgoing links in the order they were added.
    pub fn links(&self) -> &[LinkId] {
        self.links.as_slice()
    }
}

/// A mutable pheromone state of a directed link.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trail {
    /// Current pheromone level.
    pub pheromone: Float,
    /// Pheromone deposited during the current iteration.
    pub iteration_pheromone: Float,
}

/// A read only view on a directed link: origin, destination, weight and its trail.
#[derive(Clone, Copy, Debug)]
pub struct Link<'a> {
    /// Link index.
    pub id: LinkId,
    /// Origin node.
    pub origin: &'a Node,
    /// Destination node.
    pub destination: &'a Node,
    /// Link weight (distance).
    pub weight: Float,
    /// Current pheromone level.
    pub pheromone: Float,
    /// Pheromone deposited during the current iteration.
    pub iteration_pheromone: Float,
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    origin: NodeId,
    destination: NodeId,
    weight: Float,
}

#[derive(Clone, Debug, Default)]
struct Topology {
    nodes: Vec<Node>,
    labels: FxHashMap<String, NodeId>,
    edges: Vec<Edge>,
    adjacency: FxHashMap<(NodeId, NodeId), LinkId>,
}

/// A weighted graph whose links are created in matched directed pairs with equal weight but
/// independent pheromone trails.
///
/// Nodes, locations and weights form an immutable topology which is shared between copies of
/// the graph, while trails are owned by each copy: cloning a graph gives an optimizer its own
/// pheromone state, so runs started from the same source graph never affect each other.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    topology: Arc<Topology>,
    trails: Vec<Trail>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a complete graph from labeled points, every link weight is euclidean distance
    /// between its ends.
    pub fn from_points<I, S>(points: I) -> GenericResult<Self>
    where
        I: IntoIterator<Item = (S, Float, Float)>,
        S: Into<String>,
    {
        let mut graph = Graph::new();

        let ids = points
            .into_iter()
            .map(|(label, x, y)| graph.add_node(label, x, y))
            .collect::<GenericResult<Vec<_>>>()?;

        ids.iter().enumerate().try_for_each(|(idx, &origin)| {
            ids.iter().skip(idx + 1).try_for_each(|&destination| {
                let (a, b) = (&graph.topology.nodes[origin], &graph.topology.nodes[destination]);
                let weight = (a.x - b.x).hypot(a.y - b.y);

                graph.add_link_by_id(origin, destination, weight)
            })
        })?;

        Ok(graph)
    }

    /// Adds a new node with unique label.
    pub fn add_node(&mut self, label: impl Into<String>, x: Float, y: Float) -> GenericResult<NodeId> {
        let label = label.into();
        if self.topology.labels.contains_key(&label) {
            return Err(format!("node '{label}' already exists").into());
        }

        let topology = Arc::make_mut(&mut self.topology);
        let id = topology.nodes.len();

        topology.labels.insert(label.clone(), id);
        topology.nodes.push(Node { label, x, y, links: vec![] });

        Ok(id)
    }

    /// Adds a weighted link between two existing nodes: both directions are created.
    pub fn add_link(&mut self, node_a: &str, node_b: &str, weight: Float) -> GenericResult<()> {
        let id_a = self.node_id(node_a).ok_or_else(|| format!("unknown node '{node_a}'"))?;
        let id_b = self.node_id(node_b).ok_or_else(|| format!("unknown node '{node_b}'"))?;

        self.add_link_by_id(id_a, id_b, weight)
    }

    fn add_link_by_id(&mut self, id_a: NodeId, id_b: NodeId, weight: Float) -> GenericResult<()> {
        if id_a == id_b {
            return Err(format!("self link is not allowed for '{}'", self.topology.nodes[id_a].label).into());
        }

        if self.topology.adjacency.contains_key(&(id_a, id_b)) {
            return Err(format!(
                "link between '{}' and '{}' already exists",
                self.topology.nodes[id_a].label, self.topology.nodes[id_b].label
            )
            .into());
        }

        let topology = Arc::make_mut(&mut self.topology);

        [(id_a, id_b), (id_b, id_a)].into_iter().for_each(|(origin, destination)| {
            let link_id = topology.edges.len();

            topology.edges.push(Edge { origin, destination, weight });
            topology.adjacency.insert((origin, destination), link_id);
            topology.nodes[origin].links.push(link_id);
        });

        self.trails.extend([Trail::default(); 2]);

        Ok(())
    }

    /// Returns node by its label.
    pub fn node(&self, label: &str) -> Option<&Node> {
        self.node_id(label).map(|id| &self.topology.nodes[id])
    }

    /// Returns node index by its label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.topology.labels.get(label).copied()
    }

    /// Returns a directed link between two labeled nodes.
    pub fn link(&self, origin: &str, destination: &str) -> Option<Link<'_>> {
        let origin = self.node_id(origin)?;
        let destination = self.node_id(destination)?;

        self.link_id(origin, destination).and_then(|id| self.link_by_id(id))
    }

    /// Returns an index of a directed link between two nodes.
    #[inline]
    pub fn link_id(&self, origin: NodeId, destination: NodeId) -> Option<LinkId> {
        self.topology.adjacency.get(&(origin, destination)).copied()
    }

    /// Returns a directed link by its index.
    pub fn link_by_id(&self, id: LinkId) -> Option<Link<'_>> {
        let edge = self.topology.edges.get(id)?;
        let trail = self.trails.get(id)?;

        Some(Link {
            id,
            origin: &self.topology.nodes[edge.origin],
            destination: &self.topology.nodes[edge.destination],
            weight: edge.weight,
            pheromone: trail.pheromone,
            iteration_pheromone: trail.iteration_pheromone,
        })
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        self.topology.nodes.as_slice()
    }

    /// Returns labels of all nodes in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.topology.nodes.iter().map(|node| node.label())
    }

    /// Returns all directed links grouped by origin node.
    pub fn links(&self) -> impl Iterator<Item = Link<'_>> + '_ {
        self.topology.nodes.iter().flat_map(move |node| node.links.iter().filter_map(move |&id| self.link_by_id(id)))
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.topology.nodes.len()
    }

    /// Returns amount of directed links.
    pub fn links_size(&self) -> usize {
        self.topology.edges.len()
    }

    /// Returns weight of the link.
    #[inline]
    pub fn weight(&self, id: LinkId) -> Float {
        self.topology.edges[id].weight
    }

    /// Returns trail of the link.
    #[inline]
    pub fn trail(&self, id: LinkId) -> &Trail {
        &self.trails[id]
    }

    /// Returns mutable trail of the link.
    #[inline]
    pub(crate) fn trail_mut(&mut self, id: LinkId) -> &mut Trail {
        &mut self.trails[id]
    }

    /// Returns mutable trails of all links.
    pub(crate) fn trails_mut(&mut self) -> impl Iterator<Item = &mut Trail> + '_ {
        self.trails.iter_mut()
    }

    /// Returns an index of a link which must exist.
    ///
    /// # Panics
    /// Panics when nodes are not linked: an algorithm assumed a complete graph.
    #[inline]
    pub fn expect_link_id(&self, origin: NodeId, destination: NodeId) -> LinkId {
        self.link_id(origin, destination).unwrap_or_else(|| {
            panic!(
                "no link from '{}' to '{}': graph is expected to be complete",
                self.topology.nodes[origin].label, self.topology.nodes[destination].label
            )
        })
    }

    /// Returns sum of weights of consecutive links along the path. Staying at the same node
    /// costs nothing.
    ///
    /// # Panics
    /// Panics when two consecutive distinct nodes are not linked.
    pub fn path_length(&self, path: &[NodeId]) -> Float {
        path.windows(2)
            .filter(|pair| pair[0] != pair[1])
            .map(|pair| self.weight(self.expect_link_id(pair[0], pair[1])))
            .sum()
    }

    /// Maps node indices to their labels.
    pub fn labels_of(&self, path: &[NodeId]) -> Vec<String> {
        path.iter().map(|&id| self.topology.nodes[id].label.clone()).collect()
    }
}
