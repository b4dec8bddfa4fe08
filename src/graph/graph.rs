use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Node, NodeId};

/// Label printed for an id that does not resolve to a node.
pub const UNKNOWN_LABEL: &str = "?";

/// Immutable node/edge collection handed to the traversal engines.
///
/// # Invariants
/// - Node ids are unique; a later node reusing an id is dropped.
/// - Every stored edge has both endpoints in `nodes`. Edges referencing an
///   unknown id are dropped at construction, never stored.
/// - `adjacency[id]` lists the `to` ends of the edges leaving `id`, in edge order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "GraphParts", into = "GraphParts")]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    positions: HashMap<NodeId, usize>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

/// Wire shape of a [`Graph`]: just the ordered nodes and edges.
#[derive(Serialize, Deserialize)]
struct GraphParts {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl From<GraphParts> for Graph {
    fn from(parts: GraphParts) -> Self {
        Graph::new(parts.nodes, parts.edges)
    }
}

impl From<Graph> for GraphParts {
    fn from(graph: Graph) -> Self {
        GraphParts {
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut positions = HashMap::with_capacity(nodes.len());
        let mut kept_nodes = Vec::with_capacity(nodes.len());
        for node in nodes {
            if positions.contains_key(&node.id) {
                continue;
            }
            positions.insert(node.id, kept_nodes.len());
            kept_nodes.push(node);
        }

        let edges: Vec<Edge> = edges
            .into_iter()
            .filter(|edge| positions.contains_key(&edge.from) && positions.contains_key(&edge.to))
            .collect();

        let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for edge in &edges {
            adjacency.entry(edge.from).or_default().push(edge.to);
        }

        Graph {
            nodes: kept_nodes,
            edges,
            positions,
            adjacency,
        }
    }

    pub fn empty() -> Self {
        Graph::new(Vec::new(), Vec::new())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node every traversal starts from: the first one inserted.
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().map(|node| node.id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.positions.get(&id).map(|&position| &self.nodes[position])
    }

    pub fn find_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.has_label(label))
    }

    /// Display label of `id`, or [`UNKNOWN_LABEL`] when the id is not in the graph.
    pub fn label(&self, id: NodeId) -> &str {
        self.node(id)
            .map(|node| node.label.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn labels<'a>(&'a self, ids: &'a [NodeId]) -> impl Iterator<Item = &'a str> + 'a {
        ids.iter().map(|&id| self.label(id))
    }

    /// Targets of the edges leaving `id`, in edge insertion order.
    pub fn out_neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}
