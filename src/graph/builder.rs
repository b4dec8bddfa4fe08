use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::debug;

use crate::graph::{
    Edge, Graph, Node, NodeId, Preset,
    layout::{LAYOUT_CENTER_X, LAYOUT_CENTER_Y, finalize_layout},
};

/// Horizontal spread of the provisional position given to a freshly added node.
const SCATTER_WIDTH: f64 = 200.0;
/// Vertical spread of the provisional position given to a freshly added node.
const SCATTER_HEIGHT: f64 = 150.0;

/// Why an edit left the builder untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("node label is empty")]
    EmptyLabel,
    #[error("a node labelled `{0}` already exists")]
    DuplicateLabel(String),
    #[error("no node labelled `{0}`")]
    UnknownLabel(String),
    #[error("an edge between `{0}` and `{1}` already exists")]
    DuplicateEdge(String, String),
    #[error("no node with id {0}")]
    UnknownNode(NodeId),
    #[error("no edge at index {0}")]
    EdgeIndexOutOfRange(usize),
    #[error("the graph has no nodes")]
    EmptyGraph,
}

/// Result of a graph edit.
///
/// A rejected edit is a normal outcome, not a failure: the builder state is
/// exactly what it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum EditOutcome {
    Applied,
    Rejected(RejectReason),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&RejectReason> {
        match self {
            EditOutcome::Applied => None,
            EditOutcome::Rejected(reason) => Some(reason),
        }
    }

    fn reject(reason: RejectReason) -> Self {
        debug!(%reason, "graph edit rejected");
        EditOutcome::Rejected(reason)
    }
}

/// Accumulates user-entered nodes and edges before they become a [`Graph`].
///
/// Ids come from a monotonic counter so removing a node never lets a later
/// node reuse its id.
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_id: usize,
    rng: StdRng,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// Builder whose provisional node positions are reproducible when `seed` is given.
    pub fn with_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GraphBuilder {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_id: 0,
            rng,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn find(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.has_label(label))
    }

    pub fn add_node(&mut self, label: &str) -> EditOutcome {
        let label = label.trim();
        if label.is_empty() {
            return EditOutcome::reject(RejectReason::EmptyLabel);
        }
        if let Some(existing) = self.find(label) {
            return EditOutcome::reject(RejectReason::DuplicateLabel(existing.label.clone()));
        }

        let x = LAYOUT_CENTER_X + (self.rng.random::<f64>() - 0.5) * SCATTER_WIDTH;
        let y = LAYOUT_CENTER_Y + (self.rng.random::<f64>() - 0.5) * SCATTER_HEIGHT;
        self.nodes.push(Node::new(self.next_id, label, x, y));
        self.next_id += 1;
        EditOutcome::Applied
    }

    /// Removes the node and every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> EditOutcome {
        let Some(position) = self.nodes.iter().position(|node| node.id == id) else {
            return EditOutcome::reject(RejectReason::UnknownNode(id));
        };
        self.nodes.remove(position);
        self.edges.retain(|edge| !edge.touches(id));
        EditOutcome::Applied
    }

    pub fn add_edge(&mut self, from_label: &str, to_label: &str) -> EditOutcome {
        let Some(from) = self.find(from_label).map(|node| node.id) else {
            return EditOutcome::reject(RejectReason::UnknownLabel(from_label.trim().to_string()));
        };
        let Some(to) = self.find(to_label).map(|node| node.id) else {
            return EditOutcome::reject(RejectReason::UnknownLabel(to_label.trim().to_string()));
        };

        let edge = Edge { from, to };
        if self.edges.iter().any(|existing| existing.same_pair(&edge)) {
            return EditOutcome::reject(RejectReason::DuplicateEdge(
                from_label.trim().to_string(),
                to_label.trim().to_string(),
            ));
        }

        self.edges.push(edge);
        EditOutcome::Applied
    }

    pub fn remove_edge(&mut self, index: usize) -> EditOutcome {
        if index >= self.edges.len() {
            return EditOutcome::reject(RejectReason::EdgeIndexOutOfRange(index));
        }
        self.edges.remove(index);
        EditOutcome::Applied
    }

    /// Replaces the builder contents with a preset's nodes and edges.
    pub fn load_preset(&mut self, preset: Preset) {
        let (nodes, edges) = preset.contents();
        self.next_id = nodes
            .iter()
            .map(|node| node.id.internal + 1)
            .max()
            .unwrap_or(0);
        self.nodes = nodes;
        self.edges = edges;
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_id = 0;
    }

    /// Lays the nodes out on a circle and freezes them into a [`Graph`].
    ///
    /// Rejected when the builder holds no nodes.
    pub fn finalize(&self) -> Result<Graph, RejectReason> {
        if self.nodes.is_empty() {
            return Err(RejectReason::EmptyGraph);
        }
        Ok(Graph::new(finalize_layout(&self.nodes), self.edges.clone()))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Feeds labels and label pairs through a [`GraphBuilder`] and lays out the result.
///
/// Duplicate labels, edges naming unknown labels, and repeated edges (in either
/// direction) are silently skipped. No labels at all yields an empty graph.
pub fn build_from_user_input<L, P, S>(node_labels: L, edge_label_pairs: P) -> Graph
where
    L: IntoIterator<Item = S>,
    P: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::with_seed(Some(0));
    for label in node_labels {
        let _ = builder.add_node(label.as_ref());
    }
    for (from, to) in edge_label_pairs {
        let _ = builder.add_edge(from.as_ref(), to.as_ref());
    }
    builder.finalize().unwrap_or_else(|_| Graph::empty())
}
