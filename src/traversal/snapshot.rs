use std::{sync::Arc, time::Duration};

use hashbrown::{HashMap, HashSet};
use serde::Serialize;

use crate::graph::{Graph, NodeId};

/// What the engine was doing when a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Initialized,
    Visit,
    FrontierUpdated,
    Completed,
}

/// How a node should read in a given snapshot, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeState {
    Current,
    Visited,
    InFrontier,
    Unvisited,
}

/// The final visit order of one run, shared by every snapshot of its trace.
#[derive(Debug)]
pub(crate) struct VisitOrder {
    ids: Box<[NodeId]>,
    ranks: HashMap<NodeId, usize>,
}

impl VisitOrder {
    pub(crate) fn new(ids: Vec<NodeId>) -> Self {
        let ranks = ids
            .iter()
            .enumerate()
            .map(|(rank, &id)| (id, rank))
            .collect();
        VisitOrder {
            ids: ids.into_boxed_slice(),
            ranks,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}

/// One immutable, self-contained state of a traversal.
///
/// Snapshots of one trace share the same [`Graph`] and the same final visit
/// order; each stores only how long a prefix of that order it has seen, so
/// cloning a snapshot never copies the graph or the visit order.
///
/// # Invariants
/// - `visit_order()` is a prefix of the next snapshot's `visit_order()`.
/// - `is_visited(id)` holds exactly for the ids in `visit_order()`.
/// - `current()` is `None` only before the first visit (and throughout a run
///   over an empty graph); otherwise it names a visited node. The completed
///   snapshot keeps the last visited node as current.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub(crate) graph: Arc<Graph>,
    pub(crate) order: Arc<VisitOrder>,
    pub(crate) visited_len: usize,
    pub(crate) frontier: Arc<[NodeId]>,
    pub(crate) current: Option<NodeId>,
    pub(crate) kind: StepKind,
    pub(crate) message: String,
    pub(crate) elapsed: Duration,
    pub(crate) total: Option<Duration>,
    pub(crate) comparisons: usize,
}

impl Snapshot {
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Nodes visited so far, in visit order.
    pub fn visit_order(&self) -> &[NodeId] {
        &self.order.ids[..self.visited_len]
    }

    pub fn visited_count(&self) -> usize {
        self.visited_len
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visit_rank(id).is_some()
    }

    /// Zero-based position of `id` in the visit order, if it has been visited yet.
    pub fn visit_rank(&self, id: NodeId) -> Option<usize> {
        self.order
            .ranks
            .get(&id)
            .copied()
            .filter(|&rank| rank < self.visited_len)
    }

    /// The visited ids as a set.
    pub fn visited(&self) -> HashSet<NodeId> {
        self.visit_order().iter().copied().collect()
    }

    /// Waiting ids: bottom-to-top for a stack, front-to-back for a queue.
    pub fn frontier(&self) -> &[NodeId] {
        &self.frontier
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn is_completed(&self) -> bool {
        self.kind == StepKind::Completed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Wall-clock time since the run started. Measurement only.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_micros(&self) -> u64 {
        self.elapsed.as_micros().try_into().unwrap_or(u64::MAX)
    }

    /// Total run time, set on the completed snapshot only.
    pub fn total(&self) -> Option<Duration> {
        self.total
    }

    pub fn total_micros(&self) -> Option<u64> {
        self.total
            .map(|total| total.as_micros().try_into().unwrap_or(u64::MAX))
    }

    /// Neighbor checks made so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn node_state(&self, id: NodeId) -> NodeState {
        if self.current == Some(id) {
            NodeState::Current
        } else if self.is_visited(id) {
            NodeState::Visited
        } else if self.frontier.contains(&id) {
            NodeState::InFrontier
        } else {
            NodeState::Unvisited
        }
    }

    /// Labels of the visited nodes joined with arrows, e.g. `A → B → C`.
    pub fn visit_order_labels(&self) -> String {
        self.graph
            .labels(self.visit_order())
            .collect::<Vec<_>>()
            .join(" → ")
    }

    pub fn frontier_labels(&self) -> String {
        self.graph
            .labels(&self.frontier)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
