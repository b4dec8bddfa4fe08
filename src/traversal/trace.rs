use std::{slice, sync::Arc};

use crate::{
    graph::{Graph, NodeId},
    statistics::TraceStats,
    traversal::{Algorithm, Snapshot},
};

/// Every snapshot of one traversal run, in order.
///
/// Index 0 is the initialized state and the last snapshot is the completed
/// one; a trace from an engine always holds at least those two.
#[derive(Debug, Clone)]
pub struct Trace {
    algorithm: Algorithm,
    graph: Arc<Graph>,
    snapshots: Vec<Snapshot>,
    stats: TraceStats,
}

impl Trace {
    pub(crate) fn new(
        algorithm: Algorithm,
        graph: Arc<Graph>,
        snapshots: Vec<Snapshot>,
        stats: TraceStats,
    ) -> Self {
        Trace {
            algorithm,
            graph,
            snapshots,
            stats,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// The complete visit order, as seen by the final snapshot.
    pub fn visit_order(&self) -> &[NodeId] {
        self.last().map(Snapshot::visit_order).unwrap_or_default()
    }

    pub fn stats(&self) -> &TraceStats {
        &self.stats
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Snapshot;
    type IntoIter = slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
