use std::io::Write;

use serde::Serialize;

use crate::{
    graph::Graph,
    statistics::TraceStats,
    traversal::{Algorithm, Snapshot, StepKind, Trace},
};

/// Label-resolved, serializable view of a [`Trace`].
#[derive(Debug, Serialize)]
pub struct TraceExport<'a> {
    pub algorithm: Algorithm,
    pub graph: &'a Graph,
    pub snapshots: Vec<SnapshotExport<'a>>,
    pub stats: TraceStats,
}

#[derive(Debug, Serialize)]
pub struct SnapshotExport<'a> {
    pub index: usize,
    pub kind: StepKind,
    pub message: &'a str,
    pub current: Option<&'a str>,
    pub visit_order: Vec<&'a str>,
    pub frontier: Vec<&'a str>,
    pub comparisons: usize,
    pub elapsed_micros: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_micros: Option<u64>,
}

impl<'a> SnapshotExport<'a> {
    fn new(index: usize, snapshot: &'a Snapshot) -> Self {
        let graph = snapshot.graph();
        SnapshotExport {
            index,
            kind: snapshot.kind(),
            message: snapshot.message(),
            current: snapshot.current().map(|id| graph.label(id)),
            visit_order: graph.labels(snapshot.visit_order()).collect(),
            frontier: graph.labels(snapshot.frontier()).collect(),
            comparisons: snapshot.comparisons(),
            elapsed_micros: snapshot.elapsed_micros(),
            total_micros: snapshot.total_micros(),
        }
    }
}

impl<'a> TraceExport<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        TraceExport {
            algorithm: trace.algorithm(),
            graph: trace.graph(),
            snapshots: trace
                .iter()
                .enumerate()
                .map(|(index, snapshot)| SnapshotExport::new(index, snapshot))
                .collect(),
            stats: *trace.stats(),
        }
    }

    pub fn write_json(&self, writer: impl Write) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}
