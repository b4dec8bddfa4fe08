use std::{fmt, time::Duration};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TraceStats {
    nodes_visited: usize,
    frontier_pushes: usize,
    stale_pops: usize,
    edges_examined: usize,
    snapshots: usize,
    total_micros: u64,
}

impl TraceStats {
    pub fn new() -> Self {
        TraceStats::default()
    }

    /// Record that a node was marked visited
    pub fn bump_visits(&mut self) {
        self.nodes_visited += 1
    }

    /// Record that a node id was added to the frontier
    pub fn bump_pushes(&mut self) {
        self.frontier_pushes += 1
    }

    /// Record that an already-visited id came off the frontier and was discarded
    pub fn bump_stale_pops(&mut self) {
        self.stale_pops += 1
    }

    /// Record that a bunch of outgoing edges were looked at while expanding a node
    pub fn bump_edges(&mut self, edge_amount: usize) {
        self.edges_examined += edge_amount
    }

    pub fn bump_snapshots(&mut self) {
        self.snapshots += 1
    }

    pub fn set_total(&mut self, total: Duration) {
        self.total_micros = total.as_micros().try_into().unwrap_or(u64::MAX);
    }

    pub fn get_nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn get_frontier_pushes(&self) -> usize {
        self.frontier_pushes
    }

    pub fn get_stale_pops(&self) -> usize {
        self.stale_pops
    }

    pub fn get_edges_examined(&self) -> usize {
        self.edges_examined
    }

    pub fn get_snapshots(&self) -> usize {
        self.snapshots
    }

    pub fn get_total_micros(&self) -> u64 {
        self.total_micros
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} snapshots, {} nodes visited, {} frontier pushes, {} stale pops, {} edges examined, {}us",
            self.snapshots,
            self.nodes_visited,
            self.frontier_pushes,
            self.stale_pops,
            self.edges_examined,
            self.total_micros
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = TraceStats::new();
        assert_eq!(stats.get_nodes_visited(), 0);
        assert_eq!(stats.get_frontier_pushes(), 0);
        assert_eq!(stats.get_stale_pops(), 0);
        assert_eq!(stats.get_edges_examined(), 0);
        assert_eq!(stats.get_snapshots(), 0);
        assert_eq!(stats.get_total_micros(), 0);
    }

    #[test]
    fn test_bump_edges_accumulates() {
        let mut stats = TraceStats::new();
        stats.bump_edges(5);
        stats.bump_edges(10);
        stats.bump_edges(0);
        assert_eq!(stats.get_edges_examined(), 15);
    }

    #[test]
    fn test_combined_operations() {
        let mut stats = TraceStats::new();
        stats.bump_visits();
        stats.bump_pushes();
        stats.bump_pushes();
        stats.bump_stale_pops();
        stats.bump_snapshots();

        assert_eq!(stats.get_nodes_visited(), 1);
        assert_eq!(stats.get_frontier_pushes(), 2);
        assert_eq!(stats.get_stale_pops(), 1);
        assert_eq!(stats.get_snapshots(), 1);
    }

    #[test]
    fn test_total_is_stored_in_micros() {
        let mut stats = TraceStats::new();
        stats.set_total(Duration::from_millis(3));
        assert_eq!(stats.get_total_micros(), 3000);
    }

    #[test]
    fn test_display() {
        let mut stats = TraceStats::new();
        stats.bump_visits();
        stats.bump_edges(2);
        assert_eq!(
            stats.to_string(),
            "0 snapshots, 1 nodes visited, 0 frontier pushes, 0 stale pops, 2 edges examined, 0us"
        );
    }
}
