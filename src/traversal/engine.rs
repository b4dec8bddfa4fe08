use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::{debug, trace};

use crate::{
    graph::{Graph, NodeId},
    sets::{
        frontier::Frontier,
        visited::{HashVisitedSet, VisitorSet},
    },
    statistics::TraceStats,
    traversal::{
        Snapshot, StepKind, Trace, TraversalStrategy,
        snapshot::VisitOrder,
    },
};

/// A snapshot whose shared visit order does not exist yet.
struct PendingStep {
    kind: StepKind,
    visited_len: usize,
    frontier: Arc<[NodeId]>,
    current: Option<NodeId>,
    message: String,
    elapsed: Duration,
    total: Option<Duration>,
    comparisons: usize,
}

/// Collects steps while an engine runs, then freezes them into a [`Trace`].
struct TraceRecorder {
    graph: Arc<Graph>,
    started: Instant,
    steps: Vec<PendingStep>,
    order: Vec<NodeId>,
    stats: TraceStats,
}

impl TraceRecorder {
    fn new(graph: Arc<Graph>) -> Self {
        TraceRecorder {
            graph,
            started: Instant::now(),
            steps: Vec::new(),
            order: Vec::new(),
            stats: TraceStats::new(),
        }
    }

    fn visit(&mut self, id: NodeId) {
        self.order.push(id);
        self.stats.bump_visits();
    }

    fn record<F: Frontier>(
        &mut self,
        kind: StepKind,
        current: Option<NodeId>,
        frontier: &F,
        message: String,
    ) {
        let elapsed = self.started.elapsed();
        let total = (kind == StepKind::Completed).then_some(elapsed);
        trace!(?kind, waiting = frontier.len(), %message, "snapshot recorded");
        self.stats.bump_snapshots();
        self.steps.push(PendingStep {
            kind,
            visited_len: self.order.len(),
            frontier: frontier.to_vec().into(),
            current,
            message,
            elapsed,
            total,
            comparisons: self.stats.get_edges_examined(),
        });
    }

    fn finish<S: TraversalStrategy>(mut self) -> Trace {
        if let Some(total) = self.steps.last().and_then(|step| step.total) {
            self.stats.set_total(total);
        }

        let order = Arc::new(VisitOrder::new(self.order));
        let graph = self.graph;
        let snapshots = self
            .steps
            .into_iter()
            .map(|step| Snapshot {
                graph: Arc::clone(&graph),
                order: Arc::clone(&order),
                visited_len: step.visited_len,
                frontier: step.frontier,
                current: step.current,
                kind: step.kind,
                message: step.message,
                elapsed: step.elapsed,
                total: step.total,
                comparisons: step.comparisons,
            })
            .collect::<Vec<_>>();

        let algorithm = S::ALGORITHM;
        debug!(
            %algorithm,
            nodes = graph.len(),
            visited = order.len(),
            snapshots = snapshots.len(),
            stats = %self.stats,
            "trace computed"
        );
        Trace::new(algorithm, graph, snapshots, self.stats)
    }
}

/// Runs traversal strategy `S` over `graph` from its first node and records
/// every state transition.
///
/// Each loop iteration pops one id. A stale id (already visited) is dropped
/// without a snapshot. A fresh id is visited (one snapshot), then its
/// unvisited out-neighbors are ordered by `S`, and every one not already
/// waiting is pushed; a second snapshot lists the pushed ids when there are any.
///
/// An empty graph yields exactly an initialized and a completed snapshot.
pub fn run_traversal<S: TraversalStrategy>(graph: Arc<Graph>) -> Trace {
    let algorithm = S::ALGORITHM;
    let abbrev = algorithm.abbreviation();
    let frontier_name = algorithm.frontier_name();

    let mut recorder = TraceRecorder::new(Arc::clone(&graph));
    let mut frontier = S::Frontier::new();
    let mut visited = HashVisitedSet::new();

    match graph.start() {
        Some(start) => {
            frontier.push(start);
            recorder.stats.bump_pushes();
            recorder.record(
                StepKind::Initialized,
                None,
                &frontier,
                format!(
                    "Initialize {abbrev} with starting node {} using a {frontier_name}",
                    graph.label(start)
                ),
            );
        }
        None => recorder.record(
            StepKind::Initialized,
            None,
            &frontier,
            format!("Initialize {abbrev} with no starting node: the graph is empty"),
        ),
    }

    while let Some(current) = frontier.pop() {
        if visited.get(current) {
            recorder.stats.bump_stale_pops();
            continue;
        }

        visited.set(current);
        recorder.visit(current);
        let current_label = graph.label(current);
        recorder.record(
            StepKind::Visit,
            Some(current),
            &frontier,
            format!("Visit node {current_label} - mark as visited"),
        );

        let outgoing = graph.out_neighbors(current);
        recorder.stats.bump_edges(outgoing.len());
        let mut neighbors: Vec<NodeId> = outgoing
            .iter()
            .copied()
            .filter(|&neighbor| !visited.get(neighbor))
            .collect();
        S::order_neighbors(&mut neighbors);
        neighbors.dedup();

        let mut pushed = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            if frontier.push(neighbor) {
                recorder.stats.bump_pushes();
                pushed.push(neighbor);
            }
        }

        if !pushed.is_empty() {
            let pushed_labels = graph.labels(&pushed).collect::<Vec<_>>().join(", ");
            recorder.record(
                StepKind::FrontierUpdated,
                Some(current),
                &frontier,
                format!(
                    "Added unvisited neighbors of {current_label} to {frontier_name}: [{pushed_labels}]"
                ),
            );
        }
    }

    let visit_order = graph.labels(&recorder.order).collect::<Vec<_>>().join(" → ");
    let last_visited = recorder.order.last().copied();
    recorder.record(
        StepKind::Completed,
        last_visited,
        &frontier,
        format!("{abbrev} completed! Visit order: [{visit_order}]"),
    );

    recorder.finish::<S>()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        graph::{Edge, Node, Preset, generate_default},
        traversal::{Algorithm, BreadthFirstSearch, DepthFirstSearch},
    };

    fn random_graph(seed: u64, node_count: usize, edge_count: usize) -> Graph {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = (0..node_count)
            .map(|i| Node::new(i, format!("N{i}"), 0.0, 0.0))
            .collect();
        let edges = (0..edge_count)
            .map(|_| {
                Edge::new(
                    rng.random_range(0..node_count),
                    rng.random_range(0..node_count),
                )
            })
            .collect();
        Graph::new(nodes, edges)
    }

    fn sample_graphs() -> Vec<Graph> {
        let mut graphs = vec![generate_default(), Graph::empty()];
        graphs.extend(Preset::ALL.map(Preset::graph));
        graphs.extend((0..20).map(|seed| random_graph(seed, 12, 18)));
        graphs
    }

    /// Ids reachable from the start along edge direction, computed independently.
    fn reachable(graph: &Graph) -> BTreeSet<NodeId> {
        let mut seen = BTreeSet::new();
        let mut pending: VecDeque<NodeId> = graph.start().into_iter().collect();
        while let Some(id) = pending.pop_front() {
            if seen.insert(id) {
                pending.extend(graph.out_neighbors(id));
            }
        }
        seen
    }

    #[test]
    fn empty_graph_yields_two_snapshots() {
        for algorithm in Algorithm::ALL {
            let trace = algorithm.run(Arc::new(Graph::empty()));
            assert_eq!(trace.len(), 2);
            assert_eq!(trace.snapshots()[0].kind(), StepKind::Initialized);
            assert_eq!(trace.snapshots()[1].kind(), StepKind::Completed);
            for snapshot in &trace {
                assert!(snapshot.visit_order().is_empty());
                assert!(snapshot.frontier().is_empty());
                assert_eq!(snapshot.current(), None);
            }
        }
    }

    #[test]
    fn empty_graph_narration() {
        let trace = run_traversal::<BreadthFirstSearch>(Arc::new(Graph::empty()));
        assert_eq!(
            trace.snapshots()[0].message(),
            "Initialize BFS with no starting node: the graph is empty"
        );
        assert_eq!(
            trace.snapshots()[1].message(),
            "BFS completed! Visit order: []"
        );
    }

    #[test]
    fn single_node_without_edges() {
        let graph = Graph::new(vec![Node::new(0, "Solo", 0.0, 0.0)], vec![]);
        let trace = run_traversal::<DepthFirstSearch>(Arc::new(graph));
        let kinds: Vec<StepKind> = trace.iter().map(Snapshot::kind).collect();
        assert_eq!(
            kinds,
            [StepKind::Initialized, StepKind::Visit, StepKind::Completed]
        );
    }

    #[test]
    fn self_loop_does_not_requeue() {
        let graph = Graph::new(vec![Node::new(0, "A", 0.0, 0.0)], vec![Edge::new(0, 0)]);
        let trace = run_traversal::<BreadthFirstSearch>(Arc::new(graph));
        assert_eq!(trace.visit_order(), &[NodeId::new(0)]);
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn visits_exactly_the_reachable_nodes_once() {
        for graph in sample_graphs() {
            let expected = reachable(&graph);
            let graph = Arc::new(graph);
            for algorithm in Algorithm::ALL {
                let trace = algorithm.run(Arc::clone(&graph));
                let order = trace.visit_order();
                let unique: BTreeSet<NodeId> = order.iter().copied().collect();
                assert_eq!(unique.len(), order.len(), "{algorithm} revisited a node");
                assert_eq!(unique, expected, "{algorithm} reach mismatch");
            }
        }
    }

    #[test]
    fn disconnected_component_is_never_visited() {
        let graph = Graph::new(
            vec![
                Node::new(0, "A", 0.0, 0.0),
                Node::new(1, "B", 0.0, 0.0),
                Node::new(2, "X", 0.0, 0.0),
                Node::new(3, "Y", 0.0, 0.0),
            ],
            vec![Edge::new(0, 1), Edge::new(2, 3)],
        );
        let trace = run_traversal::<DepthFirstSearch>(Arc::new(graph));
        assert_eq!(trace.visit_order(), &[NodeId::new(0), NodeId::new(1)]);
    }

    #[test]
    fn edges_are_followed_in_their_direction_only() {
        // B -> A only: starting from A nothing else is reachable
        let graph = Graph::new(
            vec![Node::new(0, "A", 0.0, 0.0), Node::new(1, "B", 0.0, 0.0)],
            vec![Edge::new(1, 0)],
        );
        let trace = run_traversal::<BreadthFirstSearch>(Arc::new(graph));
        assert_eq!(trace.visit_order(), &[NodeId::new(0)]);
    }

    #[test]
    fn visited_matches_visit_order_at_every_index() {
        for graph in sample_graphs() {
            let graph = Arc::new(graph);
            for algorithm in Algorithm::ALL {
                let trace = algorithm.run(Arc::clone(&graph));
                let mut previous: &[NodeId] = &[];
                for snapshot in &trace {
                    let order = snapshot.visit_order();
                    assert!(order.starts_with(previous), "visit order shrank");
                    previous = order;

                    let as_set: hashbrown::HashSet<NodeId> = order.iter().copied().collect();
                    assert_eq!(snapshot.visited(), as_set);
                    for node in graph.nodes() {
                        assert_eq!(snapshot.is_visited(node.id), as_set.contains(&node.id));
                    }
                    if let Some(current) = snapshot.current() {
                        assert!(snapshot.is_visited(current));
                    }
                }
            }
        }
    }

    #[test]
    fn trace_is_bracketed_by_initialized_and_completed() {
        for graph in sample_graphs() {
            let trace = run_traversal::<DepthFirstSearch>(Arc::new(graph));
            let (first, last) = (trace.first().unwrap(), trace.last().unwrap());
            assert_eq!(first.kind(), StepKind::Initialized);
            assert_eq!(first.current(), None);
            assert!(last.is_completed());
            assert!(last.frontier().is_empty());
            assert!(last.total().is_some());
            assert_eq!(trace.iter().filter(|s| s.is_completed()).count(), 1);
            assert_eq!(trace.iter().filter(|s| s.total().is_some()).count(), 1);
        }
    }

    #[test]
    fn runs_are_deterministic() {
        for graph in sample_graphs() {
            let graph = Arc::new(graph);
            for algorithm in Algorithm::ALL {
                let first = algorithm.run(Arc::clone(&graph));
                let second = algorithm.run(Arc::clone(&graph));
                assert_eq!(first.visit_order(), second.visit_order());
                let messages = |t: &Trace| t.iter().map(|s| s.message().to_string()).collect::<Vec<_>>();
                assert_eq!(messages(&first), messages(&second));
            }
        }
    }

    #[test]
    fn snapshots_share_the_input_graph() {
        let graph = Arc::new(generate_default());
        let before = (*graph).clone();
        let trace = run_traversal::<BreadthFirstSearch>(Arc::clone(&graph));
        assert!(trace.iter().all(|s| Arc::ptr_eq(s.graph(), &graph)));
        assert_eq!(*graph, before);
    }

    #[test]
    fn elapsed_never_decreases() {
        let trace = run_traversal::<DepthFirstSearch>(Arc::new(random_graph(7, 50, 120)));
        let elapsed: Vec<Duration> = trace.iter().map(Snapshot::elapsed).collect();
        assert!(elapsed.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(trace.last().and_then(Snapshot::total), elapsed.last().copied());
    }

    #[test]
    fn comparisons_count_examined_edges() {
        let trace = run_traversal::<BreadthFirstSearch>(Arc::new(generate_default()));
        let comparisons: Vec<usize> = trace.iter().map(Snapshot::comparisons).collect();
        assert!(comparisons.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(comparisons.last(), Some(&11));
        assert_eq!(trace.stats().get_edges_examined(), 11);
    }

    #[test]
    fn stats_agree_with_the_trace() {
        let trace = run_traversal::<DepthFirstSearch>(Arc::new(generate_default()));
        let stats = trace.stats();
        assert_eq!(stats.get_nodes_visited(), 9);
        assert_eq!(stats.get_snapshots(), trace.len());
        assert_eq!(stats.get_frontier_pushes(), 9);
    }
}
