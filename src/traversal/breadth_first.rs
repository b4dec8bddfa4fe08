use crate::{
    graph::NodeId,
    sets::frontier::FifoSet,
    traversal::{Algorithm, TraversalStrategy},
};

/// Queue-based breadth-first traversal.
///
/// Neighbors discovered by one expansion are queued in ascending id order;
/// ids already waiting in the queue are not queued twice.
pub struct BreadthFirstSearch;

impl TraversalStrategy for BreadthFirstSearch {
    type Frontier = FifoSet;
    const ALGORITHM: Algorithm = Algorithm::BreadthFirst;

    fn order_neighbors(neighbors: &mut [NodeId]) {
        neighbors.sort_unstable();
    }
}
