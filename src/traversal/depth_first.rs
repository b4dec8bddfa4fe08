use crate::{
    graph::NodeId,
    sets::frontier::StackSet,
    traversal::{Algorithm, TraversalStrategy},
};

/// Stack-based depth-first traversal.
///
/// Neighbors are pushed in descending id order, so they come back off the
/// stack in ascending order: the lowest-numbered branch is explored first.
pub struct DepthFirstSearch;

impl TraversalStrategy for DepthFirstSearch {
    type Frontier = StackSet;
    const ALGORITHM: Algorithm = Algorithm::DepthFirst;

    fn order_neighbors(neighbors: &mut [NodeId]) {
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
    }
}
