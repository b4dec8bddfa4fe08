use crate::{graph::NodeId, sets::frontier::Frontier, traversal::Algorithm};

/// A trait defining the components of a traversal strategy.
///
/// The engine loop is shared; a strategy only picks the work-list type and
/// the order in which freshly discovered neighbors are pushed onto it.
///
/// Implementations:
/// - [`DepthFirstSearch`](crate::traversal::DepthFirstSearch): LIFO stack, descending push
/// - [`BreadthFirstSearch`](crate::traversal::BreadthFirstSearch): FIFO queue, ascending push
pub trait TraversalStrategy {
    /// The explicit work-list driving the traversal.
    type Frontier: Frontier;

    /// Which user-facing algorithm this strategy implements.
    const ALGORITHM: Algorithm;

    /// Orders the unvisited neighbors of the node being expanded, in push order.
    fn order_neighbors(neighbors: &mut [NodeId]);
}
