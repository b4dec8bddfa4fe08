use crate::graph::NodeId;

/// A traversal work-list of not-yet-processed node ids.
pub trait Frontier {
    /// Creates a new empty frontier.
    fn new() -> Self;

    /// Adds `id` unless it is already waiting in the frontier.
    ///
    /// # Returns
    /// `true` if the id was added, `false` if it was already present
    fn push(&mut self, id: NodeId) -> bool;

    /// Removes and returns the next id to process, or `None` when drained.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Waiting ids in storage order.
    ///
    /// For a stack this is bottom to top (the last entry pops next); for a
    /// queue it is front to back (the first entry pops next).
    fn to_vec(&self) -> Vec<NodeId>;
}
