use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::{graph::NodeId, sets::frontier::Frontier};

/// A FIFO (First-In-First-Out) work-list with deduplication.
///
/// Ids leave in the order they were pushed. Pushing an id that is already
/// queued keeps its original position: the queue never holds an id twice.
pub struct FifoSet {
    queue: VecDeque<NodeId>,
    members: HashSet<NodeId>,
}

impl Frontier for FifoSet {
    fn new() -> Self {
        FifoSet {
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    fn push(&mut self, id: NodeId) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.queue.push_back(id);
        true
    }

    fn pop(&mut self) -> Option<NodeId> {
        let id = self.queue.pop_front()?;
        self.members.remove(&id);
        Some(id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn to_vec(&self) -> Vec<NodeId> {
        self.queue.iter().copied().collect()
    }
}

impl Default for FifoSet {
    fn default() -> Self {
        <Self as Frontier>::new()
    }
}

impl std::fmt::Debug for FifoSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FifoSet")
            .field("queue", &self.queue)
            .finish()
    }
}
