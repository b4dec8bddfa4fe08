use hashbrown::HashSet;

use crate::{graph::NodeId, sets::frontier::Frontier};

/// A LIFO (Last-In-First-Out) work-list with deduplication.
///
/// Pushing an id that is already on the stack is a no-op, so the stack never
/// holds an id twice and the id keeps its deeper position.
pub struct StackSet {
    stack: Vec<NodeId>,
    members: HashSet<NodeId>,
}

impl Frontier for StackSet {
    fn new() -> Self {
        StackSet {
            stack: Vec::new(),
            members: HashSet::new(),
        }
    }

    fn push(&mut self, id: NodeId) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.stack.push(id);
        true
    }

    fn pop(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.members.remove(&id);
        Some(id)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn to_vec(&self) -> Vec<NodeId> {
        self.stack.clone()
    }
}

impl Default for StackSet {
    fn default() -> Self {
        <Self as Frontier>::new()
    }
}

impl std::fmt::Debug for StackSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackSet")
            .field("stack", &self.stack)
            .finish()
    }
}
