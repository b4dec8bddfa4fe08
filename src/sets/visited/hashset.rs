use hashbrown::HashSet;

use crate::{graph::NodeId, sets::visited::VisitorSet};

/// Visited-node set backed by a hash set.
///
/// Node ids in user-built graphs are sparse after removals, so a hash set is
/// used rather than a dense bitmap.
///
/// # Examples
///
/// ```
/// use graphreel::graph::NodeId;
/// use graphreel::sets::visited::{HashVisitedSet, VisitorSet};
///
/// let mut visited = HashVisitedSet::new();
/// assert!(!visited.get(NodeId::new(3)));
///
/// visited.set(NodeId::new(3));
/// assert!(visited.get(NodeId::new(3)));
/// assert!(!visited.get(NodeId::new(4)));
/// ```
#[derive(Debug, Default, Clone)]
pub struct HashVisitedSet {
    members: HashSet<NodeId>,
}

impl HashVisitedSet {
    pub fn new() -> Self {
        HashVisitedSet {
            members: HashSet::new(),
        }
    }
}

impl VisitorSet for HashVisitedSet {
    fn get(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    fn set(&mut self, id: NodeId) {
        self.members.insert(id);
    }
}
