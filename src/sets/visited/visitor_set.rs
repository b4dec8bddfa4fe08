use crate::graph::NodeId;

pub trait VisitorSet {
    fn get(&self, id: NodeId) -> bool;
    fn set(&mut self, id: NodeId);
}
