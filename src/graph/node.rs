use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a node for the lifetime of its graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId {
    pub internal: usize,
}

impl NodeId {
    pub const fn new(internal: usize) -> Self {
        NodeId { internal }
    }
}

impl From<usize> for NodeId {
    fn from(internal: usize) -> Self {
        NodeId { internal }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.internal)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.internal)
    }
}

/// A labelled graph vertex with a canvas position.
///
/// Positions are a presentation concern only: no traversal ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: usize, label: impl Into<String>, x: f64, y: f64) -> Self {
        Node {
            id: NodeId::new(id),
            label: label.into(),
            x,
            y,
        }
    }

    /// Case-insensitive label comparison, the rule used for duplicate detection.
    pub fn has_label(&self, label: &str) -> bool {
        self.label.to_lowercase() == label.trim().to_lowercase()
    }
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Edge {
            from: NodeId::new(from),
            to: NodeId::new(to),
        }
    }

    /// True when `self` links the same two endpoints as `other`, in either direction.
    pub fn same_pair(&self, other: &Edge) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.from == id || self.to == id
    }
}
