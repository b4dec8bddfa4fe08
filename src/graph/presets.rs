use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Edge, Graph, Node};

/// The canonical nine-node example graph, labelled A through I.
///
/// ```text
///         A
///       /   \
///      B     C
///     / \   / \
///    D   E-F   G
///     \ /   \ /
///      H     I
/// ```
pub fn generate_default() -> Graph {
    let nodes = vec![
        Node::new(0, "A", 300.0, 80.0),
        Node::new(1, "B", 200.0, 160.0),
        Node::new(2, "C", 400.0, 160.0),
        Node::new(3, "D", 120.0, 240.0),
        Node::new(4, "E", 280.0, 240.0),
        Node::new(5, "F", 360.0, 240.0),
        Node::new(6, "G", 480.0, 240.0),
        Node::new(7, "H", 200.0, 320.0),
        Node::new(8, "I", 400.0, 320.0),
    ];

    let edges = vec![
        Edge::new(0, 1),
        Edge::new(0, 2),
        Edge::new(1, 3),
        Edge::new(1, 4),
        Edge::new(2, 5),
        Edge::new(2, 6),
        Edge::new(3, 7),
        Edge::new(4, 7),
        Edge::new(5, 8),
        Edge::new(6, 8),
        Edge::new(4, 5),
    ];

    Graph::new(nodes, edges)
}

/// Small example graphs a user can load into the builder as a starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Simple,
    Tree,
    Cycle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset `{0}` (expected one of: simple, tree, cycle)")]
pub struct ParsePresetError(pub String);

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Simple, Preset::Tree, Preset::Cycle];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Simple => "simple",
            Preset::Tree => "tree",
            Preset::Cycle => "cycle",
        }
    }

    /// Nodes and edges of the preset, with hand-placed positions.
    pub fn contents(self) -> (Vec<Node>, Vec<Edge>) {
        match self {
            Preset::Simple => (
                vec![
                    Node::new(0, "A", 300.0, 200.0),
                    Node::new(1, "B", 500.0, 200.0),
                    Node::new(2, "C", 400.0, 300.0),
                ],
                vec![Edge::new(0, 1), Edge::new(1, 2)],
            ),
            Preset::Tree => (
                vec![
                    Node::new(0, "Root", 300.0, 50.0),
                    Node::new(1, "L1", 200.0, 100.0),
                    Node::new(2, "R1", 400.0, 100.0),
                    Node::new(3, "L2", 150.0, 150.0),
                    Node::new(4, "R2", 350.0, 150.0),
                ],
                vec![
                    Edge::new(0, 1),
                    Edge::new(0, 2),
                    Edge::new(1, 3),
                    Edge::new(1, 4),
                ],
            ),
            Preset::Cycle => (
                vec![
                    Node::new(0, "A", 300.0, 100.0),
                    Node::new(1, "B", 500.0, 100.0),
                    Node::new(2, "C", 400.0, 200.0),
                    Node::new(3, "D", 300.0, 200.0),
                ],
                vec![
                    Edge::new(0, 1),
                    Edge::new(1, 2),
                    Edge::new(2, 3),
                    Edge::new(3, 0),
                ],
            ),
        }
    }

    pub fn graph(self) -> Graph {
        let (nodes, edges) = self.contents();
        Graph::new(nodes, edges)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePresetError(s.to_string()))
    }
}
