use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    graph::Graph,
    traversal::{AlgorithmInfo, BreadthFirstSearch, DepthFirstSearch, Trace, run_traversal},
};

/// The traversal algorithms a user can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    DepthFirst,
    BreadthFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}` (expected dfs, bfs, depth-first or breadth-first)")]
pub struct ParseAlgorithmError(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::DepthFirst, Algorithm::BreadthFirst];

    /// Short name used in narration, e.g. `DFS`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DFS",
            Algorithm::BreadthFirst => "BFS",
        }
    }

    /// Name of the work-list the algorithm drives.
    pub fn frontier_name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "stack",
            Algorithm::BreadthFirst => "queue",
        }
    }

    /// Runs the algorithm once over `graph` and returns its full trace.
    pub fn run(self, graph: Arc<Graph>) -> Trace {
        match self {
            Algorithm::DepthFirst => run_traversal::<DepthFirstSearch>(graph),
            Algorithm::BreadthFirst => run_traversal::<BreadthFirstSearch>(graph),
        }
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        AlgorithmInfo::of(self)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => f.write_str("depth-first"),
            Algorithm::BreadthFirst => f.write_str("breadth-first"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" | "breadth_first" => Ok(Algorithm::BreadthFirst),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
