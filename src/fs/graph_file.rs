use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::graph::{Graph, GraphBuilder, ParsePresetError, Preset};

#[derive(Debug, Error)]
pub enum GraphFileError {
    #[error("cannot read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownPreset(#[from] ParsePresetError),

    #[error("graph file describes no nodes")]
    EmptyGraph,
}

/// User-authored graph description.
///
/// ```json
/// { "preset": "tree", "nodes": ["A", "B"], "edges": [["A", "B"]] }
/// ```
///
/// Every field is optional. A preset, when named, is loaded first and the
/// nodes and edges are added on top of it. Entries go through a
/// [`GraphBuilder`], so duplicate labels, repeated edges and edges naming
/// unknown labels are skipped rather than reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl GraphFile {
    pub fn from_json(json: &str) -> Result<Self, GraphFileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GraphFileError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading graph file");
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Lays the described graph out on a circle.
    pub fn build(&self) -> Result<Graph, GraphFileError> {
        let mut builder = GraphBuilder::with_seed(Some(0));
        if let Some(name) = &self.preset {
            builder.load_preset(name.parse::<Preset>()?);
        }
        let skipped_nodes = self
            .nodes
            .iter()
            .filter(|label| !builder.add_node(label).is_applied())
            .count();
        let skipped_edges = self
            .edges
            .iter()
            .filter(|(from, to)| !builder.add_edge(from, to).is_applied())
            .count();
        if skipped_nodes + skipped_edges > 0 {
            info!(skipped_nodes, skipped_edges, "graph file entries skipped");
        }
        builder.finalize().map_err(|_| GraphFileError::EmptyGraph)
    }
}

/// Reads and builds the graph described by a JSON file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, GraphFileError> {
    GraphFile::load(path)?.build()
}
