//! JSON graph documents: the on-disk form of the input boundary.
//!
//! ```json
//! {"nodes": 4, "edges": [{"source": 0, "target": 1, "distance": 4}]}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{EdgeSpec, Graph};

/// Node count plus edge list, exactly as handed over by a graph producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: usize,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    /// Validate the document and build the immutable graph.
    pub fn build(&self) -> Result<Graph> {
        Graph::build(self.nodes, self.edges.iter().copied())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Graph> for GraphSpec {
    fn from(graph: &Graph) -> Self {
        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeSpec {
                source: edge.source,
                target: edge.target,
                distance: i64::try_from(edge.distance).unwrap_or(i64::MAX),
            })
            .collect();

        Self {
            nodes: graph.node_count(),
            edges,
        }
    }
}

/// Read, parse, and validate a graph document from disk.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let contents = fs::read_to_string(path)?;
    let graph = GraphSpec::from_json(&contents)?.build()?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph document"
    );
    Ok(graph)
}

/// Write a graph back out as a pretty-printed document.
pub fn save_graph(graph: &Graph, path: &Path) -> Result<()> {
    let json = GraphSpec::from(graph).to_json_pretty()?;
    fs::write(path, json + "\n")?;
    Ok(())
}
