use thiserror::Error;

use crate::graph::{Distance, NodeId};

/// Convenient result alias for the netroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied node count or edge list does not describe a valid graph.
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraph),

    /// Raised when a run names a node that is not part of the graph.
    #[error("unknown node {node}; graph has {node_count} nodes{}", format_range(.node_count))]
    UnknownNode { node: NodeId, node_count: usize },

    /// Raised when a route names a hop the graph cannot travel under the limit.
    #[error("route hop {from} -> {to} is not an edge within distance {max_distance}")]
    HopNotInGraph {
        from: NodeId,
        to: NodeId,
        max_distance: Distance,
    },

    /// Raised when random graph parameters cannot be satisfied.
    #[error("invalid generator configuration: {message}")]
    InvalidGeneratorConfig { message: String },

    /// Graph document could not be parsed or written.
    #[error("malformed graph document: {0}")]
    GraphDocument(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons a graph is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGraph {
    /// An edge endpoint lies outside `[0, node_count)`.
    #[error("edge #{index} ({source_node}-{target_node}) references node {node} outside [0, {node_count})")]
    NodeOutOfRange {
        index: usize,
        source_node: NodeId,
        target_node: NodeId,
        node: NodeId,
        node_count: usize,
    },

    /// Edge distances must be positive integers.
    #[error("edge #{index} ({source_node}-{target_node}) has non-positive distance {distance}")]
    NonPositiveDistance {
        index: usize,
        source_node: NodeId,
        target_node: NodeId,
        distance: i64,
    },

    /// The same undirected edge was supplied more than once.
    #[error("edge #{index} duplicates edge {source_node}-{target_node}")]
    DuplicateEdge {
        index: usize,
        source_node: NodeId,
        target_node: NodeId,
    },
}

fn format_range(node_count: &usize) -> String {
    match *node_count {
        0 => String::new(),
        1 => " (valid node: 0)".to_string(),
        n => format!(" (valid nodes: 0..={})", n - 1),
    }
}
