//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use netroute_lib::{EdgeSpec, Graph, NodeId};

/// Path to the fixtures directory shared by the workspace tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Six-node classroom graph; node 5 is only reachable over the 12-long edge 3-4.
#[allow(dead_code)]
pub fn classroom_fixture_path() -> PathBuf {
    fixtures_dir().join("classroom_graph.json")
}

/// Build a graph from `(u, v, distance)` triples, panicking on invalid input.
pub fn graph_from(node_count: usize, edges: &[(NodeId, NodeId, i64)]) -> Graph {
    Graph::build(node_count, edges.iter().copied().map(EdgeSpec::from)).expect("valid graph")
}

/// Four-node graph: (0,1,4), (1,2,3), (0,2,10), (2,3,1).
#[allow(dead_code)]
pub fn diamond() -> Graph {
    graph_from(4, &[(0, 1, 4), (1, 2, 3), (0, 2, 10), (2, 3, 1)])
}
