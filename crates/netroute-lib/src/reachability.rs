use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::{Distance, Graph, NodeId};

/// Report whether `target` can be reached from `source` using only edges whose
/// distance does not exceed `limit`.
///
/// Breadth-first search that ignores weights beyond the threshold check, so it
/// is cheaper than [`crate::shortest_paths`] and callers can skip the solver
/// whenever it answers `false`. Both nodes are validated before traversal.
pub fn is_reachable(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    limit: Distance,
) -> Result<bool> {
    graph.require_node(source)?;
    graph.require_node(target)?;

    if source == target {
        return Ok(true);
    }

    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    let mut expanded = 0usize;
    while let Some(current) = queue.pop_front() {
        if current == target {
            tracing::debug!(source, target, limit, expanded, "target reachable");
            return Ok(true);
        }
        expanded += 1;

        for edge in graph.neighbours(current) {
            if edge.distance > limit || visited[edge.target] {
                continue;
            }
            visited[edge.target] = true;
            queue.push_back(edge.target);
        }
    }

    tracing::debug!(source, target, limit, expanded, "target unreachable");
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::EdgeSpec;

    fn chain() -> Graph {
        Graph::build(
            4,
            [(0, 1, 2), (1, 2, 7), (2, 3, 1)]
                .into_iter()
                .map(|(u, v, d): (NodeId, NodeId, i64)| EdgeSpec::new(u, v, d)),
        )
        .expect("valid graph")
    }

    #[test]
    fn long_edge_blocks_the_chain() {
        let graph = chain();
        assert!(is_reachable(&graph, 0, 3, 7).unwrap());
        assert!(!is_reachable(&graph, 0, 3, 6).unwrap());
        assert!(is_reachable(&graph, 2, 3, 1).unwrap());
    }

    #[test]
    fn edge_at_the_limit_is_usable() {
        let graph = chain();
        assert!(is_reachable(&graph, 0, 1, 2).unwrap());
        assert!(!is_reachable(&graph, 0, 1, 1).unwrap());
    }

    #[test]
    fn same_node_is_trivially_reachable() {
        let graph = chain();
        assert!(is_reachable(&graph, 3, 3, 0).unwrap());
    }

    #[test]
    fn isolated_node_is_unreachable() {
        let graph = Graph::build(3, [EdgeSpec::new(0, 1, 1)]).expect("valid graph");
        assert!(!is_reachable(&graph, 0, 2, 100).unwrap());
    }

    #[test]
    fn unknown_target_is_an_error() {
        let graph = chain();
        let error = is_reachable(&graph, 0, 9, 5).expect_err("unknown target");
        assert!(matches!(error, Error::UnknownNode { node: 9, node_count: 4 }));
    }
}
