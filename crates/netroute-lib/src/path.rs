use crate::graph::{Distance, Graph, NodeId};
use crate::solver::{DistanceTable, PredecessorTable};

/// Walk predecessor links back from `target` and return the path in
/// source-to-target order.
///
/// Returns an empty path when `target` has an infinite distance. The walk never
/// takes more steps than there are nodes in the tables.
pub fn reconstruct_path(
    distances: &DistanceTable,
    predecessors: &PredecessorTable,
    target: NodeId,
) -> Vec<NodeId> {
    if !distances.is_reached(target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(previous) = predecessors.get(current) {
        if path.len() > predecessors.len() {
            tracing::warn!(target, "predecessor chain does not terminate");
            return Vec::new();
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Sum the edge distances along `path`.
///
/// Returns `None` for an empty path, when two consecutive nodes are not joined
/// by an edge, or when an edge is longer than `limit`.
pub fn path_distance(graph: &Graph, path: &[NodeId], limit: Distance) -> Option<Distance> {
    let first = *path.first()?;
    if !graph.contains(first) {
        return None;
    }

    path.windows(2).try_fold(0, |total: Distance, hop| {
        let distance = graph.edge_distance(hop[0], hop[1])?;
        (distance <= limit).then(|| total + distance)
    })
}
