//! Dijkstra's algorithm restricted to edges no longer than a per-run limit.
//!
//! The frontier is a [`BinaryHeap`] without decrease-key: improved nodes are
//! pushed again and outdated entries are dropped when popped. Distances and
//! predecessors live together in [`ShortestPaths`] and are only ever changed
//! through a single update, so the two tables always agree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Distance, Graph, NodeId};
use crate::path::reconstruct_path;

/// Best known distance from the run's source per node; `None` means infinite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable(Vec<Option<Distance>>);

impl DistanceTable {
    fn unreached(node_count: usize) -> Self {
        Self(vec![None; node_count])
    }

    /// Distance to `node`, or `None` when unreached or not in the graph.
    pub fn get(&self, node: NodeId) -> Option<Distance> {
        self.0.get(node).copied().flatten()
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<Distance>] {
        &self.0
    }

    /// Reached nodes with their distances, in node order.
    pub fn reached(&self) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(node, distance)| distance.map(|d| (node, d)))
    }
}

/// Node preceding each node on its best known path; `None` for the source and
/// for unreached nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredecessorTable(Vec<Option<NodeId>>);

impl PredecessorTable {
    fn unset(node_count: usize) -> Self {
        Self(vec![None; node_count])
    }

    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        self.0.get(node).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<NodeId>] {
        &self.0
    }
}

/// Distance and predecessor tables produced by one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: NodeId,
    limit: Distance,
    distances: DistanceTable,
    predecessors: PredecessorTable,
}

impl ShortestPaths {
    fn new(node_count: usize, source: NodeId, limit: Distance) -> Self {
        let mut distances = DistanceTable::unreached(node_count);
        distances.0[source] = Some(0);
        Self {
            source,
            limit,
            distances,
            predecessors: PredecessorTable::unset(node_count),
        }
    }

    fn improve(&mut self, node: NodeId, distance: Distance, via: NodeId) {
        self.distances.0[node] = Some(distance);
        self.predecessors.0[node] = Some(via);
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Maximum single-edge distance the run was allowed to use.
    pub fn limit(&self) -> Distance {
        self.limit
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorTable {
        &self.predecessors
    }

    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node)
    }

    /// Path from the source to `node`; empty when `node` was not reached.
    pub fn path_to(&self, node: NodeId) -> Vec<NodeId> {
        reconstruct_path(&self.distances, &self.predecessors, node)
    }

    pub fn into_tables(self) -> (DistanceTable, PredecessorTable) {
        (self.distances, self.predecessors)
    }
}

/// Compute shortest distances from `source` to every node, using only edges
/// whose distance is at most `limit`.
///
/// Nodes that cannot be reached under the limit keep an infinite distance and
/// no predecessor. Fails only when `source` is not part of the graph.
pub fn shortest_paths(graph: &Graph, source: NodeId, limit: Distance) -> Result<ShortestPaths> {
    graph.require_node(source)?;

    let mut tables = ShortestPaths::new(graph.node_count(), source, limit);
    let mut frontier = BinaryHeap::new();
    frontier.push(QueueEntry::new(source, 0));

    let mut settled = 0usize;
    let mut stale = 0usize;

    while let Some(entry) = frontier.pop() {
        match tables.distance(entry.node) {
            Some(best) if entry.cost > best => {
                stale += 1;
                continue;
            }
            Some(_) => {}
            None => continue,
        }
        settled += 1;

        for edge in graph.neighbours(entry.node) {
            if edge.distance > limit {
                continue;
            }

            let candidate = entry.cost.saturating_add(edge.distance);
            let improves = match tables.distance(edge.target) {
                Some(known) => candidate < known,
                None => true,
            };
            if improves {
                tables.improve(edge.target, candidate, entry.node);
                frontier.push(QueueEntry::new(edge.target, candidate));
            }
        }
    }

    tracing::debug!(
        source,
        limit,
        settled,
        stale,
        reached = tables.distances.reached().count(),
        "constrained dijkstra finished"
    );

    Ok(tables)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: Distance,
}

impl QueueEntry {
    fn new(node: NodeId, cost: Distance) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
