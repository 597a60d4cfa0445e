use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidGraph, Result};

/// Dense node identifier in `0..node_count`.
pub type NodeId = usize;

/// Edge and path distance. Edges always carry a distance of at least one.
pub type Distance = u64;

/// Weighted undirected edge as supplied at the input boundary.
///
/// The distance is signed so that zero and negative values reach graph
/// validation and are reported as [`InvalidGraph::NonPositiveDistance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: NodeId,
    pub target: NodeId,
    pub distance: i64,
}

impl EdgeSpec {
    pub fn new(source: NodeId, target: NodeId, distance: i64) -> Self {
        Self {
            source,
            target,
            distance,
        }
    }

    fn validate(
        &self,
        index: usize,
        node_count: usize,
    ) -> std::result::Result<GraphEdge, InvalidGraph> {
        for node in [self.source, self.target] {
            if node >= node_count {
                return Err(InvalidGraph::NodeOutOfRange {
                    index,
                    source_node: self.source,
                    target_node: self.target,
                    node,
                    node_count,
                });
            }
        }

        let distance = match Distance::try_from(self.distance) {
            Ok(distance) if distance > 0 => distance,
            _ => {
                return Err(InvalidGraph::NonPositiveDistance {
                    index,
                    source_node: self.source,
                    target_node: self.target,
                    distance: self.distance,
                })
            }
        };

        Ok(GraphEdge {
            source: self.source,
            target: self.target,
            distance,
        })
    }
}

impl From<(NodeId, NodeId, i64)> for EdgeSpec {
    fn from((source, target, distance): (NodeId, NodeId, i64)) -> Self {
        Self::new(source, target, distance)
    }
}

/// Validated undirected edge stored by the graph, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub distance: Distance,
}

/// Half-edge seen from one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub distance: Distance,
}

/// Immutable weighted undirected graph.
///
/// Cloning is cheap; clones share the same adjacency, so one graph can back
/// any number of concurrent runs.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Arc<Vec<Vec<Edge>>>,
    edges: Arc<Vec<GraphEdge>>,
}

impl Graph {
    /// Build a graph over nodes `0..node_count` from a list of weighted edges.
    ///
    /// Every edge is validated before anything is stored: endpoints must be in
    /// range, distances must be positive, and an undirected edge may only be
    /// supplied once (`(u, v)` and `(v, u)` are the same edge).
    pub fn build<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
        let mut records = Vec::new();

        for (index, spec) in edges.into_iter().enumerate() {
            let edge = spec.validate(index, node_count)?;
            let key = (edge.source.min(edge.target), edge.source.max(edge.target));
            if !seen.insert(key) {
                return Err(InvalidGraph::DuplicateEdge {
                    index,
                    source_node: edge.source,
                    target_node: edge.target,
                }
                .into());
            }
            records.push(edge);
        }

        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); node_count];
        for edge in &records {
            adjacency[edge.source].push(Edge {
                target: edge.target,
                distance: edge.distance,
            });
            if edge.source != edge.target {
                adjacency[edge.target].push(Edge {
                    target: edge.source,
                    distance: edge.distance,
                });
            }
        }

        tracing::debug!(nodes = node_count, edges = records.len(), "built graph");

        Ok(Self {
            adjacency: Arc::new(adjacency),
            edges: Arc::new(records),
        })
    }

    /// Return the neighbours of a node, or an empty slice for unknown nodes.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn nodes(&self) -> Range<NodeId> {
        0..self.adjacency.len()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Fail with [`Error::UnknownNode`] unless `node` belongs to the graph.
    pub fn require_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::UnknownNode {
                node,
                node_count: self.node_count(),
            })
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in the order they were supplied at construction.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Distance of the edge joining `a` and `b`, if there is one.
    pub fn edge_distance(&self, a: NodeId, b: NodeId) -> Option<Distance> {
        self.neighbours(a)
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.distance)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            adjacency: Arc::new(Vec::new()),
            edges: Arc::new(Vec::new()),
        }
    }
}
