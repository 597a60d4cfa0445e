use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Distance, Graph, NodeId};
use crate::path::path_distance;
use crate::reachability::is_reachable;
use crate::solver::{shortest_paths, DistanceTable, PredecessorTable};

/// Everything one solver run knows about a source: both tables plus the
/// reconstructed path to every reachable node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub source: NodeId,
    pub max_distance: Distance,
    pub distances: DistanceTable,
    pub predecessors: PredecessorTable,
    pub paths: BTreeMap<NodeId, Vec<NodeId>>,
}

impl RunResult {
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node)
    }

    /// Path from the source to `node`; empty when `node` is unreachable.
    pub fn path_to(&self, node: NodeId) -> &[NodeId] {
        self.paths.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn reachable_count(&self) -> usize {
        self.paths.len()
    }
}

/// Run the constrained solver from `source` and package its output.
pub fn assemble(graph: &Graph, source: NodeId, max_distance: Distance) -> Result<RunResult> {
    let run = shortest_paths(graph, source, max_distance)?;
    let paths = run
        .distances()
        .reached()
        .map(|(node, _)| (node, run.path_to(node)))
        .collect();
    let (distances, predecessors) = run.into_tables();

    Ok(RunResult {
        source,
        max_distance,
        distances,
        predecessors,
        paths,
    })
}

/// Source, target, and per-edge distance cap for one route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub source: NodeId,
    pub target: NodeId,
    pub max_distance: Distance,
}

impl RouteRequest {
    pub fn new(source: NodeId, target: NodeId, max_distance: Distance) -> Self {
        Self {
            source,
            target,
            max_distance,
        }
    }
}

/// Answer to a [`RouteRequest`].
///
/// An unreachable target is a normal outcome: `reachable` is `false`,
/// `total_distance` is `None`, and `path` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub source: NodeId,
    pub target: NodeId,
    pub max_distance: Distance,
    pub reachable: bool,
    pub total_distance: Option<Distance>,
    pub path: Vec<NodeId>,
    /// Full solver output; absent when the reachability check ruled the
    /// target out and the solver was skipped.
    #[serde(skip_serializing)]
    pub run: Option<RunResult>,
}

impl RoutePlan {
    fn unreachable(request: &RouteRequest) -> Self {
        Self {
            source: request.source,
            target: request.target,
            max_distance: request.max_distance,
            reachable: false,
            total_distance: None,
            path: Vec::new(),
            run: None,
        }
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Check feasibility, then solve and extract the route to the target.
///
/// The solver only runs when the breadth-first check finds the target
/// reachable under the limit.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    graph.require_node(request.source)?;
    graph.require_node(request.target)?;

    if !is_reachable(graph, request.source, request.target, request.max_distance)? {
        tracing::info!(
            source = request.source,
            target = request.target,
            max_distance = request.max_distance,
            "no route under distance limit; solver skipped"
        );
        return Ok(RoutePlan::unreachable(request));
    }

    let run = assemble(graph, request.source, request.max_distance)?;
    let total_distance = run.distance(request.target);
    let path = run.path_to(request.target).to_vec();
    debug_assert!(
        total_distance.is_some(),
        "solver must reach every target the reachability check accepts"
    );
    debug_assert_eq!(
        path_distance(graph, &path, request.max_distance),
        total_distance,
        "reconstructed path must add up to the solver distance"
    );

    Ok(RoutePlan {
        source: request.source,
        target: request.target,
        max_distance: request.max_distance,
        reachable: true,
        total_distance,
        path,
        run: Some(run),
    })
}
