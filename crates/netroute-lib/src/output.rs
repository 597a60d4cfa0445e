use std::collections::HashSet;
use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Distance, Graph, NodeId};
use crate::routing::{RoutePlan, RunResult};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Node visited while following a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub node: NodeId,
    /// Distance of the edge that led here; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_distance: Option<Distance>,
    pub cumulative: Distance,
}

/// Structured route answer handed to renderers and serialised by the CLI.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub source: NodeId,
    pub target: NodeId,
    pub max_distance: Distance,
    pub reachable: bool,
    pub total_distance: Option<Distance>,
    pub hops: usize,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Resolve per-hop distances for a plan against the graph it came from.
    ///
    /// Fails if a hop is not an edge of `graph` within the plan's limit.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let mut steps = Vec::with_capacity(plan.path.len());
        let mut cumulative: Distance = 0;

        for (index, &node) in plan.path.iter().enumerate() {
            let hop_distance = match index.checked_sub(1).map(|prev| plan.path[prev]) {
                Some(from) => {
                    let distance = graph
                        .edge_distance(from, node)
                        .filter(|distance| *distance <= plan.max_distance)
                        .ok_or(Error::HopNotInGraph {
                            from,
                            to: node,
                            max_distance: plan.max_distance,
                        })?;
                    cumulative += distance;
                    Some(distance)
                }
                None => None,
            };
            steps.push(RouteStep {
                index,
                node,
                hop_distance,
                cumulative,
            });
        }

        Ok(Self {
            source: plan.source,
            target: plan.target,
            max_distance: plan.max_distance,
            reachable: plan.reachable,
            total_distance: plan.total_distance,
            hops: plan.hop_count(),
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        if !self.reachable {
            return self.render_no_route(mode);
        }
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_no_route(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => format!(
                "No route: {} -> {} using edges of at most {}\n",
                self.source, self.target, self.max_distance
            ),
            RouteRenderMode::RichText => format!(
                "**No route** _{} → {}_ (max edge distance `{}`)\n",
                self.source, self.target, self.max_distance
            ),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, max edge distance: {})",
            self.source, self.target, self.hops, self.max_distance
        );
        for step in &self.steps {
            match step.hop_distance {
                Some(hop) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} (+{}, total {})",
                        step.index, step.node, hop, step.cumulative
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.node);
                }
            }
        }
        if let Some(total) = self.total_distance {
            let _ = writeln!(buffer, "Total distance: {total}");
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, max edge distance `{}`)",
            self.source, self.target, self.hops, self.max_distance
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index, step.node, step.cumulative
            );
        }
        if let Some(total) = self.total_distance {
            let _ = writeln!(buffer, "\n**Total distance:** {total}");
        }
        buffer
    }
}

/// Tabulate every node's distance and path from a solver run.
pub fn render_run(result: &RunResult) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Shortest paths from {} (max edge distance: {}):",
        result.source, result.max_distance
    );
    let _ = writeln!(buffer, "{:>6} {:>9}  path", "node", "distance");
    for (node, distance) in result.distances.as_slice().iter().enumerate() {
        match distance {
            Some(distance) => {
                let path = result
                    .path_to(node)
                    .iter()
                    .map(NodeId::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                let _ = writeln!(buffer, "{node:>6} {distance:>9}  {path}");
            }
            None => {
                let _ = writeln!(buffer, "{node:>6} {:>9}  unreachable", "-");
            }
        }
    }
    buffer
}

/// Graphviz DOT view of the whole graph with the route highlighted.
///
/// Route nodes and edges are red, other nodes light blue, and edges longer
/// than the limit are dashed. Every edge is labelled with its distance.
pub fn render_dot(graph: &Graph, summary: &RouteSummary) -> String {
    let route_nodes: HashSet<NodeId> = summary.steps.iter().map(|step| step.node).collect();
    let route_edges: HashSet<(NodeId, NodeId)> = summary
        .steps
        .windows(2)
        .map(|pair| undirected(pair[0].node, pair[1].node))
        .collect();

    let mut buffer = String::new();
    let _ = writeln!(buffer, "graph route {{");
    let _ = writeln!(buffer, "  node [shape=circle, style=filled, fillcolor=lightblue];");
    for node in graph.nodes() {
        if route_nodes.contains(&node) {
            let _ = writeln!(buffer, "  {node} [fillcolor=red];");
        } else {
            let _ = writeln!(buffer, "  {node};");
        }
    }
    for edge in graph.edges() {
        let mut attributes = vec![format!("label=\"{}\"", edge.distance)];
        if route_edges.contains(&undirected(edge.source, edge.target)) {
            attributes.push("color=red".to_string());
            attributes.push("penwidth=2".to_string());
        } else if edge.distance > summary.max_distance {
            attributes.push("style=dashed".to_string());
        }
        let _ = writeln!(
            buffer,
            "  {} -- {} [{}];",
            edge.source,
            edge.target,
            attributes.join(", ")
        );
    }
    let _ = writeln!(buffer, "}}");
    buffer
}

fn undirected(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    (a.min(b), a.max(b))
}
