//! Route command handler for a single source/target query.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use netroute_lib::{plan_route, Distance, NodeId, RouteRequest, RouteSummary};

use super::load_graph_arg;
use netroute_cli::output::OutputFormat;

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting node.
    #[arg(long = "from")]
    pub from: NodeId,
    /// Destination node.
    #[arg(long = "to")]
    pub to: NodeId,
    /// Largest edge distance a route may use.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_distance: Distance,
}

/// Handle the `route` subcommand. A missing route is reported, not an error.
pub fn handle_route(args: &RouteArgs, format: OutputFormat, graph: Option<&Path>) -> Result<()> {
    let graph = load_graph_arg(graph)?;
    let request = RouteRequest::new(args.from, args.to, args.max_distance);
    let plan = plan_route(&graph, &request)
        .with_context(|| format!("cannot route from {} to {}", args.from, args.to))?;
    let summary = RouteSummary::from_plan(&graph, &plan)?;
    format.render_route(&graph, &summary)
}
