//! Demo command: route across a small random classroom graph.

use anyhow::{Context, Result};
use clap::Args;

use netroute_lib::{
    generate_graph, plan_route, Distance, RandomGraphConfig, RouteRequest, RouteSummary,
};

use netroute_cli::output::OutputFormat;

/// Arguments for the demo command.
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Seed for a reproducible graph.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Largest edge distance the route may use.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_distance: Distance,
}

/// Handle the `demo` subcommand: lowest node to highest node.
pub fn handle_demo(args: &DemoArgs, format: OutputFormat) -> Result<()> {
    let config = RandomGraphConfig::classroom(args.seed);
    let graph = generate_graph(&config).context("failed to generate demo graph")?;
    let source = 0;
    let target = graph.node_count().saturating_sub(1);
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generated demo graph"
    );

    let plan = plan_route(&graph, &RouteRequest::new(source, target, args.max_distance))?;
    let summary = RouteSummary::from_plan(&graph, &plan)?;

    if matches!(format, OutputFormat::Text | OutputFormat::Rich) {
        println!(
            "Graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        println!("Start node {source}");
        println!("End node {target}");
        if plan.reachable {
            println!("Journey possible with edges of at most {}", args.max_distance);
        }
        println!();
    }
    format.render_route(&graph, &summary)
}
