//! Paths command handler: every shortest path from one source.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use netroute_lib::{assemble, Distance, NodeId};

use super::load_graph_arg;
use netroute_cli::output::OutputFormat;

/// Arguments for the paths command.
#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Source node.
    #[arg(long = "from")]
    pub from: NodeId,
    /// Largest edge distance a path may use.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_distance: Distance,
}

/// Handle the `paths` subcommand.
pub fn handle_paths(args: &PathsArgs, format: OutputFormat, graph: Option<&Path>) -> Result<()> {
    let graph = load_graph_arg(graph)?;
    let result = assemble(&graph, args.from, args.max_distance)
        .with_context(|| format!("cannot compute paths from {}", args.from))?;
    format.render_run(&result)
}
