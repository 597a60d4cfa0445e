// CLI subcommand handlers. main.rs parses arguments and dispatches here.

pub mod demo;
pub mod generate;
pub mod paths;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use netroute_lib::Graph;

/// Load the graph named by `--graph` / `NETROUTE_GRAPH`.
pub fn load_graph_arg(path: Option<&Path>) -> Result<Graph> {
    let path = path.context("no graph given; pass --graph <FILE> or set NETROUTE_GRAPH")?;
    netroute_lib::load_graph(path)
        .with_context(|| format!("failed to load graph from {}", path.display()))
}
