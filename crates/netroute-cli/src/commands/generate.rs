//! Generate command handler for writing random graph documents.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use netroute_lib::generator::{DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE};
use netroute_lib::{generate_graph, save_graph, Distance, GraphSpec, RandomGraphConfig};

/// Arguments for the generate command.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,
    /// Number of undirected edges.
    #[arg(long)]
    pub edges: usize,
    /// Smallest edge distance.
    #[arg(long, default_value_t = DEFAULT_MIN_DISTANCE)]
    pub min_distance: Distance,
    /// Largest edge distance.
    #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: Distance,
    /// Seed for reproducible graphs.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write the document here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    fn to_config(&self) -> RandomGraphConfig {
        let config = RandomGraphConfig::new(self.nodes, self.edges)
            .with_distance_range(self.min_distance, self.max_distance);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Handle the `generate` subcommand.
pub fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let graph = generate_graph(&args.to_config()).context("failed to generate graph")?;

    match &args.output {
        Some(path) => {
            save_graph(&graph, path)
                .with_context(|| format!("failed to write graph to {}", path.display()))?;
            tracing::info!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "graph written to {}",
                path.display()
            );
        }
        None => println!("{}", GraphSpec::from(&graph).to_json_pretty()?),
    }

    Ok(())
}
