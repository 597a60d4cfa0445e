mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::demo::{handle_demo, DemoArgs};
use commands::generate::{handle_generate, GenerateArgs};
use commands::paths::{handle_paths, PathsArgs};
use commands::route::{handle_route, RouteArgs};
use netroute_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest paths over undirected graphs with a per-edge distance limit"
)]
struct Cli {
    /// Graph document to load.
    #[arg(long, global = true, env = "NETROUTE_GRAPH")]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a random graph document.
    Generate(GenerateArgs),
    /// Plan a route between two nodes.
    Route(RouteArgs),
    /// List shortest distances and paths from one node.
    Paths(PathsArgs),
    /// Route across a random classroom-sized graph.
    Demo(DemoArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = cli.graph.as_deref();

    match &cli.command {
        Command::Generate(args) => handle_generate(args),
        Command::Route(args) => handle_route(args, cli.format, graph),
        Command::Paths(args) => handle_paths(args, cli.format, graph),
        Command::Demo(args) => handle_demo(args, cli.format),
    }
}

// stdout carries JSON and DOT output, so logs go to stderr.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
