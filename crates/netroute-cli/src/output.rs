//! Output formatting for route rendering.
//!
//! The text formatter is CLI-specific (colored route nodes); rich text, DOT,
//! and the path table come from the library renderers.

use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use netroute_lib::{render_dot, Graph, RouteRenderMode, RouteSummary, RunResult};

use crate::terminal::ColorPalette;

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly listing with the route highlighted.
    #[default]
    Text,
    /// Markdown suitable for notes and chat.
    Rich,
    /// Pretty-printed JSON for other programs.
    Json,
    /// Graphviz DOT of the whole graph with the route highlighted.
    Dot,
}

impl OutputFormat {
    /// Print a route summary; `graph` is only consulted by the DOT view.
    pub fn render_route(self, graph: &Graph, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => print!("{}", format_route_text(summary, &ColorPalette::detect())),
            OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
            OutputFormat::Json => render_json(summary)?,
            OutputFormat::Dot => print!("{}", render_dot(graph, summary)),
        }
        Ok(())
    }

    /// Print the distance table and paths of a full solver run.
    pub fn render_run(self, result: &RunResult) -> Result<()> {
        match self {
            OutputFormat::Text | OutputFormat::Rich => print!("{}", netroute_lib::render_run(result)),
            OutputFormat::Json => render_json(result)?,
            OutputFormat::Dot => {
                anyhow::bail!("--format dot needs a single route; use the route command instead")
            }
        }
        Ok(())
    }
}

/// Write any serialisable value to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Format a route summary as text, painting route nodes with the palette.
pub fn format_route_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let mut buffer = String::new();

    if !summary.reachable {
        let _ = writeln!(
            buffer,
            "No route from {n}{}{r} to {n}{}{r} using edges of at most {}.",
            summary.source,
            summary.target,
            summary.max_distance,
            n = palette.node,
            r = palette.reset,
        );
        let _ = writeln!(
            buffer,
            "{}Try increasing --max-distance.{}",
            palette.gray, palette.reset
        );
        return buffer;
    }

    let _ = writeln!(
        buffer,
        "{}Route from {} to {} ({} hops; max edge distance: {}):{}",
        palette.white_bold,
        summary.source,
        summary.target,
        summary.hops,
        summary.max_distance,
        palette.reset
    );
    for step in &summary.steps {
        let _ = write!(buffer, " - {}{}{}", palette.route, step.node, palette.reset);
        if let Some(hop) = step.hop_distance {
            let _ = write!(
                buffer,
                " {}(+{} = {}){}",
                palette.gray, hop, step.cumulative, palette.reset
            );
        }
        buffer.push('\n');
    }
    if let Some(total) = summary.total_distance {
        let _ = writeln!(buffer, "\nTotal distance: {total}");
    }

    buffer
}
