//! netroute library entry points.
//!
//! This crate builds immutable weighted graphs, answers "can `t` be reached
//! from `s` using only edges no longer than `L`?", and computes constrained
//! shortest paths with Dijkstra's algorithm. Higher-level consumers (the CLI,
//! renderers) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod document;
pub mod error;
pub mod generator;
pub mod graph;
pub mod output;
pub mod path;
pub mod reachability;
pub mod routing;
pub mod solver;

pub use document::{load_graph, save_graph, GraphSpec};
pub use error::{Error, InvalidGraph, Result};
pub use generator::{generate_graph, RandomGraphConfig};
pub use graph::{Distance, Edge, EdgeSpec, Graph, GraphEdge, NodeId};
pub use output::{render_dot, render_run, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{path_distance, reconstruct_path};
pub use reachability::is_reachable;
pub use routing::{assemble, plan_route, RoutePlan, RouteRequest, RunResult};
pub use solver::{shortest_paths, DistanceTable, PredecessorTable, ShortestPaths};
