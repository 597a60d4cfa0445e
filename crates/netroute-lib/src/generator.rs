//! Synthetic input: uniform random `G(n, m)` graphs with random integer
//! edge distances.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::graph::{Distance, EdgeSpec, Graph, NodeId};

pub const DEFAULT_MIN_DISTANCE: Distance = 1;
pub const DEFAULT_MAX_DISTANCE: Distance = 12;

/// Node count range used by [`RandomGraphConfig::classroom`].
const CLASSROOM_NODES: std::ops::RangeInclusive<usize> = 4..=15;

/// Parameters for [`generate_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphConfig {
    pub nodes: usize,
    pub edges: usize,
    pub min_distance: Distance,
    pub max_distance: Distance,
    /// Fixed seed for reproducible graphs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl RandomGraphConfig {
    pub fn new(nodes: usize, edges: usize) -> Self {
        Self {
            nodes,
            edges,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_distance_range(mut self, min: Distance, max: Distance) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Small random graph: 4 to 15 nodes and between `nodes` and
    /// `nodes * (nodes - 1) / 2` edges.
    ///
    /// A given seed fixes both the shape and the edges: the graph seed is
    /// drawn from the same generator that picked the node and edge counts.
    pub fn classroom(seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let nodes = rng.gen_range(CLASSROOM_NODES);
        let edges = rng.gen_range(nodes..=max_edges(nodes));
        let graph_seed = seed.map(|_| rng.gen());
        Self {
            seed: graph_seed,
            ..Self::new(nodes, edges)
        }
    }

    fn validate(&self) -> Result<()> {
        let limit = max_edges(self.nodes);
        if self.edges > limit {
            return Err(invalid(format!(
                "{} edges requested but {} nodes allow at most {}",
                self.edges, self.nodes, limit
            )));
        }
        if self.min_distance == 0 {
            return Err(invalid("minimum edge distance must be at least 1".to_string()));
        }
        if self.min_distance > self.max_distance {
            return Err(invalid(format!(
                "minimum edge distance {} exceeds maximum {}",
                self.min_distance, self.max_distance
            )));
        }
        if i64::try_from(self.max_distance).is_err() {
            return Err(invalid(format!(
                "maximum edge distance {} is too large",
                self.max_distance
            )));
        }
        Ok(())
    }
}

/// Largest number of distinct undirected edges without self-loops.
pub fn max_edges(nodes: usize) -> usize {
    nodes.saturating_mul(nodes.saturating_sub(1)) / 2
}

/// Generate a graph with exactly `config.edges` distinct edges chosen
/// uniformly among all node pairs.
pub fn generate_graph(config: &RandomGraphConfig) -> Result<Graph> {
    config.validate()?;

    let mut rng = seeded_rng(config.seed);
    let mut chosen =
        index::sample(&mut rng, max_edges(config.nodes), config.edges).into_vec();
    chosen.sort_unstable();

    let edges: Vec<EdgeSpec> = decode_pairs(config.nodes, &chosen)
        .into_iter()
        .map(|(source, target)| {
            let distance = rng.gen_range(config.min_distance..=config.max_distance);
            EdgeSpec::new(source, target, i64::try_from(distance).unwrap_or(i64::MAX))
        })
        .collect();

    tracing::debug!(
        nodes = config.nodes,
        edges = edges.len(),
        seed = ?config.seed,
        "generated random graph"
    );

    Graph::build(config.nodes, edges)
}

/// Map sorted indices into the row-major list of pairs `(u, v)` with `u < v`
/// without materialising that list.
fn decode_pairs(nodes: usize, sorted: &[usize]) -> Vec<(NodeId, NodeId)> {
    let mut pairs = Vec::with_capacity(sorted.len());
    let mut row = 0;
    let mut row_start = 0;
    for &index in sorted {
        while index >= row_start + (nodes - 1 - row) {
            row_start += nodes - 1 - row;
            row += 1;
        }
        pairs.push((row, row + 1 + (index - row_start)));
    }
    pairs
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidGeneratorConfig { message }
}
