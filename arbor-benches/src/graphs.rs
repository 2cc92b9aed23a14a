//! Seeded synthetic graphs for benchmarking.
//!
//! Every graph is connected: a random spanning tree is laid down first and
//! `density` extra random edges per node are added on top. Extra edges may
//! repeat an existing pair or form self-loops, which both engines must
//! tolerate anyway.

use std::num::NonZeroUsize;

use arbor_core::{Edge, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for [`generate_graph`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Identifier stamped on the graph.
    pub id: i64,
    /// Number of nodes.
    pub node_count: usize,
    /// Extra random edges per node.
    pub density: usize,
    /// Inclusive lower weight bound.
    pub min_weight: i64,
    /// Inclusive upper weight bound.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// A config with weights in `1..=1000`.
    #[must_use]
    pub const fn new(id: i64, node_count: usize, density: usize, seed: u64) -> Self {
        Self {
            id,
            node_count,
            density,
            min_weight: 1,
            max_weight: 1_000,
            seed,
        }
    }
}

fn label(index: usize) -> String {
    format!("v{index}")
}

/// Generates a connected graph from `config`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for zero nodes and
/// [`BenchSetupError::EmptyWeightRange`] when `min_weight > max_weight`.
///
/// # Examples
/// ```
/// use arbor_benches::graphs::{SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig::new(1, 50, 2, 7))
///     .expect("config is valid");
/// assert_eq!(graph.node_count(), 50);
/// assert_eq!(graph.edge_count(), 49 + 100);
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    let node_count = NonZeroUsize::new(config.node_count).ok_or(BenchSetupError::ZeroValue {
        context: "node_count",
    })?;
    if config.min_weight > config.max_weight {
        return Err(BenchSetupError::EmptyWeightRange {
            min: config.min_weight,
            max: config.max_weight,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let weights = config.min_weight..=config.max_weight;
    let n = node_count.get();
    let extra = n.saturating_mul(config.density);
    let mut edges = Vec::with_capacity(n.saturating_sub(1).saturating_add(extra));

    for node in 1..n {
        let parent = rng.gen_range(0..node);
        edges.push(Edge::new(
            label(parent),
            label(node),
            rng.gen_range(weights.clone()),
        ));
    }
    for _ in 0..extra {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        edges.push(Edge::new(label(a), label(b), rng.gen_range(weights.clone())));
    }

    Ok(Graph::new(config.id, (0..n).map(label).collect(), edges))
}

/// Generates `count` graphs with ids `0..count` and consecutive seeds.
///
/// # Errors
/// Propagates [`generate_graph`] failures.
pub fn generate_batch(
    count: usize,
    node_count: usize,
    density: usize,
    seed: u64,
) -> Result<Vec<Graph>, BenchSetupError> {
    (0..count)
        .map(|offset| {
            let id = i64::try_from(offset).unwrap_or(i64::MAX);
            let seed = seed.wrapping_add(u64::try_from(offset).unwrap_or(u64::MAX));
            generate_graph(&SyntheticGraphConfig::new(id, node_count, density, seed))
        })
        .collect()
}
