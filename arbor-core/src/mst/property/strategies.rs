//! Graph generators for MST property tests.
//!
//! Every generator emits unique undirected endpoint pairs with random
//! orientation and shuffled declaration order, so the oracle's minimum weight
//! is well defined and engines cannot rely on a friendly input order.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Graph};

use super::types::{MstFixture, WeightDistribution};

const MIN_NODES: usize = 1;
const MAX_NODES: usize = 32;
const DENSE_MAX_NODES: usize = 16;

/// Samples a distribution and a seed, then builds the fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    let distribution = prop_oneof![
        1 => Just(WeightDistribution::Unique),
        2 => Just(WeightDistribution::ManyIdentical),
        1 => Just(WeightDistribution::Sparse),
        1 => Just(WeightDistribution::Dense),
        1 => Just(WeightDistribution::Disconnected),
    ];
    (distribution, any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Builds a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique(rng),
        WeightDistribution::ManyIdentical => {
            connected_fixture(rng, MAX_NODES, 0.3, distribution, |r| r.gen_range(1..=3))
        }
        WeightDistribution::Sparse => {
            connected_fixture(rng, MAX_NODES, 0.05, distribution, |r| r.gen_range(-50..=50))
        }
        WeightDistribution::Dense => {
            connected_fixture(rng, DENSE_MAX_NODES, 0.85, distribution, |r| {
                r.gen_range(0..=1_000)
            })
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn label(index: usize) -> String {
    format!("n{index}")
}

/// Collects unique undirected pairs for a graph under construction.
struct PairSet {
    pairs: Vec<(usize, usize)>,
    seen: HashSet<(usize, usize)>,
}

impl PairSet {
    fn new() -> Self {
        Self {
            pairs: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn insert(&mut self, a: usize, b: usize) {
        let key = (a.min(b), a.max(b));
        if a != b && self.seen.insert(key) {
            self.pairs.push((a, b));
        }
    }

    /// Adds a random spanning tree over `nodes`.
    fn spanning_tree(&mut self, rng: &mut SmallRng, nodes: &[usize]) {
        for (position, &node) in nodes.iter().enumerate().skip(1) {
            let parent = nodes[rng.gen_range(0..position)];
            self.insert(parent, node);
        }
    }

    /// Adds each remaining pair within `nodes` with probability `p`.
    fn sprinkle(&mut self, rng: &mut SmallRng, nodes: &[usize], p: f64) {
        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                if rng.gen_bool(p) {
                    self.insert(a, b);
                }
            }
        }
    }

    fn into_edges(
        self,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> i64,
    ) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .pairs
            .into_iter()
            .map(|(a, b)| {
                let w = weight(rng);
                if rng.gen_bool(0.5) {
                    Edge::new(label(a), label(b), w)
                } else {
                    Edge::new(label(b), label(a), w)
                }
            })
            .collect();
        edges.shuffle(rng);
        edges
    }
}

fn shuffled_nodes(rng: &mut SmallRng, count: usize) -> Vec<usize> {
    let mut nodes: Vec<usize> = (0..count).collect();
    nodes.shuffle(rng);
    nodes
}

fn connected_fixture(
    rng: &mut SmallRng,
    max_nodes: usize,
    extra_edge_probability: f64,
    distribution: WeightDistribution,
    weight: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let order = shuffled_nodes(rng, node_count);
    let mut pairs = PairSet::new();
    pairs.spanning_tree(rng, &order);
    pairs.sprinkle(rng, &order, extra_edge_probability);
    let edges = pairs.into_edges(rng, weight);

    MstFixture {
        graph: Graph::new(0, (0..node_count).map(label).collect(), edges),
        distribution,
        connected: true,
    }
}

fn generate_unique(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let order = shuffled_nodes(rng, node_count);
    let mut pairs = PairSet::new();
    pairs.spanning_tree(rng, &order);
    pairs.sprinkle(rng, &order, 0.2);

    let mut weights: Vec<i64> = (0..pairs.pairs.len())
        .map(|i| i64::try_from(i).unwrap_or(i64::MAX).saturating_mul(3) - 500)
        .collect();
    weights.shuffle(rng);
    let mut weights = weights.into_iter();
    let edges = pairs.into_edges(rng, |_| weights.next().unwrap_or_default());

    MstFixture {
        graph: Graph::new(0, (0..node_count).map(label).collect(), edges),
        distribution: WeightDistribution::Unique,
        connected: true,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(4..=MAX_NODES);
    let order = shuffled_nodes(rng, node_count);
    let component_count = rng.gen_range(2..=4.min(node_count));
    let mut pairs = PairSet::new();

    // Contiguous slices of the shuffled order become the components.
    let mut start = 0;
    for remaining in (1..=component_count).rev() {
        let left = node_count - start;
        let size = if remaining == 1 {
            left
        } else {
            rng.gen_range(1..=left - (remaining - 1))
        };
        let component = &order[start..start + size];
        pairs.spanning_tree(rng, component);
        pairs.sprinkle(rng, component, 0.2);
        start += size;
    }
    let edges = pairs.into_edges(rng, |r| r.gen_range(-100..=100));

    MstFixture {
        graph: Graph::new(0, (0..node_count).map(label).collect(), edges),
        distribution: WeightDistribution::Disconnected,
        connected: false,
    }
}
