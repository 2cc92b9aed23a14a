//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single-graph engine benchmark.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Extra random edges per node on top of the spanning tree.
    pub density: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.node_count, self.density)
    }
}

/// Parameters for a batch runner benchmark.
#[derive(Clone, Copy, Debug)]
pub struct BatchBenchParams {
    /// Number of graphs in the batch.
    pub graph_count: usize,
    /// Nodes per graph.
    pub node_count: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graphs={},n={}", self.graph_count, self.node_count)
    }
}
