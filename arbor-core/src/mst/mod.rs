//! Minimum spanning tree engines.
//!
//! Two independent sequential engines compute a minimum spanning tree of a
//! [`Graph`], or a spanning forest when the graph is disconnected:
//!
//! - [`prim_mst`] grows a tree from the first declared node using a
//!   lazy-deletion priority queue.
//! - [`kruskal_mst`] scans deduplicated edges in ascending weight order and
//!   rejects cycles with a [`DisjointSet`].
//!
//! # Operation counts
//!
//! Each engine reports a deterministic [`MstResult::operation_count`], but the
//! two count different unit operations. Prim counts one unit per queue push,
//! per queue pop and per accepted edge. Kruskal counts one unit per examined
//! edge, per `find` (two per examined edge) and per successful `union`. The
//! numbers track progress inside one algorithm; comparing them across
//! algorithms is not a fair cost comparison.
//!
//! # Tie-breaking
//!
//! Prim orders queued edges by `(weight, insertion sequence)` and pushes
//! incident edges in declaration order. Kruskal sorts with a stable sort, so
//! equal weights keep declaration order. Re-running either engine on the same
//! graph yields the same edges, cost and operation count.
//!
//! [`Graph`]: crate::Graph

mod kruskal;
mod prim;
mod union_find;

use std::time::Duration;

use crate::graph::Edge;

pub use self::{kruskal::kruskal_mst, prim::prim_mst, union_find::DisjointSet};

/// The two engines compared by the batch runner.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Priority-queue expansion from the first node.
    Prim,
    /// Sorted-edge scan over a disjoint-set.
    Kruskal,
}

impl Algorithm {
    /// Lower-case name used in logs and output documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

/// Outcome of one engine on one graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MstResult {
    algorithm: Algorithm,
    edges: Vec<Edge>,
    total_cost: i64,
    operation_count: u64,
    elapsed: Duration,
}

impl MstResult {
    pub(crate) const fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            edges: Vec::new(),
            total_cost: 0,
            operation_count: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub(crate) fn accept(&mut self, edge: Edge) {
        // Wrapping sums are order independent, so both engines agree and the
        // total is exact whenever it fits in an i64.
        self.total_cost = self.total_cost.wrapping_add(edge.weight());
        self.edges.push(edge);
    }

    pub(crate) fn finish(mut self, operation_count: u64, elapsed: Duration) -> Self {
        self.operation_count = operation_count;
        self.elapsed = elapsed;
        self
    }

    /// Engine that produced the result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Number of accepted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> i64 { self.total_cost }

    /// Algorithm-defined unit operations; see the module docs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operation_count(&self) -> u64 { self.operation_count }

    /// Wall-clock time of the algorithm body.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns `true` when the result is a spanning tree over
    /// `distinct_nodes` nodes.
    #[must_use]
    pub fn spans(&self, distinct_nodes: usize) -> bool {
        self.edges.len() == distinct_nodes.saturating_sub(1)
    }

    /// Compares everything except timing.
    #[must_use]
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && self.edges == other.edges
            && self.total_cost == other.total_cost
            && self.operation_count == other.operation_count
    }
}


#[cfg(test)]
mod property;
