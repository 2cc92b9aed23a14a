//! Fixture types for MST property tests.

use crate::graph::Graph;

/// Weight and topology profile for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the MST is unique.
    Unique,
    /// Weights drawn from a tiny range, stressing tie-breaking.
    ManyIdentical,
    /// A spanning tree plus a handful of extra edges; weights may be negative.
    Sparse,
    /// Most node pairs connected.
    Dense,
    /// Several components with no cross-component edges.
    Disconnected,
}

/// Generated graph together with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub graph: Graph,
    pub distribution: WeightDistribution,
    /// Whether the generator guaranteed a single component.
    pub connected: bool,
}
