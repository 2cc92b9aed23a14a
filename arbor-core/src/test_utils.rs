//! Shared test utilities for `arbor-core`.

use arbor_test_support::profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Edge, Graph};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from string slices.
pub(crate) fn graph(id: i64, nodes: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
    Graph::new(
        id,
        nodes.iter().map(|&label| label.to_owned()).collect(),
        edges
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect(),
    )
}

/// Builds the expected edge list for assertions.
pub(crate) fn edges(raw: &[(&str, &str, i64)]) -> Vec<Edge> {
    raw.iter()
        .map(|&(source, target, weight)| Edge::new(source, target, weight))
        .collect()
}
