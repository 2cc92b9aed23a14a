//! Kruskal's engine.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    graph::{Graph, NodeIndex, ResolvedEdge},
    instrument::{OperationCounter, Stopwatch},
};

use super::{Algorithm, DisjointSet, MstResult};

/// Computes a minimum spanning tree (or forest) with Kruskal's algorithm.
///
/// Each undirected endpoint pair is considered once: the first declared edge
/// for a pair wins, even when a later duplicate carries a different weight.
/// Remaining edges are stably sorted by weight, so equal weights keep their
/// declaration order. The scan stops as soon as `distinct nodes - 1` edges
/// are accepted. Accepted edges keep their declared orientation.
///
/// Timing covers deduplication, sorting and the scan, but not label
/// indexing.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, kruskal_mst};
///
/// let graph = Graph::new(
///     1,
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![Edge::new("A", "B", 5), Edge::new("A", "C", 5), Edge::new("B", "C", 1)],
/// );
/// let result = kruskal_mst(&graph);
/// assert_eq!(result.total_cost(), 6);
/// assert_eq!(result.edges(), &[Edge::new("B", "C", 1), Edge::new("A", "B", 5)]);
/// ```
#[must_use]
pub fn kruskal_mst(graph: &Graph) -> MstResult {
    let mut result = MstResult::empty(Algorithm::Kruskal);
    let nodes = NodeIndex::new(graph);
    if nodes.is_empty() {
        return result;
    }

    let stopwatch = Stopwatch::start();
    let goal = nodes.spanning_target();
    let mut ops = OperationCounter::default();
    let candidates = sorted_unique_edges(nodes.resolve(graph));
    let mut sets = DisjointSet::new(nodes.len());

    for edge in candidates {
        if result.edge_count() >= goal {
            break;
        }
        ops.tick();
        let source_root = sets.find(edge.source);
        ops.tick();
        let target_root = sets.find(edge.target);
        ops.tick();
        if source_root == target_root {
            continue;
        }
        if sets.union(source_root, target_root) {
            ops.tick();
            result.accept(edge.original.clone());
        }
    }

    let result = result.finish(ops.total(), stopwatch.elapsed());
    debug!(
        graph_id = graph.id(),
        accepted = result.edge_count(),
        goal,
        components = sets.components(),
        total_cost = result.total_cost(),
        operations = result.operation_count(),
        "kruskal completed"
    );
    result
}

fn sorted_unique_edges(edges: Vec<ResolvedEdge<'_>>) -> Vec<ResolvedEdge<'_>> {
    let mut seen = HashSet::with_capacity(edges.len());
    let mut unique: Vec<_> = edges
        .into_iter()
        .filter(|edge| seen.insert(edge.endpoints()))
        .collect();
    unique.sort_by_key(|edge| edge.weight());
    unique
}
