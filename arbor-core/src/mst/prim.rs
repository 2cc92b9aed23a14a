//! Prim's engine.
//!
//! The queue uses lazy deletion: entries whose far endpoint was reached after
//! they were pushed stay queued and are discarded when popped. Each edge is
//! pushed at most twice (once per endpoint), so the queue holds `O(E)` entries
//! and the run costs `O(E log E)`.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use tracing::debug;

use crate::{
    graph::{Adjacency, Graph, HalfEdge},
    instrument::{OperationCounter, Stopwatch},
};

use super::{Algorithm, MstResult};

/// Queued edge ordered by `(weight, sequence)`.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    edge: HalfEdge,
    sequence: u64,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .weight()
            .cmp(&other.edge.weight())
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, edge: HalfEdge, ops: &mut OperationCounter) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        self.heap.push(Reverse(Candidate { edge, sequence }));
        ops.tick();
    }

    fn pop(&mut self, ops: &mut OperationCounter) -> Option<HalfEdge> {
        let Reverse(candidate) = self.heap.pop()?;
        ops.tick();
        Some(candidate.edge)
    }
}

/// Computes a minimum spanning tree with Prim's algorithm, starting from the
/// graph's first declared node.
///
/// A disconnected graph yields a spanning tree of the first node's component
/// only. An empty graph yields an empty result with zero operations and zero
/// elapsed time. Accepted edges are oriented from the already-reached endpoint
/// to the newly reached one. Timing excludes adjacency construction.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, prim_mst};
///
/// let graph = Graph::new(
///     1,
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![Edge::new("A", "B", 5), Edge::new("A", "C", 5), Edge::new("B", "C", 1)],
/// );
/// let result = prim_mst(&graph);
/// assert_eq!(result.total_cost(), 6);
/// assert_eq!(result.edges(), &[Edge::new("A", "B", 5), Edge::new("B", "C", 1)]);
/// ```
#[must_use]
pub fn prim_mst(graph: &Graph) -> MstResult {
    let mut result = MstResult::empty(Algorithm::Prim);
    let adjacency = Adjacency::build(graph);
    let nodes = adjacency.nodes();
    if nodes.is_empty() {
        return result;
    }

    let stopwatch = Stopwatch::start();
    let goal = nodes.spanning_target();
    let mut ops = OperationCounter::default();
    let mut reached = vec![false; nodes.len()];
    let mut frontier = Frontier::default();

    // Index 0 is the first declared node.
    reached[0] = true;
    for &edge in adjacency.incident_at(0) {
        frontier.push(edge, &mut ops);
    }

    while result.edge_count() < goal {
        let Some(edge) = frontier.pop(&mut ops) else {
            break;
        };
        let next = edge.destination();
        if reached[next] {
            continue;
        }
        reached[next] = true;
        result.accept(nodes.materialise(edge));
        ops.tick();

        for &candidate in adjacency.incident_at(next) {
            if !reached[candidate.destination()] {
                frontier.push(candidate, &mut ops);
            }
        }
    }

    let result = result.finish(ops.total(), stopwatch.elapsed());
    debug!(
        graph_id = graph.id(),
        accepted = result.edge_count(),
        goal,
        total_cost = result.total_cost(),
        operations = result.operation_count(),
        "prim completed"
    );
    result
}
