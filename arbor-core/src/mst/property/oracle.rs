//! Sequential reference computations for MST property verification.
//!
//! Plain parent vectors, no early exit, no operation
//! counting. Fixtures never repeat an endpoint pair, so the minimum weight is
//! independent of tie-breaking.

use std::collections::VecDeque;

use crate::graph::{Graph, NodeIndex};

/// Weight and shape of a minimum spanning forest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: i64,
    pub edge_count: usize,
    pub component_count: usize,
}

fn root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Minimum spanning forest over the nodes selected by `include`.
fn forest_over(graph: &Graph, include: impl Fn(usize) -> bool) -> OracleForest {
    let index = NodeIndex::new(graph);
    let mut edges: Vec<(i64, usize, usize)> = index
        .resolve(graph)
        .into_iter()
        .filter(|edge| include(edge.source) && include(edge.target))
        .map(|edge| (edge.weight(), edge.source, edge.target))
        .collect();
    edges.sort_unstable();

    let mut parent: Vec<usize> = (0..index.len()).collect();
    let mut total_weight = 0;
    let mut edge_count = 0;
    for (weight, a, b) in edges {
        let (ra, rb) = (root(&mut parent, a), root(&mut parent, b));
        if ra != rb {
            parent[rb] = ra;
            total_weight += weight;
            edge_count += 1;
        }
    }

    let included = (0..index.len()).filter(|&node| include(node)).count();
    OracleForest {
        total_weight,
        edge_count,
        component_count: included - edge_count,
    }
}

/// Minimum spanning forest of the whole graph.
pub(super) fn minimum_forest(graph: &Graph) -> OracleForest {
    forest_over(graph, |_| true)
}

/// Minimum spanning tree of the first node's component.
pub(super) fn minimum_tree_from_first(graph: &Graph) -> OracleForest {
    let reachable = reachable_from_first(graph);
    forest_over(graph, |node| reachable[node])
}

/// Marks the nodes reachable from index 0 by breadth-first search.
pub(super) fn reachable_from_first(graph: &Graph) -> Vec<bool> {
    let index = NodeIndex::new(graph);
    let mut neighbours = vec![Vec::new(); index.len()];
    for edge in index.resolve(graph) {
        neighbours[edge.source].push(edge.target);
        neighbours[edge.target].push(edge.source);
    }

    let mut reached = vec![false; index.len()];
    if index.is_empty() {
        return reached;
    }
    reached[0] = true;
    let mut queue = VecDeque::from([0]);
    while let Some(node) = queue.pop_front() {
        for &next in &neighbours[node] {
            if !reached[next] {
                reached[next] = true;
                queue.push_back(next);
            }
        }
    }
    reached
}
