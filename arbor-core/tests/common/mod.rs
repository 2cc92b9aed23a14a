use arbor_core::{Edge, Graph};

/// Builds a graph from label slices and `(from, to, weight)` triples.
#[must_use]
pub fn graph(id: i64, nodes: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
    Graph::new(
        id,
        nodes.iter().map(|&label| label.to_owned()).collect(),
        edges
            .iter()
            .map(|&(from, to, weight)| Edge::new(from, to, weight))
            .collect(),
    )
}

/// Five-node graph with a unique minimum spanning tree of cost 16.
#[must_use]
pub fn five_node(id: i64) -> Graph {
    graph(
        id,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 4),
            ("A", "C", 3),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 7),
            ("C", "E", 8),
            ("D", "E", 6),
        ],
    )
}
