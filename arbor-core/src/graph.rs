//! In-memory graph model and adjacency construction.
//!
//! A [`Graph`] is an ordered list of node labels plus an ordered list of
//! undirected weighted [`Edge`]s. Engines never mutate it: they resolve labels
//! to dense indices through a [`NodeIndex`] and, for Prim's traversal, build an
//! [`Adjacency`] in which every edge appears once per endpoint.
//!
//! Malformed input is tolerated rather than rejected here. Duplicate labels
//! share the index of their first occurrence, and edges naming a label that is
//! absent from the node list are left out of the resolved view so they are
//! inert for both engines. [`inspect_graph`] reports both situations as
//! [`GraphIssue`]s.

use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    fmt,
};

use crate::error::define_error_codes;

/// Label identifying a node.
pub type NodeId = String;

/// One undirected weighted connection.
///
/// `(a, b, w)` and `(b, a, w)` denote the same edge. Weights may be negative.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: i64,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Edge;
    ///
    /// let edge = Edge::new("A", "B", -3);
    /// assert_eq!(edge.source(), "A");
    /// assert_eq!(edge.weight(), -3);
    /// ```
    #[must_use]
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: i64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Returns the endpoint written first.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &str { &self.source }

    /// Returns the endpoint written second.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> &str { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns `true` when the edge joins `a` and `b` in either orientation.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{}:{})", self.source, self.target, self.weight)
    }
}

/// One undirected weighted graph of a batch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    id: i64,
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph from its identifier, node labels and edges.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph};
    ///
    /// let graph = Graph::new(
    ///     1,
    ///     vec!["A".into(), "B".into()],
    ///     vec![Edge::new("A", "B", 4)],
    /// );
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    #[must_use]
    pub const fn new(id: i64, nodes: Vec<NodeId>, edges: Vec<Edge>) -> Self {
        Self { id, nodes, edges }
    }

    /// Returns the graph identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> i64 { self.id }

    /// Returns the node labels in declaration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[NodeId] { &self.nodes }

    /// Returns the edges in declaration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Number of declared nodes, duplicates included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of declared edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph declares no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Dense index over the distinct node labels of a [`Graph`].
///
/// The first occurrence of a label owns its index, so index `0` is always the
/// graph's first declared node.
#[derive(Clone, Debug)]
pub struct NodeIndex<'g> {
    positions: HashMap<&'g str, usize>,
    labels: Vec<&'g str>,
}

impl<'g> NodeIndex<'g> {
    /// Indexes the labels of `graph`.
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        let mut positions = HashMap::with_capacity(graph.node_count());
        let mut labels = Vec::with_capacity(graph.node_count());
        for label in graph.nodes() {
            if let Entry::Vacant(slot) = positions.entry(label.as_str()) {
                slot.insert(labels.len());
                labels.push(label.as_str());
            }
        }
        Self { positions, labels }
    }

    /// Returns the index of `label`, or `None` for an unknown label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Returns the label stored at `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&'g str> {
        self.labels.get(index).copied()
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when the graph declares no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of edges in a spanning tree over the distinct labels.
    #[must_use]
    pub fn spanning_target(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    /// Resolves the edges of `graph` whose endpoints are both known.
    pub(crate) fn resolve(&self, graph: &'g Graph) -> Vec<ResolvedEdge<'g>> {
        graph
            .edges()
            .iter()
            .filter_map(|edge| {
                Some(ResolvedEdge {
                    original: edge,
                    source: self.get(edge.source())?,
                    target: self.get(edge.target())?,
                })
            })
            .collect()
    }

    /// Rebuilds a labelled edge from a half-edge produced by this index.
    pub(crate) fn materialise(&self, half: HalfEdge) -> Edge {
        Edge::new(
            self.labels[half.origin],
            self.labels[half.destination],
            half.weight,
        )
    }
}

/// An input edge whose endpoints resolved to indices.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ResolvedEdge<'g> {
    pub(crate) original: &'g Edge,
    pub(crate) source: usize,
    pub(crate) target: usize,
}

impl ResolvedEdge<'_> {
    pub(crate) const fn weight(&self) -> i64 {
        self.original.weight
    }

    /// Unordered endpoint pair used to detect duplicate undirected edges.
    pub(crate) fn endpoints(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// One endpoint's view of an undirected edge: leaves `origin` towards
/// `destination`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HalfEdge {
    origin: usize,
    destination: usize,
    weight: i64,
}

impl HalfEdge {
    /// Index of the node the edge is stored under.
    #[must_use]
    #[rustfmt::skip]
    pub const fn origin(&self) -> usize { self.origin }

    /// Index of the opposite endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }
}

/// Incident-edge lists for every distinct node of a graph.
///
/// Each resolved edge `(a, b, w)` is stored as `a -> b` under `a` and as
/// `b -> a` under `b`, in edge declaration order. Construction is `O(V + E)`.
#[derive(Clone, Debug)]
pub struct Adjacency<'g> {
    nodes: NodeIndex<'g>,
    incident: Vec<Vec<HalfEdge>>,
}

impl<'g> Adjacency<'g> {
    /// Builds the adjacency structure for `graph`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Adjacency, Edge, Graph};
    ///
    /// let graph = Graph::new(
    ///     1,
    ///     vec!["A".into(), "B".into(), "C".into()],
    ///     vec![Edge::new("A", "B", 1), Edge::new("C", "A", 2)],
    /// );
    /// let adjacency = Adjacency::build(&graph);
    /// assert_eq!(adjacency.incident("A").len(), 2);
    /// assert_eq!(adjacency.incident("B").len(), 1);
    /// assert!(adjacency.incident("missing").is_empty());
    /// ```
    #[must_use]
    pub fn build(graph: &'g Graph) -> Self {
        let nodes = NodeIndex::new(graph);
        let mut incident = vec![Vec::new(); nodes.len()];
        for edge in nodes.resolve(graph) {
            let weight = edge.weight();
            incident[edge.source].push(HalfEdge {
                origin: edge.source,
                destination: edge.target,
                weight,
            });
            incident[edge.target].push(HalfEdge {
                origin: edge.target,
                destination: edge.source,
                weight,
            });
        }
        Self { nodes, incident }
    }

    /// Edges leaving `label`; empty for a label that is not in the node list.
    #[must_use]
    pub fn incident(&self, label: &str) -> &[HalfEdge] {
        self.nodes
            .get(label)
            .map(|index| self.incident_at(index))
            .unwrap_or_default()
    }

    /// Edges leaving the node stored at `index`; empty when out of range.
    #[must_use]
    pub fn incident_at(&self, index: usize) -> &[HalfEdge] {
        self.incident
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the node index the adjacency was built over.
    #[must_use]
    pub const fn nodes(&self) -> &NodeIndex<'g> {
        &self.nodes
    }
}

/// Non-fatal diagnostic about a graph's shape or references.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GraphIssue {
    /// An edge names an endpoint absent from the node list. The edge is
    /// ignored by both engines.
    DanglingEdge {
        /// Position of the edge in the edge list.
        edge_index: usize,
        /// The unknown endpoint label.
        node: NodeId,
    },
    /// A label appears more than once in the node list.
    DuplicateNode {
        /// The repeated label.
        node: NodeId,
    },
    /// The graph declares no nodes.
    Empty,
    /// Prim's traversal could not reach every node, so the result is a
    /// spanning tree of the first node's component only.
    Disconnected {
        /// Nodes reached from the first declared node.
        reached: usize,
        /// Distinct nodes in the graph.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphIssue`] variants.
    enum GraphIssueCode for GraphIssue {
        /// An edge referenced a node outside the node list.
        DanglingEdge => DanglingEdge { .. } => "GRAPH_DANGLING_EDGE",
        /// A node label was declared twice.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// The graph has no nodes.
        Empty => Empty => "GRAPH_EMPTY",
        /// The graph has more than one connected component.
        Disconnected => Disconnected { .. } => "GRAPH_DISCONNECTED",
    }
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingEdge { edge_index, node } => {
                write!(f, "edge {edge_index} references unknown node `{node}`")
            }
            Self::DuplicateNode { node } => write!(f, "node `{node}` is declared more than once"),
            Self::Empty => f.write_str("graph has no nodes"),
            Self::Disconnected {
                reached,
                node_count,
            } => write!(
                f,
                "graph is disconnected: {reached} of {node_count} nodes reachable from the first node"
            ),
        }
    }
}

/// Reports the structural issues visible before any engine runs.
///
/// Duplicate labels are reported once each; dangling edges once per unknown
/// endpoint.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, GraphIssue, inspect_graph};
///
/// let graph = Graph::new(
///     3,
///     vec!["A".into(), "B".into()],
///     vec![Edge::new("A", "B", 1), Edge::new("B", "Z", 2)],
/// );
/// assert_eq!(
///     inspect_graph(&graph),
///     vec![GraphIssue::DanglingEdge { edge_index: 1, node: "Z".into() }],
/// );
/// ```
#[must_use]
pub fn inspect_graph(graph: &Graph) -> Vec<GraphIssue> {
    let mut issues = Vec::new();
    if graph.is_empty() {
        issues.push(GraphIssue::Empty);
    }

    let mut seen = HashSet::with_capacity(graph.node_count());
    let mut reported = HashSet::new();
    for label in graph.nodes() {
        if !seen.insert(label.as_str()) && reported.insert(label.as_str()) {
            issues.push(GraphIssue::DuplicateNode {
                node: label.clone(),
            });
        }
    }

    let index = NodeIndex::new(graph);
    issues.extend(dangling_edges(graph, &index));
    issues
}

fn dangling_edges<'a>(
    graph: &'a Graph,
    index: &'a NodeIndex<'a>,
) -> impl Iterator<Item = GraphIssue> + 'a {
    graph
        .edges()
        .iter()
        .enumerate()
        .flat_map(move |(edge_index, edge)| {
            let mut unknown = Vec::with_capacity(2);
            if index.get(edge.source()).is_none() {
                unknown.push(edge.source());
            }
            if index.get(edge.target()).is_none() && edge.target() != edge.source() {
                unknown.push(edge.target());
            }
            unknown.into_iter().map(move |node| GraphIssue::DanglingEdge {
                edge_index,
                node: node.to_owned(),
            })
        })
}
