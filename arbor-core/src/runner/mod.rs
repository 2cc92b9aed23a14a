//! Batch orchestration comparing both MST engines on every graph.
//!
//! Provides the [`BatchRunner`] entry point and the per-graph report types.
//! Graphs are independent: each engine builds its own adjacency and
//! disjoint-set state, so a batch may be processed sequentially or on the
//! rayon pool with identical results apart from timing.

use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::{
    builder::{ExecutionStrategy, ValidationPolicy},
    error::MstError,
    graph::{Graph, GraphIssue, NodeIndex, inspect_graph},
    instrument::Stopwatch,
    mst::{MstResult, kruskal_mst, prim_mst},
};

/// Counts taken from the graph exactly as provided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InputStats {
    vertices: usize,
    edges: usize,
}

impl InputStats {
    /// Captures the declared node and edge counts of `graph`.
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.node_count(),
            edges: graph.edge_count(),
        }
    }

    /// Declared nodes, duplicates included.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Declared edges, duplicates and dangling edges included.
    #[must_use]
    pub const fn edges(&self) -> usize {
        self.edges
    }
}

/// Both engines' results for one graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comparison {
    prim: MstResult,
    kruskal: MstResult,
}

impl Comparison {
    /// Prim's result.
    #[must_use]
    pub const fn prim(&self) -> &MstResult {
        &self.prim
    }

    /// Kruskal's result.
    #[must_use]
    pub const fn kruskal(&self) -> &MstResult {
        &self.kruskal
    }

    /// Returns `true` when both engines report the same total cost.
    #[must_use]
    pub const fn costs_agree(&self) -> bool {
        self.prim.total_cost() == self.kruskal.total_cost()
    }
}

/// Output record for one input graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphReport {
    graph_id: i64,
    stats: InputStats,
    issues: Vec<GraphIssue>,
    outcome: Result<Comparison, MstError>,
}

impl GraphReport {
    /// Identifier of the graph this report describes.
    #[must_use]
    pub const fn graph_id(&self) -> i64 {
        self.graph_id
    }

    /// Declared node and edge counts.
    #[must_use]
    pub const fn stats(&self) -> InputStats {
        self.stats
    }

    /// Non-fatal diagnostics gathered while processing the graph.
    #[must_use]
    pub fn issues(&self) -> &[GraphIssue] {
        &self.issues
    }

    /// Engine results, or the reason this graph failed.
    #[must_use]
    pub const fn outcome(&self) -> Result<&Comparison, &MstError> {
        self.outcome.as_ref()
    }

    /// Returns `true` when both engines ran to completion.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Reports for a whole batch, in input order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BatchReport {
    reports: Vec<GraphReport>,
}

impl BatchReport {
    /// Per-graph reports in input order.
    #[must_use]
    pub fn reports(&self) -> &[GraphReport] {
        &self.reports
    }

    /// Consumes the batch, yielding the per-graph reports.
    #[must_use]
    pub fn into_reports(self) -> Vec<GraphReport> {
        self.reports
    }

    /// Number of graphs processed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns `true` when the batch contained no graphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Number of graphs whose processing failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_success()).count()
    }
}

/// Entry point for comparing Prim and Kruskal across a batch of graphs.
///
/// # Examples
/// ```
/// use arbor_core::{BatchRunnerBuilder, Edge, Graph};
///
/// let runner = BatchRunnerBuilder::new().build().expect("builder must succeed");
/// let graph = Graph::new(
///     1,
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![Edge::new("A", "B", 4), Edge::new("B", "C", 1), Edge::new("A", "C", 2)],
/// );
/// let batch = runner.run(&[graph]);
/// let comparison = batch.reports()[0].outcome().expect("graph must succeed");
/// assert_eq!(comparison.prim().total_cost(), 3);
/// assert!(comparison.costs_agree());
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunner {
    validation: ValidationPolicy,
    execution_strategy: ExecutionStrategy,
    graph_deadline: Option<Duration>,
}

impl BatchRunner {
    pub(crate) fn new(
        validation: ValidationPolicy,
        execution_strategy: ExecutionStrategy,
        graph_deadline: Option<Duration>,
    ) -> Self {
        Self {
            validation,
            execution_strategy,
            graph_deadline,
        }
    }

    /// Returns the validation policy applied to every graph.
    #[must_use]
    pub fn validation(&self) -> ValidationPolicy {
        self.validation
    }

    /// Returns the resolved execution strategy; never `Auto`.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the per-graph wall-clock budget, if any.
    #[must_use]
    pub fn graph_deadline(&self) -> Option<Duration> {
        self.graph_deadline
    }

    /// Processes every graph, returning one report per graph in input order.
    ///
    /// A failing graph never aborts the batch.
    #[instrument(
        name = "core.run_batch",
        skip(self, graphs),
        fields(graphs = graphs.len(), strategy = ?self.execution_strategy),
    )]
    pub fn run(&self, graphs: &[Graph]) -> BatchReport {
        let reports: Vec<GraphReport> = match self.execution_strategy {
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel => graphs.par_iter().map(|g| self.process(g)).collect(),
            _ => graphs.iter().map(|g| self.process(g)).collect(),
        };
        let batch = BatchReport { reports };
        info!(
            graphs = batch.len(),
            failures = batch.failure_count(),
            "batch completed"
        );
        batch
    }

    /// Processes a single graph.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{BatchRunnerBuilder, Graph, GraphIssue};
    ///
    /// let runner = BatchRunnerBuilder::new().build().expect("builder must succeed");
    /// let report = runner.process(&Graph::new(9, Vec::new(), Vec::new()));
    /// assert_eq!(report.issues(), &[GraphIssue::Empty]);
    /// let comparison = report.outcome().expect("empty graphs succeed");
    /// assert_eq!(comparison.kruskal().operation_count(), 0);
    /// ```
    #[instrument(
        name = "core.process_graph",
        skip(self, graph),
        fields(
            graph_id = graph.id(),
            nodes = graph.node_count(),
            edges = graph.edge_count()
        ),
    )]
    pub fn process(&self, graph: &Graph) -> GraphReport {
        let stats = InputStats::of(graph);
        let mut issues = inspect_graph(graph);
        for issue in &issues {
            debug!(graph_id = graph.id(), code = %issue.code(), %issue, "graph issue");
        }

        let outcome = self
            .validate(graph, &issues)
            .and_then(|()| self.compare(graph));

        match &outcome {
            Ok(comparison) => {
                let distinct = NodeIndex::new(graph).len();
                if distinct > 0 && !comparison.prim.spans(distinct) {
                    let reached = comparison.prim.edge_count() + 1;
                    warn!(
                        graph_id = graph.id(),
                        reached,
                        node_count = distinct,
                        "graph is disconnected; prim covers the first component only"
                    );
                    issues.push(GraphIssue::Disconnected {
                        reached,
                        node_count: distinct,
                    });
                }
            }
            Err(error) => {
                warn!(graph_id = graph.id(), code = %error.code(), %error, "graph failed");
            }
        }

        GraphReport {
            graph_id: graph.id(),
            stats,
            issues,
            outcome,
        }
    }

    fn validate(&self, graph: &Graph, issues: &[GraphIssue]) -> Result<(), MstError> {
        if self.validation == ValidationPolicy::Lenient {
            return Ok(());
        }
        let dangling = issues.iter().find_map(|issue| match issue {
            GraphIssue::DanglingEdge { edge_index, node } => Some((*edge_index, node)),
            _ => None,
        });
        match dangling {
            Some((edge_index, node)) => Err(MstError::MalformedGraphReference {
                graph_id: graph.id(),
                edge_index,
                node: Arc::from(node.as_str()),
            }),
            None => Ok(()),
        }
    }

    fn compare(&self, graph: &Graph) -> Result<Comparison, MstError> {
        let stopwatch = Stopwatch::start();
        // Engines of one graph run back to back so their timings never
        // compete for a core.
        let prim = prim_mst(graph);
        let kruskal = kruskal_mst(graph);
        let elapsed = stopwatch.elapsed();

        if let Some(budget) = self.graph_deadline
            && elapsed > budget
        {
            return Err(MstError::DeadlineExceeded {
                graph_id: graph.id(),
                elapsed,
                budget,
            });
        }
        Ok(Comparison { prim, kruskal })
    }
}
