//! Output document assembly and rendering.

use std::io::{self, Write};
use std::time::Duration;

use arbor_core::{BatchReport, GraphIssue, GraphReport, MstResult};
use clap::ValueEnum;
use serde::Serialize;

use super::input::{EdgeRecord, INVALID_GRAPH_CODE, ParseFailure};

/// Rendering selected with `--format`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON document.
    #[default]
    Json,
    /// Human-readable text report.
    Summary,
}

/// Declared counts of one input graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct StatsOutput {
    /// Declared nodes.
    pub vertices: usize,
    /// Declared edges.
    pub edges: usize,
}

/// One engine's result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlgorithmOutput {
    /// Accepted edges in acceptance order.
    pub mst_edges: Vec<EdgeRecord>,
    /// Sum of accepted weights.
    pub total_cost: i64,
    /// Engine-defined unit operations.
    pub operations_count: u64,
    /// Wall-clock milliseconds rounded to two decimals.
    ///
    /// JSON carries the shortest float for the rounded value, so `1.5` rather
    /// than `1.50`. The summary format always prints two decimals.
    pub execution_time_ms: f64,
}

impl From<&MstResult> for AlgorithmOutput {
    fn from(result: &MstResult) -> Self {
        Self {
            mst_edges: result.edges().iter().map(EdgeRecord::from).collect(),
            total_cost: result.total_cost(),
            operations_count: result.operation_count(),
            execution_time_ms: round_millis(result.elapsed()),
        }
    }
}

/// A non-fatal diagnostic attached to a graph result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WarningOutput {
    /// Stable issue code.
    pub code: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl From<&GraphIssue> for WarningOutput {
    fn from(issue: &GraphIssue) -> Self {
        Self {
            code: issue.code().as_str(),
            message: issue.to_string(),
        }
    }
}

/// Output record for a successfully processed graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphOutput {
    /// Identifier from the input document.
    pub graph_id: i64,
    /// Declared node and edge counts.
    pub input_stats: StatsOutput,
    /// Prim's result.
    pub prim: AlgorithmOutput,
    /// Kruskal's result.
    pub kruskal: AlgorithmOutput,
    /// Diagnostics gathered while processing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningOutput>,
}

/// A graph entry that produced no result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FailureOutput {
    /// Position of the entry in the input `graphs` array.
    pub index: usize,
    /// Identifier, when one could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_id: Option<i64>,
    /// Stable failure code.
    pub code: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl From<&ParseFailure> for FailureOutput {
    fn from(failure: &ParseFailure) -> Self {
        Self {
            index: failure.index,
            graph_id: failure.graph_id,
            code: INVALID_GRAPH_CODE,
            message: failure.message.clone(),
        }
    }
}

/// The complete output document.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OutputDocument {
    /// Results for graphs that were processed, in input order.
    pub results: Vec<GraphOutput>,
    /// Entries that failed to decode or process, in input order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureOutput>,
}

impl OutputDocument {
    /// Merges a batch report with the decode failures of the same document.
    ///
    /// `positions[i]` is the document index of the `i`-th processed graph.
    #[must_use]
    pub fn assemble(batch: BatchReport, positions: &[usize], parse_failures: &[ParseFailure]) -> Self {
        let mut document = Self::default();
        for (offset, report) in batch.into_reports().into_iter().enumerate() {
            let index = positions.get(offset).copied().unwrap_or(offset);
            match report.outcome() {
                Ok(comparison) => document.results.push(GraphOutput {
                    graph_id: report.graph_id(),
                    input_stats: stats(&report),
                    prim: AlgorithmOutput::from(comparison.prim()),
                    kruskal: AlgorithmOutput::from(comparison.kruskal()),
                    warnings: report.issues().iter().map(WarningOutput::from).collect(),
                }),
                Err(error) => document.failures.push(FailureOutput {
                    index,
                    graph_id: Some(report.graph_id()),
                    code: error.code().as_str(),
                    message: error.to_string(),
                }),
            }
        }
        document
            .failures
            .extend(parse_failures.iter().map(FailureOutput::from));
        document.failures.sort_by_key(|failure| failure.index);
        document
    }
}

fn stats(report: &GraphReport) -> StatsOutput {
    StatsOutput {
        vertices: report.stats().vertices(),
        edges: report.stats().edges(),
    }
}

pub(super) fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}

/// Renders `document` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render(document: &OutputDocument, format: OutputFormat, writer: impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(document, writer),
        OutputFormat::Summary => render_summary(document, writer),
    }
}

/// Writes `document` as pretty-printed JSON followed by a newline.
///
/// # Errors
/// Returns [`io::Error`] if serialisation or writing fails.
pub fn write_json(document: &OutputDocument, mut writer: impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, document)?;
    writeln!(writer)
}

/// Renders `document` as a human-readable text report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::document::{OutputDocument, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut buffer = Vec::new();
/// render_summary(&OutputDocument::default(), &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "graphs: 0 processed, 0 failed\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(document: &OutputDocument, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graphs: {} processed, {} failed",
        document.results.len(),
        document.failures.len()
    )?;
    for result in &document.results {
        writeln!(
            writer,
            "graph {}: {} vertices, {} edges",
            result.graph_id, result.input_stats.vertices, result.input_stats.edges
        )?;
        for (name, output) in [("prim", &result.prim), ("kruskal", &result.kruskal)] {
            writeln!(
                writer,
                "  {name:<8} cost {} over {} edges, {} ops, {:.2} ms",
                output.total_cost,
                output.mst_edges.len(),
                output.operations_count,
                output.execution_time_ms
            )?;
        }
        for warning in &result.warnings {
            writeln!(writer, "  warning {}: {}", warning.code, warning.message)?;
        }
    }
    for failure in &document.failures {
        let id = failure
            .graph_id
            .map_or_else(|| "?".to_owned(), |id| id.to_string());
        writeln!(
            writer,
            "failed entry {} (graph {id}) {}: {}",
            failure.index, failure.code, failure.message
        )?;
    }
    Ok(())
}
