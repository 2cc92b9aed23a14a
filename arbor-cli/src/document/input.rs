//! Input document parsing.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use arbor_core::{Edge, Graph};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};

use crate::cli::CliError;

/// Stable code attached to graphs that could not be decoded.
pub const INVALID_GRAPH_CODE: &str = "INPUT_INVALID_GRAPH";

/// Wire form of one edge, shared by the input and output documents.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EdgeRecord {
    /// Source label.
    pub from: String,
    /// Target label.
    pub to: String,
    /// Integer weight; may be negative.
    pub weight: i64,
}

impl From<EdgeRecord> for Edge {
    fn from(record: EdgeRecord) -> Self {
        Self::new(record.from, record.to, record.weight)
    }
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        Self {
            from: edge.source().to_owned(),
            to: edge.target().to_owned(),
            weight: edge.weight(),
        }
    }
}

/// Wire form of one graph.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct GraphRecord {
    /// Caller-supplied identifier.
    pub id: i64,
    /// Node labels in declaration order.
    pub nodes: Vec<String>,
    /// Edges in declaration order.
    pub edges: Vec<EdgeRecord>,
}

impl From<GraphRecord> for Graph {
    fn from(record: GraphRecord) -> Self {
        Self::new(
            record.id,
            record.nodes,
            record.edges.into_iter().map(Edge::from).collect(),
        )
    }
}

/// A graph entry that could not be decoded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFailure {
    /// Position of the entry in the `graphs` array.
    pub index: usize,
    /// The entry's `id`, when one could be read.
    pub graph_id: Option<i64>,
    /// Decoder diagnostic.
    pub message: String,
}

/// Decoded graphs plus the entries that failed to decode.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedBatch {
    /// Successfully decoded graphs in document order.
    pub graphs: Vec<Graph>,
    /// Document position of each entry in `graphs`.
    pub positions: Vec<usize>,
    /// Entries that failed to decode, in document order.
    pub failures: Vec<ParseFailure>,
}

impl ParsedBatch {
    /// Number of entries in the source document.
    #[must_use]
    pub fn entries(&self) -> usize {
        self.graphs.len() + self.failures.len()
    }
}

/// Reads and parses the batch document at `path`.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be read, [`CliError::Json`]
/// for malformed JSON and [`CliError::InvalidDocument`] when there is no
/// top-level `graphs` array.
#[instrument(name = "cli.read_document", err, fields(path = %path.display()))]
pub fn read_document(path: &Path) -> Result<ParsedBatch, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut raw = String::new();
    BufReader::new(File::open(path).map_err(io_error)?)
        .read_to_string(&mut raw)
        .map_err(io_error)?;
    parse_document(&raw).map_err(|err| err.at(path))
}

/// Parses a batch document held in memory.
///
/// One malformed graph entry never rejects the document: it becomes a
/// [`ParseFailure`] and the remaining entries are still decoded.
///
/// # Errors
/// Returns [`CliError::Json`] for malformed JSON and
/// [`CliError::InvalidDocument`] when there is no top-level `graphs` array.
///
/// # Examples
/// ```
/// use arbor_cli::document::parse_document;
///
/// let batch = parse_document(
///     r#"{"graphs":[
///         {"id":1,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":3}]},
///         {"id":2,"nodes":"oops","edges":[]}
///     ]}"#,
/// )
/// .expect("document must parse");
/// assert_eq!(batch.graphs.len(), 1);
/// assert_eq!(batch.failures[0].index, 1);
/// assert_eq!(batch.failures[0].graph_id, Some(2));
/// ```
pub fn parse_document(raw: &str) -> Result<ParsedBatch, CliError> {
    let mut document: Value = serde_json::from_str(raw).map_err(|source| CliError::Json {
        path: None,
        source,
    })?;
    let Some(Value::Array(entries)) = document.get_mut("graphs").map(Value::take) else {
        return Err(CliError::InvalidDocument {
            path: None,
            reason: "expected a top-level `graphs` array".to_owned(),
        });
    };

    let mut batch = ParsedBatch::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let graph_id = entry.get("id").and_then(Value::as_i64);
        match serde_json::from_value::<GraphRecord>(entry) {
            Ok(record) => {
                batch.graphs.push(Graph::from(record));
                batch.positions.push(index);
            }
            Err(err) => {
                warn!(index, graph_id, error = %err, "skipping malformed graph entry");
                batch.failures.push(ParseFailure {
                    index,
                    graph_id,
                    message: err.to_string(),
                });
            }
        }
    }
    Ok(batch)
}
