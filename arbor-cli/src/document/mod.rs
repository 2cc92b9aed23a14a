//! JSON adapters between batch documents and the core graph model.
//!
//! [`input`] turns a `{"graphs": [...]}` document into [`arbor_core::Graph`]
//! values, isolating per-graph failures; [`output`] renders a
//! [`arbor_core::BatchReport`] as JSON or as a text summary.

pub mod input;
pub mod output;

pub use input::{EdgeRecord, GraphRecord, ParseFailure, ParsedBatch, parse_document, read_document};
pub use output::{
    AlgorithmOutput, FailureOutput, GraphOutput, OutputDocument, OutputFormat, StatsOutput,
    WarningOutput, render, render_summary, write_json,
};
