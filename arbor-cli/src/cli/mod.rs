//! Command-line interface orchestration for the arbor MST comparer.
//!
//! The CLI offers a `run` command that reads a JSON batch document, compares
//! Prim's and Kruskal's engines on every graph and writes a JSON or text
//! report.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, StrategyArg, deliver, run_cli,
};

#[cfg(test)]
mod test_helpers;
