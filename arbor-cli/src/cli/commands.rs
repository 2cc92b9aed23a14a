//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use arbor_core::{BatchRunner, BatchRunnerBuilder, ConfigError, ExecutionStrategy, ValidationPolicy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::document::{OutputDocument, OutputFormat, read_document, render};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compare Prim's and Kruskal's minimum spanning tree algorithms over a batch of graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run both engines over every graph in a batch document.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a JSON document with a top-level `graphs` array.
    pub input: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Fail graphs whose edges reference undeclared nodes.
    #[arg(long)]
    pub strict: bool,

    /// How graphs are scheduled.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// Per-graph wall-clock budget in milliseconds.
    #[arg(long = "graph-deadline-ms", value_parser = clap::value_parser!(u64))]
    pub graph_deadline_ms: Option<u64>,
}

/// Scheduling choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Parallel when compiled in, otherwise sequential.
    Auto,
    /// One graph at a time.
    Sequential,
    /// Graphs on the rayon pool.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading the input or writing the report.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input was not valid JSON.
    #[error("{}invalid JSON: {source}", describe(.path.as_deref()))]
    Json {
        /// Document path, when read from disk.
        path: Option<PathBuf>,
        /// Decoder diagnostic.
        #[source]
        source: serde_json::Error,
    },
    /// The input was JSON but not a batch document.
    #[error("{}{reason}", describe(.path.as_deref()))]
    InvalidDocument {
        /// Document path, when read from disk.
        path: Option<PathBuf>,
        /// What was wrong with the document.
        reason: String,
    },
    /// Writing the report to stdout failed.
    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),
    /// The runner configuration was rejected.
    #[error(transparent)]
    Core(#[from] ConfigError),
}

fn describe(path: Option<&Path>) -> String {
    path.map(|p| format!("`{}`: ", p.display()))
        .unwrap_or_default()
}

impl CliError {
    /// Stable machine-readable code for logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Json { .. } => "CLI_JSON",
            Self::InvalidDocument { .. } => "CLI_INVALID_DOCUMENT",
            Self::Write(_) => "CLI_WRITE",
            Self::Core(core) => core.code().as_str(),
        }
    }

    /// Attaches the document path to decoding errors.
    #[must_use]
    pub(crate) fn at(self, document: &Path) -> Self {
        match self {
            Self::Json { path: None, source } => Self::Json {
                path: Some(document.to_path_buf()),
                source,
            },
            Self::InvalidDocument { path: None, reason } => Self::InvalidDocument {
                path: Some(document.to_path_buf()),
                reason,
            },
            other => other,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Assembled report.
    pub document: OutputDocument,
    /// Requested rendering.
    pub format: OutputFormat,
    /// Destination file; stdout when `None`.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or the runner
/// configuration is invalid. Individual graph failures are reported inside
/// the summary instead.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, RunCommand, StrategyArg, run_cli};
/// # use arbor_cli::document::OutputFormat;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"{"graphs":[{"id":1,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":3}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///         format: OutputFormat::Json,
///         strict: false,
///         strategy: StrategyArg::Sequential,
///         graph_deadline_ms: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.document.results[0].kruskal.total_cost, 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = %command.input.display(), strict = command.strict, strategy = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let runner = build_runner(&command)?;
    Span::current().record("strategy", field::debug(runner.execution_strategy()));

    let parsed = read_document(&command.input)?;
    let batch = runner.run(&parsed.graphs);
    let document = OutputDocument::assemble(batch, &parsed.positions, &parsed.failures);

    info!(
        entries = parsed.entries(),
        results = document.results.len(),
        failures = document.failures.len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        document,
        format: command.format,
        output: command.output,
    })
}

pub(super) fn build_runner(command: &RunCommand) -> Result<BatchRunner, CliError> {
    let policy = if command.strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::Lenient
    };
    let mut builder = BatchRunnerBuilder::new()
        .with_validation(policy)
        .with_execution_strategy(command.strategy.into());
    if let Some(ms) = command.graph_deadline_ms {
        builder = builder.with_graph_deadline(Duration::from_millis(ms));
    }
    Ok(builder.build()?)
}

/// Writes the report to its destination: the `--output` file when given,
/// otherwise `stdout`.
///
/// # Errors
/// Returns [`CliError::Io`] when the output file cannot be written and
/// [`CliError::Write`] when `stdout` fails.
#[instrument(name = "cli.deliver", err, skip(summary, stdout), fields(format = ?summary.format))]
pub fn deliver(summary: &ExecutionSummary, stdout: impl Write) -> Result<(), CliError> {
    match &summary.output {
        Some(path) => {
            let io_error = |source| CliError::Io {
                path: path.clone(),
                source,
            };
            let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
            render(&summary.document, summary.format, &mut writer).map_err(io_error)?;
            writer.flush().map_err(io_error)?;
            info!(path = %path.display(), "report written");
            Ok(())
        }
        None => {
            let mut writer = BufWriter::new(stdout);
            render(&summary.document, summary.format, &mut writer).map_err(CliError::Write)?;
            writer.flush().map_err(CliError::Write)
        }
    }
}
