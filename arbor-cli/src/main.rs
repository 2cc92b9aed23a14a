//! CLI entry point for the arbor MST comparer.
//!
//! Parses command-line arguments with clap, compares both engines over the
//! input batch, writes the report and maps errors to exit codes. Logging is
//! initialised first so every later step can emit structured diagnostics.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use arbor_cli::{
    cli::{Cli, CliError, deliver, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    deliver(&summary, io::stdout().lock()).context("failed to deliver report")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .map(|cli_error| field::display(cli_error.code()));
        error!(error = %format!("{err:#}"), code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
