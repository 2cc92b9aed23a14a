//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::document::OutputFormat;

use super::{CliError, RunCommand, StrategyArg, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_input(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_command_for(input: PathBuf) -> RunCommand {
    RunCommand {
        input,
        output: None,
        format: OutputFormat::Json,
        strict: false,
        strategy: StrategyArg::Sequential,
        graph_deadline_ms: None,
    }
}

pub(super) fn run_cli_expecting_error(command: RunCommand, panic_msg: &str) -> CliError {
    match run_cli(super::Cli {
        command: super::Command::Run(command),
    }) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
