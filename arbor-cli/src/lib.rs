//! Support library for the arbor CLI binary.
//!
//! Re-exports the CLI, document and logging modules so doctests and
//! integration tests can exercise the command pipeline without forking a
//! subprocess.

pub mod cli;
pub mod document;
pub mod logging;
