//! Structured logging for the arbor CLI.
//!
//! Diagnostics go to `stderr` so JSON written to `stdout` stays parseable.
//! `RUST_LOG` selects the level (default `info`) and `ARBOR_LOG_FORMAT`
//! selects human or JSON lines. Events from crates using the `log` facade are
//! bridged into `tracing`.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable naming the log line format.
pub const LOG_FORMAT_ENV: &str = "ARBOR_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `ARBOR_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `ARBOR_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Line format of emitted diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Compact text intended for terminals.
    #[default]
    Human,
    /// One JSON object per line, with the active span list.
    Json,
}

impl LogFormat {
    /// Parses a format name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`LoggingError::UnsupportedFormat`] for unknown names.
    ///
    /// # Examples
    /// ```
    /// use arbor_cli::logging::LogFormat;
    ///
    /// assert_eq!(LogFormat::parse(" JSON ").expect("json is supported"), LogFormat::Json);
    /// assert!(LogFormat::parse("xml").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, LoggingError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }

    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => Self::parse(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Installs the global subscriber once; later calls return the format chosen
/// by the first.
///
/// If another subscriber already owns the global slot, that subscriber is
/// kept and the call still succeeds.
///
/// # Errors
/// Returns [`LoggingError`] when `ARBOR_LOG_FORMAT` is unreadable or names an
/// unsupported format.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }

    let format = LogFormat::from_env()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.compact().boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Best effort: a logger installed elsewhere keeps the `log` slot.
    let _ = LogTracer::init();
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    Ok(*INSTALLED.get_or_init(|| format))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn parse_accepts_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(LogFormat::parse(raw).expect("format must parse"), expected);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        match LogFormat::parse("XML") {
            Err(LoggingError::UnsupportedFormat { provided }) => assert_eq!(provided, "xml"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn init_logging_is_idempotent() {
        let first = init_logging().expect("logging must initialise");
        let second = init_logging().expect("subsequent calls must be no-ops");
        assert_eq!(first, second);
    }
}
