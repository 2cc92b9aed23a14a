//! Benchmark setup error type.

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The weight range is empty.
    #[error("weight range {min}..={max} is empty")]
    EmptyWeightRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}
