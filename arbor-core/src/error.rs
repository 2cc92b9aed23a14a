//! Error types for the arbor core library.
//!
//! [`MstError`] fails a single graph inside a batch; [`ConfigError`] rejects a
//! runner configuration before any graph is processed. Both expose stable
//! machine-readable codes for logs and output documents.

use std::{fmt, sync::Arc, time::Duration};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this value."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Failure of one graph's processing. Other graphs in the batch are
/// unaffected.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge names an endpoint that is not in the graph's node list and the
    /// runner was configured to reject such graphs.
    #[error("graph {graph_id}: edge {edge_index} references unknown node `{node}`")]
    MalformedGraphReference {
        /// Identifier of the offending graph.
        graph_id: i64,
        /// Position of the edge in the graph's edge list.
        edge_index: usize,
        /// The unknown endpoint label.
        node: Arc<str>,
    },
    /// Processing the graph took longer than the configured budget.
    #[error("graph {graph_id}: processing took {elapsed:?}, exceeding the {budget:?} deadline")]
    DeadlineExceeded {
        /// Identifier of the offending graph.
        graph_id: i64,
        /// Wall-clock time spent on the graph.
        elapsed: Duration,
        /// Configured per-graph budget.
        budget: Duration,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge referenced a node outside the node list.
        MalformedGraphReference => MalformedGraphReference { .. } => "MST_MALFORMED_GRAPH_REFERENCE",
        /// The per-graph deadline elapsed.
        DeadlineExceeded => DeadlineExceeded { .. } => "MST_DEADLINE_EXCEEDED",
    }
}

/// Rejected [`crate::BatchRunnerBuilder`] configuration.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    /// A per-graph deadline of zero would fail every graph.
    #[error("graph deadline must be positive (got {got:?})")]
    InvalidDeadline {
        /// The rejected deadline.
        got: Duration,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConfigError`] variants.
    enum ConfigErrorCode for ConfigError {
        /// A per-graph deadline of zero was supplied.
        InvalidDeadline => InvalidDeadline { .. } => "CONFIG_INVALID_DEADLINE",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "CONFIG_BACKEND_UNAVAILABLE",
    }
}

/// Convenient alias for results returned by the configuration API.
pub type Result<T> = core::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::malformed(
        MstError::MalformedGraphReference { graph_id: 1, edge_index: 0, node: Arc::from("X") },
        "MST_MALFORMED_GRAPH_REFERENCE"
    )]
    #[case::deadline(
        MstError::DeadlineExceeded {
            graph_id: 2,
            elapsed: Duration::from_millis(5),
            budget: Duration::from_millis(1),
        },
        "MST_DEADLINE_EXCEEDED"
    )]
    fn mst_error_codes_are_stable(#[case] error: MstError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
    }

    #[test]
    fn malformed_reference_message_names_the_node() {
        let error = MstError::MalformedGraphReference {
            graph_id: 7,
            edge_index: 3,
            node: Arc::from("Z"),
        };
        assert_eq!(
            error.to_string(),
            "graph 7: edge 3 references unknown node `Z`"
        );
    }

    #[rstest]
    #[case::deadline(ConfigError::InvalidDeadline { got: Duration::ZERO }, "CONFIG_INVALID_DEADLINE")]
    #[case::backend(
        ConfigError::BackendUnavailable { requested: ExecutionStrategy::Parallel },
        "CONFIG_BACKEND_UNAVAILABLE"
    )]
    fn config_error_codes_are_stable(#[case] error: ConfigError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
    }
}
