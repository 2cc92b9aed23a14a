//! Builder utilities for configuring batch MST runs.
//!
//! Exposes the execution strategy and validation policy selection surface and
//! the builder validation used before constructing [`BatchRunner`] instances.

use std::time::Duration;

use crate::{Result, error::ConfigError, runner::BatchRunner};

/// Indicates how [`BatchRunner`] schedules graphs when [`BatchRunner::run`] is
/// invoked.
///
/// `Auto` resolves deterministically: it selects the rayon pool when the
/// `parallel` feature is compiled in and the sequential loop otherwise.
///
/// # Examples
/// ```
/// use arbor_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select the best available scheduler.
    Auto,
    /// Process one graph at a time, Prim before Kruskal.
    Sequential,
    /// Process graphs on the rayon pool. Both engines of one graph still run
    /// back to back on the same worker.
    Parallel,
}

impl ExecutionStrategy {
    /// Resolves `Auto` against the current build.
    ///
    /// # Errors
    /// Returns [`ConfigError::BackendUnavailable`] when `Parallel` is
    /// requested without the `parallel` feature.
    pub(crate) fn resolve(self) -> Result<Self> {
        match self {
            #[cfg(feature = "parallel")]
            Self::Auto | Self::Parallel => Ok(Self::Parallel),
            #[cfg(not(feature = "parallel"))]
            Self::Auto => Ok(Self::Sequential),
            #[cfg(not(feature = "parallel"))]
            Self::Parallel => Err(ConfigError::BackendUnavailable {
                requested: Self::Parallel,
            }),
            Self::Sequential => Ok(Self::Sequential),
        }
    }
}

/// How the runner treats edges that reference undeclared nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Ignore dangling edges and report them as warnings.
    #[default]
    Lenient,
    /// Fail the graph with [`crate::MstError::MalformedGraphReference`].
    Strict,
}

/// Configures and constructs [`BatchRunner`] instances.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use arbor_core::{BatchRunnerBuilder, ExecutionStrategy, ValidationPolicy};
///
/// let runner = BatchRunnerBuilder::new()
///     .with_validation(ValidationPolicy::Strict)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .with_graph_deadline(Duration::from_secs(2))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(runner.validation(), ValidationPolicy::Strict);
/// assert_eq!(runner.execution_strategy(), ExecutionStrategy::Sequential);
/// assert_eq!(runner.graph_deadline(), Some(Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunnerBuilder {
    validation: ValidationPolicy,
    execution_strategy: ExecutionStrategy,
    graph_deadline: Option<Duration>,
}

impl Default for BatchRunnerBuilder {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::Lenient,
            execution_strategy: ExecutionStrategy::Auto,
            graph_deadline: None,
        }
    }
}

impl BatchRunnerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{BatchRunnerBuilder, ExecutionStrategy, ValidationPolicy};
    ///
    /// let builder = BatchRunnerBuilder::new();
    /// assert_eq!(builder.validation(), ValidationPolicy::Lenient);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// assert_eq!(builder.graph_deadline(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how dangling edge references are treated.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{BatchRunnerBuilder, ValidationPolicy};
    ///
    /// let builder = BatchRunnerBuilder::new().with_validation(ValidationPolicy::Strict);
    /// assert_eq!(builder.validation(), ValidationPolicy::Strict);
    /// ```
    #[must_use]
    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.validation = policy;
        self
    }

    /// Returns the configured validation policy.
    #[must_use]
    pub fn validation(&self) -> ValidationPolicy {
        self.validation
    }

    /// Sets the execution strategy to use when running a batch.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{BatchRunnerBuilder, ExecutionStrategy};
    ///
    /// let builder =
    ///     BatchRunnerBuilder::new().with_execution_strategy(ExecutionStrategy::Sequential);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Sets a wall-clock budget for each graph.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    ///
    /// use arbor_core::BatchRunnerBuilder;
    ///
    /// let builder = BatchRunnerBuilder::new().with_graph_deadline(Duration::from_millis(250));
    /// assert_eq!(builder.graph_deadline(), Some(Duration::from_millis(250)));
    /// ```
    #[must_use]
    pub fn with_graph_deadline(mut self, deadline: Duration) -> Self {
        self.graph_deadline = Some(deadline);
        self
    }

    /// Returns the configured per-graph budget, if any.
    #[must_use]
    pub fn graph_deadline(&self) -> Option<Duration> {
        self.graph_deadline
    }

    /// Validates the configuration and constructs a [`BatchRunner`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDeadline`] for a zero deadline and
    /// [`ConfigError::BackendUnavailable`] when the requested strategy is not
    /// compiled into this build.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{BatchRunnerBuilder, ValidationPolicy};
    ///
    /// let runner = BatchRunnerBuilder::new().build().expect("configuration is valid");
    /// assert_eq!(runner.validation(), ValidationPolicy::Lenient);
    /// ```
    pub fn build(self) -> Result<BatchRunner> {
        if let Some(deadline) = self.graph_deadline
            && deadline.is_zero()
        {
            return Err(ConfigError::InvalidDeadline { got: deadline });
        }
        let strategy = self.execution_strategy.resolve()?;

        Ok(BatchRunner::new(
            self.validation,
            strategy,
            self.graph_deadline,
        ))
    }
}
