//! Operation counting and scoped timing shared by both engines.

use std::time::{Duration, Instant};

/// Deterministic tally of algorithm-defined unit operations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct OperationCounter(u64);

impl OperationCounter {
    pub(crate) fn tick(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub(crate) const fn total(self) -> u64 {
        self.0
    }
}

/// Monotonic stopwatch started on construction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
