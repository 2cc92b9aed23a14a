//! Property-based tests for the MST engines.
//!
//! Checks both engines against a sequential oracle, validates forest
//! structure (acyclicity, edge counts, component coverage) and confirms
//! re-runs are reproducible, across topologies with varied weight
//! distributions.

mod oracle;
mod properties;
mod strategies;
mod types;
