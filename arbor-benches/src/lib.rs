//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for both MST engines and the batch runner.

pub mod error;
pub mod graphs;
pub mod params;
