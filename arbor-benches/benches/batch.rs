//! Batch runner benchmarks comparing sequential and rayon scheduling.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use arbor_benches::{error::BenchSetupError, graphs::generate_batch, params::BatchBenchParams};
use arbor_core::{BatchRunnerBuilder, ConfigError, ExecutionStrategy};

/// Seed used for all synthetic graph generation in this benchmark.
const SEED: u64 = 7;

/// Nodes per graph.
const NODE_COUNT: usize = 500;

/// Extra edges per node.
const DENSITY: usize = 4;

/// Batch sizes to benchmark.
const GRAPH_COUNTS: &[usize] = &[8, 64];

#[derive(Debug, thiserror::Error)]
enum SetupError {
    #[error(transparent)]
    Graphs(#[from] BenchSetupError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn batch_runner_impl(c: &mut Criterion) -> Result<(), SetupError> {
    let mut group = c.benchmark_group("batch_runner");
    group.sample_size(10);

    for &graph_count in GRAPH_COUNTS {
        let graphs = generate_batch(graph_count, NODE_COUNT, DENSITY, SEED)?;
        let params = BatchBenchParams {
            graph_count,
            node_count: NODE_COUNT,
        };

        for (name, strategy) in [
            ("sequential", ExecutionStrategy::Sequential),
            ("auto", ExecutionStrategy::Auto),
        ] {
            let runner = BatchRunnerBuilder::new()
                .with_execution_strategy(strategy)
                .build()?;
            group.bench_with_input(BenchmarkId::new(name, &params), &graphs, |b, graphs| {
                b.iter(|| runner.run(graphs));
            });
        }
    }

    group.finish();
    Ok(())
}

fn batch_runner(c: &mut Criterion) {
    if let Err(err) = batch_runner_impl(c) {
        panic!("batch_runner benchmark setup failed: {err}");
    }
}

criterion_group!(benches, batch_runner);
criterion_main!(benches);
