//! Criterion harness shared by the construction benchmark and its tests.

use columnar_bench::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput};

/// Benchmarks one strategy over every size of `sweep`.
///
/// Each size gets exactly one run: one strategy value, one sampling region
/// and one trial counter span every warm-up, sample and profiling call
/// criterion makes for that size. `make_strategy` is called once per size, so
/// a reused builder lives for the whole size-run.
pub fn benchmark_strategy<P, S, F>(
    criterion: &mut Criterion,
    profiler: &P,
    sweep: &SizeRange,
    reports: &mut Vec<RunReport>,
    mut make_strategy: F,
) where
    P: SamplingProfiler + ?Sized,
    S: ConstructionStrategy,
    F: FnMut() -> S,
{
    let runner = TrialRunner::new(profiler);
    let mut group = criterion.benchmark_group(S::NAME);
    // The largest size moves 128 MiB per repetition.
    group.sample_size(10);

    for size in sweep.sizes() {
        group.throughput(Throughput::Elements(size as u64));
        let mut strategy = make_strategy();
        let report = runner.run(&mut strategy, size, |repetition| {
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
                bencher.iter(&mut *repetition);
            });
        });
        reports.push(report);
    }

    group.finish();
}
