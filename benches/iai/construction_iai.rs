//! IAI-Callgrind benchmark for i64 sequence construction strategies.
//!
//! Measures instruction counts for every strategy at the two smallest sweep
//! points, giving instruction-level attribution of builder overhead without
//! running an external sampling profiler.
//!
//! # Data Sizes
//!
//! - **min**: 2048 (`MIN_SIZE`)
//! - **step**: 4096 (second point of the default sweep)
//!
//! # Design Notes
//!
//! - **Reused builder**: `bulk_indexed_unrolled_*` receives a strategy whose
//!   builder already completed one repetition, via `#[bench::...]` setup
//!   arguments, so only the fill and finalize of a warm builder is attributed
//!   to the benchmark.
//! - **Trial value**: every benchmark uses trial 1, the value of the first
//!   repetition in a timed run.

use columnar_bench::prelude::*;
use columnar_bench::strategy::RawSequence;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

use arrow_array::Int64Array;

const STEP_SIZE: usize = MIN_SIZE * 2;

fn setup_unrolled(size: usize) -> BulkIndexedUnrolled {
    let mut strategy: BulkIndexedUnrolled = BulkIndexedUnrolled::default();
    // One completed repetition, as after the first timed iteration.
    strategy.construct(size, 0).expect("warm-up repetition");
    strategy
}

#[library_benchmark]
#[bench::min(MIN_SIZE)]
#[bench::step(STEP_SIZE)]
fn bulk_append(size: usize) -> Option<Int64Array> {
    let mut strategy: BulkAppend = BulkAppend::default();
    black_box(strategy.construct(black_box(size), black_box(1)).ok())
}

#[library_benchmark]
#[bench::min(MIN_SIZE)]
#[bench::step(STEP_SIZE)]
fn bulk_indexed(size: usize) -> Option<Int64Array> {
    let mut strategy: BulkIndexed = BulkIndexed::default();
    black_box(strategy.construct(black_box(size), black_box(1)).ok())
}

#[library_benchmark]
#[bench::min(setup_unrolled(MIN_SIZE), MIN_SIZE)]
#[bench::step(setup_unrolled(STEP_SIZE), STEP_SIZE)]
fn bulk_indexed_unrolled(mut strategy: BulkIndexedUnrolled, size: usize) -> Option<Int64Array> {
    black_box(strategy.construct(black_box(size), black_box(1)).ok())
}

#[library_benchmark]
#[bench::min(MIN_SIZE)]
#[bench::step(STEP_SIZE)]
fn dynamic_array(size: usize) -> Option<Vec<i64>> {
    black_box(DynamicArray.construct(black_box(size), black_box(1)).ok())
}

#[library_benchmark]
#[bench::min(MIN_SIZE)]
#[bench::step(STEP_SIZE)]
fn raw_block_unrolled(size: usize) -> Option<RawSequence> {
    black_box(RawBlockUnrolled.construct(black_box(size), black_box(1)).ok())
}

library_benchmark_group!(
    name = construction_group;
    benchmarks =
        bulk_append,
        bulk_indexed,
        bulk_indexed_unrolled,
        dynamic_array,
        raw_block_unrolled
);

main!(library_benchmark_groups = construction_group);
