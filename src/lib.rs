//! # columnar-bench
//!
//! A micro-benchmark harness measuring the cost of building a sequence of
//! `i64` values through a columnar array builder, compared with a plain
//! `Vec` and a raw manually-managed memory block.
//!
//! ## Overview
//!
//! - **Size sweep**: [`sweep::SizeRange`] produces the geometric sequence of
//!   element counts shared by every strategy.
//! - **Construction strategies**: [`strategy`] holds the five ways of
//!   materializing a sequence (bulk append, bulk indexed, bulk indexed with a
//!   reused builder, `Vec`, raw block).
//! - **Trial runner**: [`runner::TrialRunner`] hands a per-repetition closure
//!   to the timing driver and records a [`runner::RunReport`].
//! - **Profiling bracket**: [`profiler::SamplingRegion`] brackets each run so
//!   an external sampling profiler can attribute samples to a strategy.
//! - **Columnar builder**: [`builder::ColumnarBuilder`] is the narrow seam over
//!   Apache Arrow's `Int64Builder`.
//!
//! ## Example
//!
//! ```rust
//! use columnar_bench::prelude::*;
//!
//! let profiler = TracingProfiler::new("doc");
//! let runner = TrialRunner::new(&profiler);
//! let mut strategy = DynamicArray;
//!
//! let mut lengths = Vec::new();
//! let report = runner.run(&mut strategy, MIN_SIZE, |trial| {
//!     for _ in 0..3 {
//!         lengths.push(trial().map(|sequence| sequence.len()));
//!     }
//! });
//!
//! assert_eq!(report.repetitions, 3);
//! assert!(lengths.iter().all(|length| *length == Some(MIN_SIZE)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use columnar_bench::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::{ArrowInt64Builder, ColumnarBuilder};
    pub use crate::error::{FinishError, SweepError, TrialError};
    pub use crate::profiler::{SamplingProfiler, SamplingRegion, TracingProfiler};
    pub use crate::runner::{RunReport, TrialRunner};
    pub use crate::strategy::{
        BulkAppend, BulkIndexed, BulkIndexedUnrolled, ConstructionStrategy, DynamicArray,
        RawBlockUnrolled, StrategyKind,
    };
    pub use crate::sweep::{DEFAULT_MULTIPLIER, MAX_SIZE, MIN_SIZE, SizeRange};
    pub use crate::trial::TrialCounter;
}

pub mod builder;
pub mod error;
pub mod profiler;
pub mod runner;
pub mod strategy;
pub mod sweep;
pub mod trial;
