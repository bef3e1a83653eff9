//! Trial runner.
//!
//! The timing driver owns the repetition loop and its convergence criterion.
//! [`TrialRunner::run`] only supplies the per-repetition body: it advances the
//! trial counter, runs the strategy once, and hands the materialized sequence
//! back to the driver, which black-boxes and drops it.
//!
//! # Failure handling
//!
//! - Finalization failures are recorded in [`RunReport::finish_failures`] and
//!   the repetition yields `None`. The loop continues and nothing is retried.
//! - Allocation and layout failures abort the run with a panic naming the
//!   strategy, size, and trial. The sampling region still closes.

use std::time::{Duration, Instant};

use crate::profiler::{SamplingProfiler, SamplingRegion};
use crate::strategy::ConstructionStrategy;
use crate::trial::TrialCounter;

/// Outcome of one strategy run at one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Sampling region name of the strategy.
    pub strategy: &'static str,
    /// Element count requested from every repetition.
    pub size: usize,
    /// Number of repetitions the driver executed.
    pub repetitions: u64,
    /// Number of repetitions whose finalization failed.
    pub finish_failures: u64,
    /// Wall time spent inside the sampling region.
    pub elapsed: Duration,
}

impl RunReport {
    const fn new(strategy: &'static str, size: usize) -> Self {
        Self {
            strategy,
            size,
            repetitions: 0,
            finish_failures: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns `true` if every repetition produced a finalized sequence.
    #[inline]
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.finish_failures == 0
    }
}

/// Runs construction strategies under a timing driver inside sampling regions.
#[derive(Debug)]
pub struct TrialRunner<'p, P: SamplingProfiler + ?Sized> {
    profiler: &'p P,
}

impl<'p, P: SamplingProfiler + ?Sized> TrialRunner<'p, P> {
    /// Creates a runner reporting regions to `profiler`.
    #[must_use]
    pub const fn new(profiler: &'p P) -> Self {
        Self { profiler }
    }

    /// Runs `strategy` at `size` for as many repetitions as `drive` requests.
    ///
    /// `drive` receives the repetition body and calls it once per timed
    /// repetition. One sampling region named after the strategy spans the
    /// whole call. Each call to `run` starts a fresh trial counter.
    ///
    /// # Panics
    ///
    /// Panics if a repetition fails with a fatal [`TrialError`](crate::error::TrialError)
    /// (allocation or layout failure).
    pub fn run<S, D>(&self, strategy: &mut S, size: usize, drive: D) -> RunReport
    where
        S: ConstructionStrategy,
        D: FnOnce(&mut dyn FnMut() -> Option<S::Output>),
    {
        let _region = SamplingRegion::open(self.profiler, S::NAME);
        let started = Instant::now();
        let mut counter = TrialCounter::new();
        let mut report = RunReport::new(S::NAME, size);

        let mut repetition = || {
            let trial = counter.advance();
            report.repetitions += 1;
            match strategy.construct(size, trial) {
                Ok(sequence) => Some(sequence),
                Err(error) if error.is_fatal() => {
                    tracing::error!(strategy = S::NAME, size, trial, %error, "aborting run");
                    panic!("{} at size {size}, trial {trial}: {error}", S::NAME);
                }
                Err(error) => {
                    report.finish_failures += 1;
                    tracing::warn!(strategy = S::NAME, size, trial, %error, "repetition failed");
                    None
                }
            }
        };
        drive(&mut repetition);

        report.elapsed = started.elapsed();
        tracing::debug!(
            strategy = report.strategy,
            size = report.size,
            repetitions = report.repetitions,
            finish_failures = report.finish_failures,
            "run complete"
        );
        report
    }
}
