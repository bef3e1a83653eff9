//! Sampling-profiler integration.
//!
//! A benchmark run is bracketed by a named region so an external sampling
//! profiler can attribute samples to a single strategy. The bracket is a
//! guard: [`SamplingRegion::open`] begins the region and dropping the guard
//! ends it, including during unwinding.
//!
//! # Examples
//!
//! ```rust
//! use columnar_bench::profiler::{SamplingRegion, TracingProfiler};
//!
//! let profiler = TracingProfiler::new("example");
//! {
//!     let _region = SamplingRegion::open(&profiler, "dynamic_array");
//!     assert_eq!(profiler.depth(), 1);
//! }
//! assert_eq!(profiler.depth(), 0);
//! ```

use std::cell::RefCell;
use std::time::Instant;

use tracing::span::EnteredSpan;

/// Start/stop interface of a sampling profiler.
///
/// One handle is constructed for the whole process and passed by reference to
/// every benchmark, so methods take `&self`.
pub trait SamplingProfiler {
    /// Begins sampling a region named `name`.
    fn begin_region(&self, name: &'static str);

    /// Ends the most recently begun region.
    fn end_region(&self);
}

// =============================================================================
// SamplingRegion
// =============================================================================

/// Guard that keeps a sampling region open until dropped.
#[must_use = "the region ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SamplingRegion<'p, P: SamplingProfiler + ?Sized> {
    profiler: &'p P,
    name: &'static str,
}

impl<'p, P: SamplingProfiler + ?Sized> SamplingRegion<'p, P> {
    /// Begins region `name` on `profiler`.
    pub fn open(profiler: &'p P, name: &'static str) -> Self {
        profiler.begin_region(name);
        Self { profiler, name }
    }

    /// Returns the region name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<P: SamplingProfiler + ?Sized> Drop for SamplingRegion<'_, P> {
    fn drop(&mut self) {
        self.profiler.end_region();
    }
}

// =============================================================================
// TracingProfiler
// =============================================================================

#[derive(Debug)]
struct ActiveRegion {
    name: &'static str,
    started: Instant,
    span: EnteredSpan,
}

/// [`SamplingProfiler`] that publishes regions as `tracing` spans.
///
/// Each region enters a `sampling_region` span carrying the profiler domain and
/// the region name, so any tracing-aware profiler or subscriber can attribute
/// work to a strategy. Regions nest; `end_region` closes the innermost one.
///
/// The handle is single-threaded (`!Sync`), matching the benchmark process.
#[derive(Debug)]
pub struct TracingProfiler {
    domain: &'static str,
    active: RefCell<Vec<ActiveRegion>>,
}

impl TracingProfiler {
    /// Creates a profiler handle for `domain`.
    #[must_use]
    pub const fn new(domain: &'static str) -> Self {
        Self {
            domain,
            active: RefCell::new(Vec::new()),
        }
    }

    /// Returns the domain all regions are reported under.
    #[inline]
    #[must_use]
    pub const fn domain(&self) -> &'static str {
        self.domain
    }

    /// Returns the number of currently open regions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.active.borrow().len()
    }
}

impl SamplingProfiler for TracingProfiler {
    fn begin_region(&self, name: &'static str) {
        let span = tracing::info_span!("sampling_region", domain = self.domain, region = name)
            .entered();
        tracing::trace!(region = name, "begin sampling region");
        self.active.borrow_mut().push(ActiveRegion {
            name,
            started: Instant::now(),
            span,
        });
    }

    fn end_region(&self) {
        let Some(region) = self.active.borrow_mut().pop() else {
            tracing::warn!(domain = self.domain, "end_region called without an open region");
            return;
        };
        tracing::debug!(
            region = region.name,
            elapsed_ms = region.started.elapsed().as_secs_f64() * 1000.0,
            "end sampling region"
        );
    }
}
