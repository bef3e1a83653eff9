//! Per-run trial counter.

/// Monotonically increasing counter of repetitions within one run.
///
/// The counter feeds the values each strategy writes, so the optimizer cannot
/// prove the constructed sequence is constant across repetitions.
///
/// # Examples
///
/// ```rust
/// use columnar_bench::trial::TrialCounter;
///
/// let mut counter = TrialCounter::new();
/// assert_eq!(counter.advance(), 1);
/// assert_eq!(counter.advance(), 2);
/// assert_eq!(counter.current(), 2);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrialCounter(u64);

impl TrialCounter {
    /// Creates a counter that has not yet started a repetition.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Starts the next repetition and returns its trial value.
    #[inline]
    pub const fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Returns the trial value of the most recent repetition.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> u64 {
        self.0
    }
}
