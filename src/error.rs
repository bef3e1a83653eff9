//! Error types for sweeps, builder finalization, and trials.

use thiserror::Error;

// =============================================================================
// FinishError
// =============================================================================

/// Error returned when a columnar builder cannot be finalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinishError {
    /// The finished array contains null slots.
    ///
    /// None of the construction strategies append nulls, so a null slot means
    /// the builder handed back a buffer that was never fully written.
    #[error("finished array of length {len} contains {nulls} null slots")]
    UnexpectedNulls {
        /// Number of null slots in the finished array.
        nulls: usize,
        /// Length of the finished array.
        len: usize,
    },
}

// =============================================================================
// TrialError
// =============================================================================

/// Error raised by a single repetition of a construction strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrialError {
    /// Finalizing the columnar builder failed.
    #[error("builder finalization failed: {0}")]
    Finish(#[from] FinishError),

    /// The requested element count does not fit in a memory layout.
    #[error("a block of {len} i64 elements exceeds the maximum layout size")]
    Layout {
        /// Requested number of elements.
        len: usize,
    },

    /// The global allocator returned null.
    #[error("allocation of {bytes} bytes failed")]
    Allocation {
        /// Requested allocation size in bytes.
        bytes: usize,
    },
}

impl TrialError {
    /// Returns `true` if the error must abort the run.
    ///
    /// Memory errors are fatal because continuing would write through an
    /// invalid block. Finalization failures are recorded and the run
    /// continues.
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Layout { .. } | Self::Allocation { .. })
    }
}

// =============================================================================
// SweepError
// =============================================================================

/// Error returned when a size range is configured with invalid bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    /// The minimum bound is zero.
    #[error("minimum size must be at least 1")]
    ZeroMinimum,

    /// The minimum bound exceeds the maximum bound.
    #[error("minimum size {minimum} exceeds maximum size {maximum}")]
    InvertedBounds {
        /// Requested minimum.
        minimum: usize,
        /// Requested maximum.
        maximum: usize,
    },

    /// The multiplier would not grow the sequence.
    #[error("range multiplier must be at least 2, got {0}")]
    Multiplier(usize),
}
