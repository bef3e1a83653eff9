//! Construction strategies.
//!
//! Each strategy materializes `size` integers derived from the trial counter,
//! using its own allocation and fill discipline:
//!
//! | Strategy | Allocation | Fill | Buffer lifetime |
//! |---|---|---|---|
//! | [`BulkAppend`] | capacity hint on a fresh builder | 8-element pattern appended in bulk | per repetition |
//! | [`BulkIndexed`] | `append_empty(size)` on a fresh builder | indexed assignment per slot | per repetition |
//! | [`BulkIndexedUnrolled`] | `append_empty(size)` on a reused builder | indexed assignment, unrolled by 8 | per size-run |
//! | [`DynamicArray`] | `Vec::with_capacity(size)` | one `push` per element | per repetition |
//! | [`RawBlockUnrolled`] | raw allocation of `size * 8` bytes | direct writes, unrolled by 8 | per repetition |
//!
//! The reused builder of [`BulkIndexedUnrolled`] separates allocation cost
//! from fill cost and must stay the only strategy that keeps state across
//! repetitions. [`RawBlockUnrolled`] writes `trial + (i % 8)` while the
//! indexed strategies write `(trial + i) % 8`.

mod bulk_append;
mod bulk_indexed;
mod bulk_indexed_unrolled;
mod dynamic_array;
mod raw_block;

pub use bulk_append::{BulkAppend, PATTERN};
pub use bulk_indexed::BulkIndexed;
pub use bulk_indexed_unrolled::BulkIndexedUnrolled;
pub use dynamic_array::DynamicArray;
pub use raw_block::{RawBlock, RawBlockUnrolled, RawSequence};

use std::fmt;
use std::str::FromStr;

use crate::error::TrialError;

/// Width of the unrolled inner loops and of the bulk-append pattern.
pub const STRIDE: usize = 8;

/// One way of materializing a sequence of `i64`.
pub trait ConstructionStrategy {
    /// Sampling region name, unique per strategy.
    const NAME: &'static str;

    /// The materialized sequence handed to the driver.
    type Output;

    /// Builds a sequence of `size` elements for repetition `trial`.
    ///
    /// # Errors
    ///
    /// Returns a [`TrialError`] when finalization or allocation fails.
    fn construct(&mut self, size: usize, trial: u64) -> Result<Self::Output, TrialError>;
}

/// Value written at `index` by the modulo-8 strategies.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn masked_value(trial: u64, index: usize) -> i64 {
    (trial.wrapping_add(index as u64) & 7) as i64
}

// =============================================================================
// StrategyKind
// =============================================================================

/// Names every strategy, for filters and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// [`BulkAppend`]
    BulkAppend,
    /// [`BulkIndexed`]
    BulkIndexed,
    /// [`BulkIndexedUnrolled`]
    BulkIndexedUnrolled,
    /// [`DynamicArray`]
    DynamicArray,
    /// [`RawBlockUnrolled`]
    RawBlockUnrolled,
}

impl StrategyKind {
    /// Every strategy, in benchmark order.
    pub const ALL: [Self; 5] = [
        Self::BulkAppend,
        Self::BulkIndexed,
        Self::BulkIndexedUnrolled,
        Self::DynamicArray,
        Self::RawBlockUnrolled,
    ];

    /// Returns the sampling region name of the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BulkAppend => <BulkAppend as ConstructionStrategy>::NAME,
            Self::BulkIndexed => <BulkIndexed as ConstructionStrategy>::NAME,
            Self::BulkIndexedUnrolled => <BulkIndexedUnrolled as ConstructionStrategy>::NAME,
            Self::DynamicArray => DynamicArray::NAME,
            Self::RawBlockUnrolled => RawBlockUnrolled::NAME,
        }
    }

    /// Returns `true` if the strategy keeps its buffer across repetitions.
    #[must_use]
    pub const fn reuses_buffer(self) -> bool {
        matches!(self, Self::BulkIndexedUnrolled)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy `{0}`")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownStrategy(name.to_owned()))
    }
}
