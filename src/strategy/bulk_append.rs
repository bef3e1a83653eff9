use std::marker::PhantomData;

use super::{ConstructionStrategy, STRIDE};
use crate::builder::{ArrowInt64Builder, ColumnarBuilder};
use crate::error::TrialError;

/// Base pattern appended by [`BulkAppend`]. Slot 0 is replaced by the trial value.
pub const PATTERN: [i64; STRIDE] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Grows a fresh builder through repeated small bulk appends.
///
/// Each repetition creates a builder, hints the final capacity, and appends
/// [`PATTERN`] (with slot 0 set to the trial value) `size / 8` times, followed
/// by the `size % 8` prefix of the pattern. The result holds exactly `size`
/// elements.
///
/// # Examples
///
/// ```rust
/// use columnar_bench::strategy::{BulkAppend, ConstructionStrategy};
///
/// let mut strategy: BulkAppend = BulkAppend::default();
/// let array = strategy.construct(10, 42).unwrap();
/// assert_eq!(&array.values()[..], &[42, 1, 2, 3, 4, 5, 6, 7, 42, 1]);
/// ```
#[derive(Debug)]
pub struct BulkAppend<B = ArrowInt64Builder> {
    builder: PhantomData<fn() -> B>,
}

impl<B> Default for BulkAppend<B> {
    fn default() -> Self {
        Self {
            builder: PhantomData,
        }
    }
}

impl<B: ColumnarBuilder> ConstructionStrategy for BulkAppend<B> {
    const NAME: &'static str = "bulk_append";

    type Output = B::Array;

    #[allow(clippy::cast_possible_wrap)]
    fn construct(&mut self, size: usize, trial: u64) -> Result<B::Array, TrialError> {
        let mut builder = B::default();
        builder.resize(size);

        let mut pattern = PATTERN;
        pattern[0] = trial as i64;

        for _ in 0..size / STRIDE {
            builder.append_bulk(&pattern);
        }
        builder.append_bulk(&pattern[..size % STRIDE]);

        Ok(builder.finish()?)
    }
}
