//! Columnar builder seam.
//!
//! Strategies never touch Arrow directly. They go through [`ColumnarBuilder`],
//! which exposes only the operations the benchmarks measure:
//!
//! - [`resize`](ColumnarBuilder::resize): capacity hint
//! - [`append_bulk`](ColumnarBuilder::append_bulk): append a slice of values
//! - [`append_empty`](ColumnarBuilder::append_empty): append valid zeroed slots
//! - [`values_mut`](ColumnarBuilder::values_mut): indexed writes into appended slots
//! - [`finish`](ColumnarBuilder::finish): finalize into an immutable array
//!
//! [`ArrowInt64Builder`] is the production implementation.

mod arrow;

pub use arrow::ArrowInt64Builder;

use crate::error::FinishError;

/// A growable typed buffer of `i64` that finalizes into an immutable array.
///
/// `Default` constructs an empty builder. [`finish`](Self::finish) resets the
/// builder to empty, so a single instance can be reused across repetitions.
pub trait ColumnarBuilder: Default {
    /// The immutable array produced by [`finish`](Self::finish).
    type Array;

    /// Ensures the builder can hold at least `capacity` elements without
    /// reallocating.
    fn resize(&mut self, capacity: usize);

    /// Appends every element of `values`.
    fn append_bulk(&mut self, values: &[i64]);

    /// Appends `count` valid slots holding zero.
    fn append_empty(&mut self, count: usize);

    /// Returns the appended values for indexed assignment.
    fn values_mut(&mut self) -> &mut [i64];

    /// Returns the number of appended elements.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been appended since the last finish.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finalizes the appended elements into an array and resets the builder.
    ///
    /// # Errors
    ///
    /// Returns a [`FinishError`] if the finished array is not a fully valid
    /// sequence.
    fn finish(&mut self) -> Result<Self::Array, FinishError>;
}
