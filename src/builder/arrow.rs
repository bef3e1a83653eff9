use arrow_array::Array;
use arrow_array::Int64Array;
use arrow_array::builder::{ArrayBuilder, Int64Builder};

use super::ColumnarBuilder;
use crate::error::FinishError;

/// [`ColumnarBuilder`] backed by Arrow's `Int64Builder`.
///
/// # Examples
///
/// ```rust
/// use arrow_array::Array;
/// use columnar_bench::builder::{ArrowInt64Builder, ColumnarBuilder};
///
/// let mut builder = ArrowInt64Builder::default();
/// builder.append_empty(4);
/// builder.values_mut()[2] = 7;
///
/// let array = builder.finish().unwrap();
/// assert_eq!(array.len(), 4);
/// assert_eq!(array.value(2), 7);
/// assert!(builder.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ArrowInt64Builder {
    inner: Int64Builder,
}

impl ArrowInt64Builder {
    /// Creates a builder with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Int64Builder::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the builder can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

impl ColumnarBuilder for ArrowInt64Builder {
    type Array = Int64Array;

    fn resize(&mut self, capacity: usize) {
        if self.inner.capacity() >= capacity {
            return;
        }
        let mut grown = Int64Builder::with_capacity(capacity);
        if !self.inner.is_empty() {
            // Carry the pending slots, nulls included, into the larger buffer.
            grown.extend(self.inner.finish().iter());
        }
        self.inner = grown;
    }

    #[inline]
    fn append_bulk(&mut self, values: &[i64]) {
        self.inner.append_slice(values);
    }

    #[inline]
    fn append_empty(&mut self, count: usize) {
        self.inner.append_value_n(0, count);
    }

    #[inline]
    fn values_mut(&mut self) -> &mut [i64] {
        self.inner.values_slice_mut()
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn finish(&mut self) -> Result<Int64Array, FinishError> {
        let array = self.inner.finish();
        match array.null_count() {
            0 => Ok(array),
            nulls => Err(FinishError::UnexpectedNulls {
                nulls,
                len: array.len(),
            }),
        }
    }
}
