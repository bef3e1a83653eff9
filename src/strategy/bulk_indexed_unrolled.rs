use super::{ConstructionStrategy, STRIDE, masked_value};
use crate::builder::{ArrowInt64Builder, ColumnarBuilder};
use crate::error::TrialError;

/// Indexed writes unrolled by eight into one builder reused across repetitions.
///
/// The builder is created with the strategy and lives for the whole size-run.
/// `finish` resets it, so every repetition starts from an empty builder but
/// never constructs a new one. Create a new strategy value per size-run.
///
/// # Examples
///
/// ```rust
/// use columnar_bench::strategy::{BulkIndexedUnrolled, ConstructionStrategy};
///
/// let mut strategy: BulkIndexedUnrolled = BulkIndexedUnrolled::default();
/// let first = strategy.construct(16, 1).unwrap();
/// let second = strategy.construct(16, 2).unwrap();
/// assert_eq!(first.value(0), 1);
/// assert_eq!(second.value(0), 2);
/// assert_eq!(second.value(7), 1);
/// ```
#[derive(Debug, Default)]
pub struct BulkIndexedUnrolled<B = ArrowInt64Builder> {
    builder: B,
}

impl<B: ColumnarBuilder> BulkIndexedUnrolled<B> {
    /// Creates the strategy around an existing builder.
    #[must_use]
    pub const fn with_builder(builder: B) -> Self {
        Self { builder }
    }

    /// Returns the reused builder.
    #[must_use]
    pub const fn builder(&self) -> &B {
        &self.builder
    }
}

impl<B: ColumnarBuilder> ConstructionStrategy for BulkIndexedUnrolled<B> {
    const NAME: &'static str = "bulk_indexed_unrolled";

    type Output = B::Array;

    fn construct(&mut self, size: usize, trial: u64) -> Result<B::Array, TrialError> {
        self.builder.append_empty(size);

        let lane = |offset| masked_value(trial, offset);
        let mut chunks = self.builder.values_mut().chunks_exact_mut(STRIDE);
        for chunk in &mut chunks {
            chunk[0] = lane(0);
            chunk[1] = lane(1);
            chunk[2] = lane(2);
            chunk[3] = lane(3);
            chunk[4] = lane(4);
            chunk[5] = lane(5);
            chunk[6] = lane(6);
            chunk[7] = lane(7);
        }
        for (offset, slot) in chunks.into_remainder().iter_mut().enumerate() {
            *slot = lane(offset);
        }

        Ok(self.builder.finish()?)
    }
}
