use std::marker::PhantomData;

use super::{ConstructionStrategy, masked_value};
use crate::builder::{ArrowInt64Builder, ColumnarBuilder};
use crate::error::TrialError;

/// Reserves every slot in one call on a fresh builder, then writes each slot
/// by index with `(trial + i) % 8`.
#[derive(Debug)]
pub struct BulkIndexed<B = ArrowInt64Builder> {
    builder: PhantomData<fn() -> B>,
}

impl<B> Default for BulkIndexed<B> {
    fn default() -> Self {
        Self {
            builder: PhantomData,
        }
    }
}

impl<B: ColumnarBuilder> ConstructionStrategy for BulkIndexed<B> {
    const NAME: &'static str = "bulk_indexed";

    type Output = B::Array;

    #[allow(clippy::needless_range_loop)]
    fn construct(&mut self, size: usize, trial: u64) -> Result<B::Array, TrialError> {
        let mut builder = B::default();
        builder.append_empty(size);

        let values = builder.values_mut();
        for index in 0..size {
            values[index] = masked_value(trial, index);
        }

        Ok(builder.finish()?)
    }
}
