use super::{ConstructionStrategy, masked_value};
use crate::error::TrialError;

/// Pushes `(trial + i) % 8` one element at a time into a `Vec` reserved to `size`.
///
/// Establishes the cost of amortized-growth construction without a columnar
/// abstraction.
#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicArray;

impl ConstructionStrategy for DynamicArray {
    const NAME: &'static str = "dynamic_array";

    type Output = Vec<i64>;

    fn construct(&mut self, size: usize, trial: u64) -> Result<Vec<i64>, TrialError> {
        let mut sequence = Vec::with_capacity(size);
        for index in 0..size {
            sequence.push(masked_value(trial, index));
        }
        Ok(sequence)
    }
}
