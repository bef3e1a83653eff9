//! Geometric sweep of input sizes.
//!
//! Every strategy is benchmarked over the same [`SizeRange`], so results are
//! directly comparable at each size point.
//!
//! The expansion mirrors the usual benchmark-driver range rule: the minimum,
//! every power of the multiplier strictly between the bounds, then the
//! maximum.
//!
//! # Examples
//!
//! ```rust
//! use columnar_bench::sweep::SizeRange;
//!
//! let sizes = SizeRange::default().sizes();
//! assert_eq!(sizes, vec![2048, 4096, 32768, 262_144, 2_097_152, 16_777_216]);
//! ```

use crate::error::SweepError;

/// Smallest benchmarked element count.
pub const MIN_SIZE: usize = 2048;

/// Largest benchmarked element count.
pub const MAX_SIZE: usize = 16 * 1024 * 1024;

/// Step between consecutive powers in the sweep.
pub const DEFAULT_MULTIPLIER: usize = 8;

/// An inclusive, geometric range of element counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    minimum: usize,
    maximum: usize,
    multiplier: usize,
}

impl SizeRange {
    /// Creates a range between `minimum` and `maximum` with the default multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::ZeroMinimum`] if `minimum` is zero and
    /// [`SweepError::InvertedBounds`] if `minimum > maximum`.
    pub const fn new(minimum: usize, maximum: usize) -> Result<Self, SweepError> {
        if minimum == 0 {
            return Err(SweepError::ZeroMinimum);
        }
        if minimum > maximum {
            return Err(SweepError::InvertedBounds { minimum, maximum });
        }
        Ok(Self {
            minimum,
            maximum,
            multiplier: DEFAULT_MULTIPLIER,
        })
    }

    /// Returns a copy of this range using `multiplier` as the geometric step.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::Multiplier`] if `multiplier < 2`.
    pub const fn with_multiplier(self, multiplier: usize) -> Result<Self, SweepError> {
        if multiplier < 2 {
            return Err(SweepError::Multiplier(multiplier));
        }
        Ok(Self { multiplier, ..self })
    }

    /// Returns the minimum bound.
    #[inline]
    #[must_use]
    pub const fn minimum(&self) -> usize {
        self.minimum
    }

    /// Returns the maximum bound.
    #[inline]
    #[must_use]
    pub const fn maximum(&self) -> usize {
        self.maximum
    }

    /// Returns the geometric step.
    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Expands the range into its ascending sequence of sizes.
    ///
    /// The result always starts with the minimum and ends with the maximum,
    /// and contains no duplicates.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![self.minimum];
        if self.minimum == self.maximum {
            return sizes;
        }

        let mut power: usize = 1;
        while power < self.maximum {
            if power > self.minimum {
                sizes.push(power);
            }
            match power.checked_mul(self.multiplier) {
                Some(next) => power = next,
                None => break,
            }
        }

        sizes.push(self.maximum);
        sizes
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            minimum: MIN_SIZE,
            maximum: MAX_SIZE,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}
