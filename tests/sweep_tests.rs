//! Integration tests for the size sweep.

use columnar_bench::error::SweepError;
use columnar_bench::sweep::{MAX_SIZE, MIN_SIZE, SizeRange};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn test_default_sweep_points() {
    assert_eq!(
        SizeRange::default().sizes(),
        vec![2048, 4096, 32_768, 262_144, 2_097_152, 16_777_216]
    );
}

#[rstest]
fn test_default_sweep_is_bounded_by_constants() {
    let sizes = SizeRange::default().sizes();
    assert_eq!(sizes.first(), Some(&MIN_SIZE));
    assert_eq!(sizes.last(), Some(&MAX_SIZE));
}

#[rstest]
fn test_sweep_is_identical_across_calls() {
    let range = SizeRange::default();
    assert_eq!(range.sizes(), range.sizes());
}

#[rstest]
#[case(0, 10, SweepError::ZeroMinimum)]
#[case(10, 9, SweepError::InvertedBounds { minimum: 10, maximum: 9 })]
fn test_invalid_bounds_are_rejected(
    #[case] minimum: usize,
    #[case] maximum: usize,
    #[case] expected: SweepError,
) {
    assert_eq!(SizeRange::new(minimum, maximum), Err(expected));
}

#[rstest]
#[case(0)]
#[case(1)]
fn test_degenerate_multiplier_is_rejected(#[case] multiplier: usize) {
    assert_eq!(
        SizeRange::default().with_multiplier(multiplier),
        Err(SweepError::Multiplier(multiplier))
    );
}

#[rstest]
fn test_custom_multiplier() {
    let range = SizeRange::new(2, 100).unwrap().with_multiplier(2).unwrap();
    assert_eq!(range.sizes(), vec![2, 4, 8, 16, 32, 64, 100]);
}

proptest! {
    #[test]
    fn prop_sweep_is_strictly_ascending_and_bounded(
        minimum in 1usize..100_000,
        span in 0usize..10_000_000,
        multiplier in 2usize..16,
    ) {
        let maximum = minimum + span;
        let sizes = SizeRange::new(minimum, maximum)
            .unwrap()
            .with_multiplier(multiplier)
            .unwrap()
            .sizes();

        prop_assert_eq!(sizes.first(), Some(&minimum));
        prop_assert_eq!(sizes.last(), Some(&maximum));
        prop_assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
