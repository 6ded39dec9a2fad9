use proptest::prelude::*;

use super::*;

#[test]
fn starts_at_zero() {
	let extremes = RunningExtremes::new();
	assert_eq!((extremes.best(), extremes.worst()), (0, 0));
	assert_eq!(extremes, RunningExtremes::default());
}

#[test]
fn observe_widens_both_ends() {
	let mut extremes = RunningExtremes::new();
	extremes.observe_all([3, -4, 12, -1, 7]);
	assert_eq!((extremes.best(), extremes.worst()), (12, -4));
}

#[test]
fn all_positive_values_keep_worst_at_zero() {
	let mut extremes = RunningExtremes::new();
	extremes.observe_all([5, 8]);
	assert_eq!(extremes.worst(), 0);
}

#[test]
fn reset_collapses_to_zero() {
	let mut extremes = RunningExtremes::new();
	extremes.observe_all([20, -20]);
	extremes.reset();
	assert_eq!(extremes, RunningExtremes::new());
}

proptest! {
	#[test]
	fn prop_extremes_only_widen(values in proptest::collection::vec(any::<i32>(), 0..64)) {
		let mut extremes = RunningExtremes::new();
		for value in values {
			let before = extremes;
			extremes.observe(value);
			prop_assert!(extremes.best() >= before.best());
			prop_assert!(extremes.worst() <= before.worst());
			prop_assert!(extremes.best() >= value && extremes.worst() <= value);
		}
	}
}
