//! Property-based tests for the scoring primitives.
//!
//! # Invariants tested
//!
//! - **Normalisation:** `scale` is monotonic inside its input range, constant
//!   outside it and always lands inside the output range.
//! - **Affinity:** on-axis swell scores one, perpendicular and opposing swell
//!   score zero, and full turns do not change the result.
//! - **Tide:** the mid-tide curve is symmetric around half the span.
//! - **Aggregation:** a single present sub-score sets the overall score.
#![expect(
    clippy::float_arithmetic,
    reason = "property checks compare floating point values"
)]

use proptest::prelude::*;
use surfscore_core::{TideBounds, TidePreference, Weights};
use surfscore_scorer::{affinity, aggregate, scale, tide_score};

const TOLERANCE: f64 = 1e-9;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < TOLERANCE
}

fn scaled(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    scale(Some(value), in_min, in_max, out_min, out_max)
        .unwrap_or_else(|| panic!("finite value {value} should scale"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: larger inputs never map to smaller outputs.
    #[test]
    fn scale_is_monotonic(
        in_min in -100.0_f64..100.0,
        width in 0.1_f64..100.0,
        first in -300.0_f64..300.0,
        second in -300.0_f64..300.0,
    ) {
        let in_max = in_min + width;
        let (low, high) = if first <= second { (first, second) } else { (second, first) };
        prop_assert!(scaled(low, in_min, in_max, 0.0, 1.0) <= scaled(high, in_min, in_max, 0.0, 1.0));
    }

    /// Property: outputs stay inside the output range, whichever way it runs.
    #[test]
    fn scale_stays_within_output_range(
        in_min in -100.0_f64..100.0,
        width in 0.0_f64..100.0,
        value in -1_000.0_f64..1_000.0,
        out_min in -10.0_f64..10.0,
        out_max in -10.0_f64..10.0,
    ) {
        let result = scaled(value, in_min, in_min + width, out_min, out_max);
        let (lower, upper) = if out_min <= out_max { (out_min, out_max) } else { (out_max, out_min) };
        prop_assert!(result >= lower - TOLERANCE && result <= upper + TOLERANCE);
    }

    /// Property: values outside the input range saturate at the nearest end.
    #[test]
    fn scale_is_constant_outside_input_range(
        in_min in -100.0_f64..100.0,
        width in 0.1_f64..100.0,
        overshoot in 0.001_f64..500.0,
    ) {
        let in_max = in_min + width;
        prop_assert_eq!(
            scaled(in_max + overshoot, in_min, in_max, 0.0, 1.0),
            scaled(in_max, in_min, in_max, 0.0, 1.0)
        );
        prop_assert_eq!(
            scaled(in_min - overshoot, in_min, in_max, 0.0, 1.0),
            scaled(in_min, in_min, in_max, 0.0, 1.0)
        );
    }

    /// Property: swell arriving along the spot's axis is perfectly aligned.
    #[test]
    fn on_axis_swell_scores_one(bearing in 0.0_f64..360.0) {
        prop_assert_eq!(affinity(Some(bearing), Some(bearing)), 1.0);
    }

    /// Property: perpendicular swell contributes nothing.
    #[test]
    fn perpendicular_swell_scores_zero(bearing in 0.0_f64..360.0) {
        prop_assert!(close(affinity(Some(bearing), Some(bearing + 90.0)), 0.0));
        prop_assert!(close(affinity(Some(bearing), Some(bearing - 90.0)), 0.0));
    }

    /// Property: swell from behind the beach is clamped to zero.
    #[test]
    fn opposing_swell_scores_zero(bearing in 0.0_f64..360.0) {
        prop_assert_eq!(affinity(Some(bearing), Some(bearing + 180.0)), 0.0);
    }

    /// Property: adding full turns to either bearing changes nothing.
    #[test]
    fn affinity_ignores_full_turns(
        spot in 0.0_f64..360.0,
        swell in 0.0_f64..360.0,
        turns in -3_i32..=3,
    ) {
        let shift = f64::from(turns) * 360.0;
        let base = affinity(Some(spot), Some(swell));
        prop_assert!(close(affinity(Some(spot + shift), Some(swell)), base));
        prop_assert!(close(affinity(Some(spot), Some(swell + shift)), base));
    }

    /// Property: affinity is always a valid sub-score.
    #[test]
    fn affinity_is_bounded(spot in -720.0_f64..720.0, swell in -720.0_f64..720.0) {
        let value = affinity(Some(spot), Some(swell));
        prop_assert!((0.0..=1.0).contains(&value));
    }

    /// Property: the mid-tide curve mirrors around half the full span.
    #[test]
    fn mid_tide_is_symmetric(full_span in 0.5_f64..5.0, fraction in 0.0_f64..=1.0) {
        let bounds = TideBounds { full_span, ..TideBounds::default() };
        let half = full_span / 2.0;
        let offset = half * fraction;
        let above = tide_score(TidePreference::Mid, Some(half + offset), &bounds);
        let below = tide_score(TidePreference::Mid, Some(half - offset), &bounds);
        prop_assert!(above.is_some() && below.is_some(), "mid tide should score both sides");
        let (upper, lower) = (above.unwrap_or_default(), below.unwrap_or_default());
        prop_assert!(close(upper, lower), "{upper} != {lower}");
    }

    /// Property: a lone sub-score sets the overall score regardless of its weight.
    #[test]
    fn single_sub_score_sets_overall(
        numerator in 0_u32..=64,
        weight in prop::sample::select(vec![0.25_f64, 0.5, 1.0, 2.0, 4.0]),
    ) {
        let sub_score = f64::from(numerator) / 64.0;
        let weights = Weights::new(weight, 0.3, 0.7);
        let overall = aggregate(Some(sub_score), None, None, &weights);
        prop_assert_eq!(
            overall.map(f64::from),
            Some((sub_score * 100.0).round_ties_even())
        );
    }
}
