//! Alignment between the spot's facing bearing and the incoming swell.

use surfscore_core::OrientationLabel;

/// Affinity assumed when either bearing is unknown.
pub const NEUTRAL_AFFINITY: f64 = 0.5;

/// Lowest affinity labelled as good alignment.
pub const GOOD_ALIGNMENT_THRESHOLD: f64 = 0.7;

/// Lowest affinity labelled as average alignment.
pub const AVERAGE_ALIGNMENT_THRESHOLD: f64 = 0.4;

/// Smallest angle between two compass bearings, in `0.0..=180.0` degrees.
///
/// Robust to wraparound at 0°/360° and to bearings outside `0..360`.
///
/// # Examples
/// ```
/// use surfscore_scorer::angular_difference;
///
/// assert_eq!(angular_difference(350.0, 10.0), 20.0);
/// assert_eq!(angular_difference(90.0, 270.0), 180.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "bearing differences are computed with modular arithmetic"
)]
#[must_use]
pub fn angular_difference(spot_deg: f64, swell_deg: f64) -> f64 {
    ((swell_deg - spot_deg + 540.0).rem_euclid(360.0) - 180.0).abs()
}

/// Cosine similarity between spot and swell bearings, clamped to `0.0..=1.0`.
///
/// Swell arriving exactly on-axis scores `1.0`; anything 90° or more
/// off-axis scores `0.0`. Returns [`NEUTRAL_AFFINITY`] when either bearing is
/// absent or not finite.
///
/// # Examples
/// ```
/// use surfscore_scorer::affinity;
///
/// assert_eq!(affinity(Some(300.0), Some(300.0)), 1.0);
/// assert_eq!(affinity(Some(300.0), Some(120.0)), 0.0);
/// assert_eq!(affinity(Some(300.0), None), 0.5);
/// ```
#[must_use]
pub fn affinity(spot_deg: Option<f64>, swell_deg: Option<f64>) -> f64 {
    let finite = |deg: &f64| deg.is_finite();
    let (Some(spot), Some(swell)) = (spot_deg.filter(finite), swell_deg.filter(finite)) else {
        return NEUTRAL_AFFINITY;
    };
    angular_difference(spot, swell).to_radians().cos().max(0.0)
}

/// Label an affinity using the fixed alignment thresholds.
#[must_use]
pub fn orientation_label(affinity: Option<f64>) -> OrientationLabel {
    match affinity {
        None => OrientationLabel::Indeterminate,
        Some(value) if value >= GOOD_ALIGNMENT_THRESHOLD => OrientationLabel::Good,
        Some(value) if value >= AVERAGE_ALIGNMENT_THRESHOLD => OrientationLabel::Average,
        Some(_) => OrientationLabel::Poor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(300.0, 300.0, 0.0)]
    #[case(0.0, 359.0, 1.0)]
    #[case(10.0, 350.0, 20.0)]
    #[case(300.0, 30.0, 90.0)]
    #[case(-60.0, 300.0, 0.0)]
    fn angular_difference_wraps(#[case] spot: f64, #[case] swell: f64, #[case] expected: f64) {
        assert_eq!(angular_difference(spot, swell), expected);
    }

    #[rstest]
    #[case(None, Some(120.0))]
    #[case(Some(300.0), None)]
    #[case(None, None)]
    #[case(Some(300.0), Some(f64::NAN))]
    #[case(Some(f64::NAN), Some(300.0))]
    #[case(Some(300.0), Some(f64::INFINITY))]
    #[case(Some(f64::NEG_INFINITY), Some(120.0))]
    fn missing_bearings_are_neutral(#[case] spot: Option<f64>, #[case] swell: Option<f64>) {
        assert_eq!(affinity(spot, swell), NEUTRAL_AFFINITY);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn sixty_degrees_off_axis_is_half() {
        let value = affinity(Some(270.0), Some(330.0));
        assert!((value - 0.5).abs() < 1e-12, "expected 0.5, got {value}");
    }

    #[rstest]
    fn beyond_perpendicular_clamps_to_zero() {
        assert_eq!(affinity(Some(270.0), Some(45.0)), 0.0);
    }

    #[rstest]
    #[case(Some(1.0), OrientationLabel::Good)]
    #[case(Some(0.7), OrientationLabel::Good)]
    #[case(Some(0.69), OrientationLabel::Average)]
    #[case(Some(0.4), OrientationLabel::Average)]
    #[case(Some(0.39), OrientationLabel::Poor)]
    #[case(Some(0.0), OrientationLabel::Poor)]
    #[case(None, OrientationLabel::Indeterminate)]
    fn labels_follow_thresholds(#[case] value: Option<f64>, #[case] expected: OrientationLabel) {
        assert_eq!(orientation_label(value), expected);
    }
}
