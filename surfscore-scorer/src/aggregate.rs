//! Weighted blending of sub-scores into the overall 0-100 score.

use surfscore_core::Weights;

use crate::normalise::mean_present;

/// Combine the height and period scores into the swell-range score.
///
/// Uses whichever of the two is present; `None` when both are absent.
#[must_use]
pub fn range_score(height: Option<f64>, period: Option<f64>) -> Option<f64> {
    mean_present(&[height, period])
}

/// Blend the present sub-scores into an integer score out of 100.
///
/// Absent components drop out and the remaining weights are renormalised,
/// so a missing tide reading does not drag the score towards zero. The
/// weighted mean is rounded half-to-even and clamped to `0..=100`.
///
/// Returns `None` when every component is absent or the weights of the
/// present components sum to zero.
///
/// # Examples
/// ```
/// use surfscore_core::Weights;
/// use surfscore_scorer::aggregate;
///
/// let weights = Weights::default();
/// assert_eq!(aggregate(Some(1.0), Some(1.0), Some(1.0), &weights), Some(100));
/// assert_eq!(aggregate(Some(0.5), Some(1.0), None, &weights), Some(65));
/// assert_eq!(aggregate(None, None, None, &weights), None);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "weighted means require floating-point maths"
)]
#[must_use]
pub fn aggregate(
    range: Option<f64>,
    orientation: Option<f64>,
    tide: Option<f64>,
    weights: &Weights,
) -> Option<u8> {
    let components = [
        (range, weights.range),
        (orientation, weights.orientation),
        (tide, weights.tide),
    ];
    let (weighted, used) = components
        .iter()
        .filter_map(|(value, weight)| value.map(|present| (present, *weight)))
        .fold((0.0_f64, 0.0_f64), |(weighted, used), (value, weight)| {
            (weighted + value * weight, used + weight)
        });
    if used <= 0.0 {
        return None;
    }
    let mean = weighted / used;
    mean.is_finite().then(|| to_percent(mean))
}

#[expect(
    clippy::float_arithmetic,
    reason = "conversion to a percentage multiplies by 100"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped to 0..=100 before casting"
)]
fn to_percent(mean: f64) -> u8 {
    (mean * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}
