//! Tide-preference scoring and band labelling from the tide-proxy height.
//!
//! Both functions share the same [`TideBounds`] but are otherwise
//! independent: the band is purely descriptive and ignores the spot's
//! preference.

use surfscore_core::{TideBand, TideBounds, TidePreference};

use crate::normalise::scale;

/// Score a tide-proxy height against a preference, in `0.0..=1.0`.
///
/// - `Low`: `1.0` at zero height falling to `0.0` at `low_max`.
/// - `High`: `0.0` at `high_min` rising to `1.0` at `high_max`.
/// - `Mid`: triangular peak of `1.0` at half of `full_span`, `0.0` at either
///   end of `[0, full_span]`.
///
/// Returns `None` when the height is absent.
///
/// # Examples
/// ```
/// use surfscore_core::{TideBounds, TidePreference};
/// use surfscore_scorer::tide_score;
///
/// let bounds = TideBounds::default();
/// assert_eq!(tide_score(TidePreference::Mid, Some(0.8), &bounds), Some(1.0));
/// assert_eq!(tide_score(TidePreference::Low, Some(0.0), &bounds), Some(1.0));
/// assert_eq!(tide_score(TidePreference::High, None, &bounds), None);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the mid-tide preference folds the scaled height around 0.5"
)]
#[must_use]
pub fn tide_score(
    preference: TidePreference,
    height_m: Option<f64>,
    bounds: &TideBounds,
) -> Option<f64> {
    match preference {
        TidePreference::Low => scale(height_m, 0.0, bounds.low_max, 1.0, 0.0),
        TidePreference::High => scale(height_m, bounds.high_min, bounds.high_max, 0.0, 1.0),
        TidePreference::Mid => scale(height_m, 0.0, bounds.full_span, 0.0, 1.0)
            .map(|mapped| (1.0 - (mapped - 0.5).abs() * 2.0).max(0.0)),
    }
}

/// Classify a tide-proxy height into a descriptive band.
///
/// Absent or non-finite heights are unknown. Heights at or below `low_max`
/// are low. Inside the high window
/// `[high_min, high_max]` the upper half (from the midpoint up) is high and
/// the lower half mid. Heights beyond the configured bounds are high above
/// `high_max` and mid otherwise.
///
/// # Examples
/// ```
/// use surfscore_core::{TideBand, TideBounds};
/// use surfscore_scorer::tide_band;
///
/// let bounds = TideBounds::default();
/// assert_eq!(tide_band(Some(0.5), &bounds), TideBand::Low);
/// assert_eq!(tide_band(Some(1.0), &bounds), TideBand::Mid);
/// assert_eq!(tide_band(Some(1.5), &bounds), TideBand::High);
/// assert_eq!(tide_band(None, &bounds), TideBand::Unknown);
/// ```
#[must_use]
pub fn tide_band(height_m: Option<f64>, bounds: &TideBounds) -> TideBand {
    let Some(height) = height_m.filter(|h| h.is_finite()) else {
        return TideBand::Unknown;
    };
    if height <= bounds.low_max {
        return TideBand::Low;
    }
    if (bounds.high_min..=bounds.high_max).contains(&height) {
        return if height >= bounds.high_midpoint() {
            TideBand::High
        } else {
            TideBand::Mid
        };
    }
    if height > bounds.high_max {
        TideBand::High
    } else {
        TideBand::Mid
    }
}
