//! Linear rescaling of bounded values.

/// Rescale `value` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// The value is clamped into the input range first, so readings outside the
/// ideal band saturate instead of extrapolating. A degenerate input range
/// (`in_min == in_max`) maps every value to `out_min`. Absent or non-finite
/// values yield `None`. Reversed output ranges (`out_min > out_max`) invert the
/// mapping.
///
/// # Examples
/// ```
/// use surfscore_scorer::scale;
///
/// assert_eq!(scale(Some(11.0), 8.0, 14.0, 0.0, 1.0), Some(0.5));
/// assert_eq!(scale(Some(20.0), 8.0, 14.0, 0.0, 1.0), Some(1.0));
/// assert_eq!(scale(Some(0.0), 0.0, 0.8, 1.0, 0.0), Some(1.0));
/// assert_eq!(scale(None, 0.0, 1.0, 0.0, 1.0), None);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "linear interpolation requires floating-point maths"
)]
#[must_use]
pub fn scale(
    value: Option<f64>,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> Option<f64> {
    let raw = value.filter(|candidate| candidate.is_finite())?;
    // `min`/`max` rather than `clamp`: reversed input bounds must not panic.
    let clamped = raw.min(in_max).max(in_min);
    let ratio = if in_max == in_min {
        0.0
    } else {
        (clamped - in_min) / (in_max - in_min)
    };
    Some(out_min + ratio * (out_max - out_min))
}

/// Rescale `value` from `[in_min, in_max]` into `[0, 1]`.
#[must_use]
pub fn scale_unit(value: Option<f64>, in_min: f64, in_max: f64) -> Option<f64> {
    scale(value, in_min, in_max, 0.0, 1.0)
}

/// Mean of the present values, or `None` when every value is absent.
///
/// # Examples
/// ```
/// use surfscore_scorer::mean_present;
///
/// assert_eq!(mean_present(&[Some(1.0), None, Some(0.5)]), Some(0.75));
/// assert_eq!(mean_present(&[None, None]), None);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging divides the sum by a small element count"
)]
#[must_use]
pub fn mean_present(values: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .flatten()
        .fold((0.0_f64, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}
