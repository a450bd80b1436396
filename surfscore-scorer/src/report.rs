//! Fixed-format text report for a scored observation.
//!
//! The layout is consumed verbatim by display callers, so every label,
//! separator and fallback line is part of the output contract:
//!
//! ```text
//! === Ideal conditions (spot profile) ===
//! • Ideal swell range    : height 0.8–2.2 m, period 8.0–14.0 s
//! • Ideal orientation    : spot ~300° (NW)
//! • Ideal tide           : mid
//!
//! === Current conditions (first available hour) ===
//! • Local time           : 2025-10-16T00:00 (Europe/Paris)
//! • Swell direction      : 300.0°  → good alignment
//! • Tide (height proxy)  : 0.8 m  → band 'low' (preference: mid)
//! • Measured swell       : 2.2 m @ 12.0 s
//!
//! === Score ===
//! SCORE = 90/100  (weights: range=0.6, orientation=0.25, tide=0.15)
//! ```

use std::fmt::{self, Display, Formatter};

use surfscore_core::{Observation, ScoreResult, SpotProfile, Weights};

const LABEL_WIDTH: usize = 21;
const MISSING: &str = "N/A";

/// Borrowed view over everything the report prints.
///
/// Implements [`Display`]; [`render_report`] is the owned-string shortcut.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Observation that was scored.
    pub observation: &'a Observation,
    /// Profile of the spot it was scored against.
    pub spot: &'a SpotProfile,
    /// Weights used for the blend.
    pub weights: &'a Weights,
    /// Outcome of the scoring pipeline.
    pub result: &'a ScoreResult,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_ideal(f)?;
        writeln!(f)?;
        self.write_current(f)?;
        writeln!(f)?;
        self.write_score(f)
    }
}

impl Report<'_> {
    fn write_ideal(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spot = self.spot;
        writeln!(f, "=== Ideal conditions (spot profile) ===")?;
        line(
            f,
            "Ideal swell range",
            format_args!(
                "height {}–{} m, period {}–{} s",
                Decimal(spot.ideal_height.min),
                Decimal(spot.ideal_height.max),
                Decimal(spot.ideal_period.min),
                Decimal(spot.ideal_period.max),
            ),
        )?;
        line(
            f,
            "Ideal orientation",
            format_args!(
                "spot ~{}° ({})",
                spot.orientation_deg.trunc(),
                compass_point(spot.orientation_deg)
            ),
        )?;
        line(f, "Ideal tide", format_args!("{}", spot.tide_preference))
    }

    fn write_current(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let observation = self.observation;
        writeln!(f, "=== Current conditions (first available hour) ===")?;
        match observation.timezone.as_deref() {
            Some(timezone) => line(
                f,
                "Local time",
                format_args!("{} ({timezone})", observation.timestamp),
            )?,
            None => line(f, "Local time", format_args!("{}", observation.timestamp))?,
        }
        line(
            f,
            "Swell direction",
            format_args!(
                "{}  → {}",
                Reading::new(observation.wave_direction_deg, "°"),
                self.result.orientation_label
            ),
        )?;
        line(
            f,
            "Tide (height proxy)",
            format_args!(
                "{}  → band '{}' (preference: {})",
                Reading::new(observation.tide_height_m, " m"),
                self.result.tide_band,
                self.spot.tide_preference
            ),
        )?;
        line(
            f,
            "Measured swell",
            format_args!(
                "{} @ {}",
                Reading::new(observation.wave_height_m, " m"),
                Reading::new(observation.wave_period_s, " s")
            ),
        )
    }

    fn write_score(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Score ===")?;
        match self.result.overall {
            Some(overall) => writeln!(
                f,
                "SCORE = {overall}/100  (weights: range={}, orientation={}, tide={})",
                Decimal(self.weights.range),
                Decimal(self.weights.orientation),
                Decimal(self.weights.tide)
            ),
            None => writeln!(f, "SCORE = {MISSING} (insufficient data)"),
        }
    }
}

fn line(f: &mut Formatter<'_>, label: &str, value: fmt::Arguments<'_>) -> fmt::Result {
    writeln!(f, "• {label:<LABEL_WIDTH$}: {value}")
}

/// Shortest round-trip form with at least one fractional digit.
struct Decimal(f64);

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Optional measurement with its unit suffix; absent or non-finite values
/// print as a bare `N/A`.
struct Reading {
    value: Option<f64>,
    unit: &'static str,
}

impl Reading {
    const fn new(value: Option<f64>, unit: &'static str) -> Self {
        Self { value, unit }
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.value.filter(|value| value.is_finite()) {
            Some(value) => write!(f, "{}{}", Decimal(value), self.unit),
            None => f.write_str(MISSING),
        }
    }
}

/// Render the report as an owned string ending with a newline.
///
/// # Examples
/// ```
/// use surfscore_core::{Observation, SpotProfile, Weights};
/// use surfscore_scorer::{render_report, score_observation};
///
/// let spot = SpotProfile::default();
/// let weights = Weights::new(0.0, 0.0, 0.0);
/// let observation = Observation::new("2025-10-16T00:00");
/// let result = score_observation(&observation, &spot, &weights);
///
/// let report = render_report(&observation, &spot, &weights, &result);
/// assert!(report.ends_with("SCORE = N/A (insufficient data)\n"));
/// ```
#[must_use]
pub fn render_report(
    observation: &Observation,
    spot: &SpotProfile,
    weights: &Weights,
    result: &ScoreResult,
) -> String {
    Report {
        observation,
        spot,
        weights,
        result,
    }
    .to_string()
}

/// Name the 8-point compass sector containing `bearing_deg`.
///
/// Sectors are 45° wide and centred on the cardinal and intercardinal
/// points, so `300.0` is `NW` and `337.5` wraps to `N`. Bearings outside
/// `0..360` are normalised first; non-finite bearings yield `"N/A"`.
///
/// # Examples
/// ```
/// use surfscore_scorer::compass_point;
///
/// assert_eq!(compass_point(300.0), "NW");
/// assert_eq!(compass_point(-90.0), "W");
/// ```
#[must_use]
pub fn compass_point(bearing_deg: f64) -> &'static str {
    if !bearing_deg.is_finite() {
        return MISSING;
    }
    match bearing_deg.rem_euclid(360.0) {
        b if b < 22.5 => "N",
        b if b < 67.5 => "NE",
        b if b < 112.5 => "E",
        b if b < 157.5 => "SE",
        b if b < 202.5 => "S",
        b if b < 247.5 => "SW",
        b if b < 292.5 => "W",
        b if b < 337.5 => "NW",
        _ => "N",
    }
}
