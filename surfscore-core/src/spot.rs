//! Per-spot configuration: orientation, tide preference and ideal bands.
//!
//! A [`SpotProfile`] is supplied by the caller on every request. The default
//! profile describes Biarritz Grande Plage, the reference spot used across
//! the workspace.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which part of the tide a spot works best on.
///
/// # Examples
/// ```
/// use surfscore_core::TidePreference;
///
/// let preference: TidePreference = "High".parse().expect("valid preference");
/// assert_eq!(preference, TidePreference::High);
/// assert_eq!(TidePreference::Mid.to_string(), "mid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TidePreference {
    /// Lower heights score higher.
    Low,
    /// Heights near the middle of the full span score highest.
    #[default]
    Mid,
    /// Higher heights score higher.
    High,
}

impl TidePreference {
    /// Return the preference as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TidePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TidePreference {
    type Err = SpotProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "high" => Ok(Self::High),
            _ => Err(SpotProfileError::UnknownTidePreference {
                value: s.to_owned(),
            }),
        }
    }
}

/// Inclusive `[min, max]` band of ideal values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdealRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl IdealRange {
    /// Build a range from its bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    const fn is_ordered(self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Tide-proxy height thresholds shared by tide scoring and band labelling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TideBounds {
    /// Heights at or below this value are low tide.
    pub low_max: f64,
    /// Lower edge of the high-tide window.
    pub high_min: f64,
    /// Upper edge of the high-tide window.
    pub high_max: f64,
    /// Full tidal span used by the mid-tide preference.
    pub full_span: f64,
}

impl TideBounds {
    /// Midpoint of the high-tide window.
    #[must_use]
    pub fn high_midpoint(&self) -> f64 {
        f64::midpoint(self.high_min, self.high_max)
    }

    fn validate(&self) -> Result<(), SpotProfileError> {
        let values = [self.low_max, self.high_min, self.high_max, self.full_span];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(SpotProfileError::NonFinite { field: "tide" });
        }
        if self.full_span < 0.0 {
            return Err(SpotProfileError::NegativeTideSpan {
                full_span: self.full_span,
            });
        }
        if self.low_max > self.high_min || self.high_min > self.high_max {
            return Err(SpotProfileError::InvertedTideBounds {
                low_max: self.low_max,
                high_min: self.high_min,
                high_max: self.high_max,
            });
        }
        Ok(())
    }
}

impl Default for TideBounds {
    fn default() -> Self {
        Self {
            low_max: 0.8,
            high_min: 0.8,
            high_max: 1.8,
            full_span: 1.6,
        }
    }
}

/// Scoring configuration for one surf spot.
///
/// # Examples
/// ```
/// use surfscore_core::{SpotProfile, TidePreference};
///
/// let profile = SpotProfile {
///     orientation_deg: 270.0,
///     tide_preference: TidePreference::Low,
///     ..SpotProfile::default()
/// };
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpotProfile {
    /// Compass bearing the spot faces.
    pub orientation_deg: f64,
    /// Preferred tide state.
    pub tide_preference: TidePreference,
    /// Ideal significant wave height, in metres.
    pub ideal_height: IdealRange,
    /// Ideal wave period, in seconds.
    pub ideal_period: IdealRange,
    /// Tide-proxy thresholds.
    pub tide: TideBounds,
}

impl SpotProfile {
    /// Check the profile for values the scoring pipeline cannot use.
    ///
    /// # Errors
    /// Returns [`SpotProfileError`] when a value is not finite, an ideal range
    /// is inverted, or the tide bounds overlap in the wrong order
    /// (`low_max > high_min` or `high_min > high_max`).
    pub fn validate(&self) -> Result<(), SpotProfileError> {
        if !self.orientation_deg.is_finite() {
            return Err(SpotProfileError::NonFinite {
                field: "orientation",
            });
        }
        if !self.ideal_height.is_ordered() {
            return Err(SpotProfileError::InvalidRange {
                field: "ideal height",
                min: self.ideal_height.min,
                max: self.ideal_height.max,
            });
        }
        if !self.ideal_period.is_ordered() {
            return Err(SpotProfileError::InvalidRange {
                field: "ideal period",
                min: self.ideal_period.min,
                max: self.ideal_period.max,
            });
        }
        self.tide.validate()
    }
}

impl Default for SpotProfile {
    fn default() -> Self {
        Self {
            orientation_deg: 300.0,
            tide_preference: TidePreference::Mid,
            ideal_height: IdealRange::new(0.8, 2.2),
            ideal_period: IdealRange::new(8.0, 14.0),
            tide: TideBounds::default(),
        }
    }
}

/// Errors raised while parsing or validating a [`SpotProfile`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpotProfileError {
    /// A tide preference string was not `low`, `mid` or `high`.
    #[error("unknown tide preference '{value}' (expected low, mid or high)")]
    UnknownTidePreference {
        /// Rejected input.
        value: String,
    },
    /// A configured value was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending setting.
        field: &'static str,
    },
    /// An ideal range had `min > max` or non-finite bounds.
    #[error("{field} range {min}–{max} is invalid")]
    InvalidRange {
        /// Name of the offending range.
        field: &'static str,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The full tidal span was negative.
    #[error("tide full span {full_span} must not be negative")]
    NegativeTideSpan {
        /// Configured span.
        full_span: f64,
    },
    /// Tide bounds must satisfy `low_max <= high_min <= high_max`.
    #[error("tide bounds must satisfy low_max <= high_min <= high_max (got {low_max}, {high_min}, {high_max})")]
    InvertedTideBounds {
        /// Configured low-tide ceiling.
        low_max: f64,
        /// Configured high-tide floor.
        high_min: f64,
        /// Configured high-tide ceiling.
        high_max: f64,
    },
}
