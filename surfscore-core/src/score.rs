//! Output of the scoring pipeline.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Qualitative reading of the directional affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrientationLabel {
    /// Swell arrives close to the spot's axis.
    Good,
    /// Swell arrives at a moderate angle.
    Average,
    /// Swell arrives far off-axis.
    Poor,
    /// No affinity could be computed.
    Indeterminate,
}

impl OrientationLabel {
    /// Return the human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good alignment",
            Self::Average => "average alignment",
            Self::Poor => "poor alignment",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for OrientationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive tide band derived from the tide-proxy height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TideBand {
    /// At or below the low-tide ceiling.
    Low,
    /// Between low and high tide.
    Mid,
    /// In the upper half of the high-tide window or above it.
    High,
    /// No tide reading was available.
    Unknown,
}

impl TideBand {
    /// Return the band as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TideBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Individual sub-scores, each in `0.0..=1.0` when present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubScores {
    /// Fit of the wave height inside the ideal band.
    pub height: Option<f64>,
    /// Fit of the wave period inside the ideal band.
    pub period: Option<f64>,
    /// Mean of the present height and period fits.
    pub range: Option<f64>,
    /// Directional affinity between spot and swell.
    pub orientation: Option<f64>,
    /// Tide-preference fit.
    pub tide: Option<f64>,
}

/// Result of scoring one observation against one spot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreResult {
    /// Overall score in `0..=100`, absent when no sub-score was available.
    pub overall: Option<u8>,
    /// Sub-scores feeding the overall value.
    pub sub_scores: SubScores,
    /// Label for the orientation sub-score.
    pub orientation_label: OrientationLabel,
    /// Descriptive band for the tide-proxy height.
    pub tide_band: TideBand,
}

impl ScoreResult {
    /// Report whether an overall score could be computed.
    #[must_use]
    pub const fn is_conclusive(&self) -> bool {
        self.overall.is_some()
    }
}
