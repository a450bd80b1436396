//! Relative weighting of the three sub-scores.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multipliers applied to the range, orientation and tide sub-scores.
///
/// The weights do not have to sum to one: the aggregator renormalises over
/// the sub-scores that are actually present.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weights {
    /// Weight of the swell height/period fit.
    pub range: f64,
    /// Weight of the directional alignment.
    pub orientation: f64,
    /// Weight of the tide preference.
    pub tide: f64,
}

impl Weights {
    /// Build weights from the three multipliers.
    #[must_use]
    pub const fn new(range: f64, orientation: f64, tide: f64) -> Self {
        Self {
            range,
            orientation,
            tide,
        }
    }

    /// Validate the weights and return a copy.
    ///
    /// A zero total is accepted; it simply yields no overall score.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a weight is negative or not finite.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if !self.has_finite_values() {
            return Err(WeightsError::NonFinite);
        }
        if !self.has_non_negative_values() {
            return Err(WeightsError::Negative);
        }
        Ok(self)
    }

    const fn has_finite_values(self) -> bool {
        self.range.is_finite() && self.orientation.is_finite() && self.tide.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.range >= 0.0 && self.orientation >= 0.0 && self.tide >= 0.0
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            range: 0.60,
            orientation: 0.25,
            tide: 0.15,
        }
    }
}

/// Errors raised when weights cannot be used for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight was NaN or infinite.
    #[error("weights must be finite")]
    NonFinite,
    /// A weight was below zero.
    #[error("weights must not be negative")]
    Negative,
}
