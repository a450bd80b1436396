//! End-to-end scoring of one observation against one spot.

use log::debug;
use surfscore_core::{
    ConditionScorer, Observation, ScoreResult, SpotProfile, SubScores, Weights, WeightsError,
};

use crate::{
    aggregate::{aggregate, range_score},
    direction::{affinity, orientation_label},
    normalise::scale_unit,
    tide::{tide_band, tide_score},
};

/// Score `observation` for `spot` using `weights`.
///
/// Height and period are rescaled against the spot's ideal ranges, the swell
/// bearing is compared with the spot's orientation and the tide proxy is
/// scored against the spot's preference. Missing fields never fail the call:
/// they drop out of the blend, or fall back to a neutral orientation.
///
/// # Examples
/// ```
/// use surfscore_core::{Observation, OrientationLabel, SpotProfile, TideBand, Weights};
/// use surfscore_scorer::score_observation;
///
/// let observation = Observation::new("2025-10-16T00:00")
///     .with_swell(Some(1.5), Some(12.0), Some(300.0))
///     .with_tide_height(Some(0.8));
/// let result = score_observation(&observation, &SpotProfile::default(), &Weights::default());
///
/// assert_eq!(result.overall, Some(75));
/// assert_eq!(result.orientation_label, OrientationLabel::Good);
/// assert_eq!(result.tide_band, TideBand::Low);
/// ```
#[must_use]
pub fn score_observation(
    observation: &Observation,
    spot: &SpotProfile,
    weights: &Weights,
) -> ScoreResult {
    let height = scale_unit(
        observation.wave_height_m,
        spot.ideal_height.min,
        spot.ideal_height.max,
    );
    let period = scale_unit(
        observation.wave_period_s,
        spot.ideal_period.min,
        spot.ideal_period.max,
    );
    let range = range_score(height, period);
    let swell_bearing = observation.wave_direction_deg.filter(|deg| deg.is_finite());
    let orientation = Some(affinity(Some(spot.orientation_deg), swell_bearing));
    let tide_height = observation.tide_height_m.filter(|h| h.is_finite());
    let tide = tide_score(spot.tide_preference, tide_height, &spot.tide);

    if range.is_none() {
        debug!(
            "no swell height or period at {}; range sub-score absent",
            observation.timestamp
        );
    }
    if swell_bearing.is_none() {
        debug!(
            "no swell direction at {}; using neutral orientation",
            observation.timestamp
        );
    }
    if tide.is_none() {
        debug!(
            "no tide height at {}; tide sub-score absent",
            observation.timestamp
        );
    }

    let overall = aggregate(range, orientation, tide, weights);
    if overall.is_none() {
        debug!(
            "insufficient data to score {}: no weighted sub-score present",
            observation.timestamp
        );
    }

    ScoreResult {
        overall,
        sub_scores: SubScores {
            height,
            period,
            range,
            orientation,
            tide,
        },
        orientation_label: orientation_label(orientation),
        tide_band: tide_band(tide_height, &spot.tide),
    }
}

/// [`ConditionScorer`] blending sub-scores with fixed, validated weights.
///
/// # Examples
/// ```
/// use surfscore_core::{ConditionScorer, Observation, SpotProfile, Weights};
/// use surfscore_scorer::WeightedConditionScorer;
///
/// let scorer = WeightedConditionScorer::new(Weights::default()).expect("valid weights");
/// let observation = Observation::new("2025-10-16T00:00");
/// // Only the neutral orientation remains.
/// assert_eq!(scorer.score(&observation, &SpotProfile::default()).overall, Some(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedConditionScorer {
    weights: Weights,
}

impl WeightedConditionScorer {
    /// Build a scorer after validating `weights`.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is negative or not finite.
    pub fn new(weights: Weights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights applied to each sub-score.
    #[must_use]
    pub const fn weights(&self) -> Weights {
        self.weights
    }
}

impl ConditionScorer for WeightedConditionScorer {
    fn score(&self, observation: &Observation, spot: &SpotProfile) -> ScoreResult {
        score_observation(observation, spot, &self.weights)
    }
}
