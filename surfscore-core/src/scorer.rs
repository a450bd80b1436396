//! Score observations for a surf spot.
//!
//! The `ConditionScorer` trait turns an [`Observation`](crate::Observation)
//! into a [`ScoreResult`](crate::ScoreResult) for a given
//! [`SpotProfile`](crate::SpotProfile).

use crate::{Observation, ScoreResult, SpotProfile};

/// Calculate a surf-quality score for an observation.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so callers can share
/// one scorer across request handlers. The method is infallible: missing
/// measurements degrade to absent sub-scores and, when nothing is left, to an
/// absent overall score.
///
/// # Examples
///
/// ```rust
/// use surfscore_core::{
///     ConditionScorer, Observation, OrientationLabel, ScoreResult, SpotProfile, SubScores,
///     TideBand,
/// };
///
/// struct FlatScorer;
///
/// impl ConditionScorer for FlatScorer {
///     fn score(&self, _observation: &Observation, _spot: &SpotProfile) -> ScoreResult {
///         ScoreResult {
///             overall: None,
///             sub_scores: SubScores::default(),
///             orientation_label: OrientationLabel::Indeterminate,
///             tide_band: TideBand::Unknown,
///         }
///     }
/// }
///
/// let result = FlatScorer.score(&Observation::new("2025-10-16T00:00"), &SpotProfile::default());
/// assert!(!result.is_conclusive());
/// ```
pub trait ConditionScorer: Send + Sync {
    /// Return the score of `observation` at a spot described by `spot`.
    fn score(&self, observation: &Observation, spot: &SpotProfile) -> ScoreResult;
}
