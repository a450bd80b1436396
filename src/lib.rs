//! Facade crate for the surfscore surf-quality engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline, and
//! exposes the Open-Meteo marine observation source behind the
//! `marine-http` feature flag.

#![forbid(unsafe_code)]

pub use surfscore_core::{
    CatalogueError, ConditionScorer, Coordinates, DEFAULT_SPOT_ID, IdealRange, Observation,
    ObservationError, ObservationSource, OrientationLabel, ScoreResult, Spot, SpotCatalogue,
    SpotProfile, SpotProfileError, SubScores, TideBand, TideBounds, TidePreference, Weights,
    WeightsError,
};

pub use surfscore_scorer::{
    Report, WeightedConditionScorer, affinity, aggregate, render_report, scale, score_observation,
    tide_band, tide_score,
};

#[cfg(feature = "marine-http")]
pub use surfscore_data::marine::{
    OpenMeteoMarineConfig, OpenMeteoMarineSource, SourceBuildError,
};
