//! Core domain types for the surfscore engine.
//!
//! The crate defines the observation record produced by marine-weather
//! sources, the per-spot configuration consumed by the scoring pipeline, and
//! the traits that connect the two. Constructors and `validate` methods return
//! `Result` so invalid configuration surfaces before any scoring happens.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
mod observation;
mod score;
mod scorer;
pub mod source;
mod spot;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod weights;

pub use catalogue::{CatalogueError, DEFAULT_SPOT_ID, Spot, SpotCatalogue};
pub use observation::Observation;
pub use score::{OrientationLabel, ScoreResult, SubScores, TideBand};
pub use scorer::ConditionScorer;
pub use source::{Coordinates, ObservationError, ObservationSource};
pub use spot::{IdealRange, SpotProfile, SpotProfileError, TideBounds, TidePreference};
pub use weights::{Weights, WeightsError};
