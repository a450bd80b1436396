//! Scoring pipeline for surf conditions.
//!
//! The crate turns one [`Observation`](surfscore_core::Observation) into a
//! [`ScoreResult`](surfscore_core::ScoreResult) for a spot:
//! - **Normalisation** rescales bounded values into `0.0..=1.0`
//!   ([`scale`], [`scale_unit`], [`mean_present`]).
//! - **Directional affinity** compares the spot's facing bearing with the
//!   swell bearing using a clamped cosine ([`affinity`]).
//! - **Tide modelling** scores the tide-proxy height against the spot's
//!   preference and labels its band ([`tide_score`], [`tide_band`]).
//! - **Aggregation** blends the present sub-scores with renormalised weights
//!   ([`aggregate`]).
//!
//! [`score_observation`] runs the whole pipeline and [`render_report`]
//! formats the result for display.
//!
//! # Examples
//!
//! ```
//! use surfscore_core::{Observation, SpotProfile, Weights};
//! use surfscore_scorer::score_observation;
//!
//! let observation = Observation::new("2025-10-16T00:00")
//!     .with_swell(Some(2.2), Some(12.0), Some(300.0))
//!     .with_tide_height(Some(0.8));
//! let result = score_observation(&observation, &SpotProfile::default(), &Weights::default());
//! assert_eq!(result.overall, Some(90));
//! ```

#![forbid(unsafe_code)]

mod aggregate;
mod direction;
mod normalise;
mod pipeline;
mod report;
mod tide;

pub use aggregate::{aggregate, range_score};
pub use direction::{
    AVERAGE_ALIGNMENT_THRESHOLD, GOOD_ALIGNMENT_THRESHOLD, NEUTRAL_AFFINITY, affinity,
    angular_difference, orientation_label,
};
pub use normalise::{mean_present, scale, scale_unit};
pub use pipeline::{WeightedConditionScorer, score_observation};
pub use report::{Report, compass_point, render_report};
pub use tide::{tide_band, tide_score};
