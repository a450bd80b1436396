//! HTTP-based observation sources for marine forecasts.
//!
//! This module provides [`OpenMeteoMarineSource`], an implementation of
//! [`surfscore_core::ObservationSource`] that fetches the first hourly slot
//! of the Open-Meteo Marine forecast for a location.
//!
//! # Architecture
//!
//! The source requests swell, sea-level and current series for a single
//! forecast day and maps the first hour onto an
//! [`Observation`](surfscore_core::Observation). The synchronous
//! [`ObservationSource`](surfscore_core::ObservationSource) trait is
//! implemented by blocking on async HTTP calls internally, keeping the
//! scoring pipeline embeddable in synchronous contexts.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use surfscore_core::{Coordinates, ObservationSource};
//! use surfscore_data::marine::{OpenMeteoMarineConfig, OpenMeteoMarineSource};
//!
//! let config = OpenMeteoMarineConfig::default()
//!     .with_timezone("UTC")
//!     .with_timeout(Duration::from_secs(10));
//! let source = OpenMeteoMarineSource::with_config(config)?;
//!
//! let observation = source.fetch_observation(Coordinates::new(43.483, -1.558)?)?;
//! println!("swell height: {:?}", observation.wave_height_m);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod open_meteo;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_TIMEZONE, DEFAULT_USER_AGENT, OpenMeteoMarineConfig,
    OpenMeteoMarineSource, SourceBuildError,
};
