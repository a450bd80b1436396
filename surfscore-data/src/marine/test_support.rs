//! Test utilities for marine observation sources.
//!
//! This module provides [`StubObservationSource`], a deterministic test
//! double for [`ObservationSource`] that returns pre-configured responses
//! without making HTTP requests.

use surfscore_core::{Coordinates, Observation, ObservationError, ObservationSource};

/// Stub `ObservationSource` for testing.
///
/// This source returns pre-configured responses, allowing tests to verify
/// behaviour without reaching a marine forecast service.
///
/// # Example
///
/// ```
/// use surfscore_core::{Coordinates, Observation, ObservationSource};
/// use surfscore_data::marine::test_support::StubObservationSource;
///
/// let observation = Observation::new("2025-10-16T00:00").with_tide_height(Some(0.8));
/// let source = StubObservationSource::with_observation(observation.clone());
///
/// let location = Coordinates::new(43.483, -1.558).expect("valid coordinates");
/// assert_eq!(source.fetch_observation(location), Ok(observation));
/// ```
#[derive(Debug, Clone)]
pub struct StubObservationSource {
    response: StubResponse,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Observation(Observation),
    Error(ObservationError),
}

impl StubObservationSource {
    /// Create a source that returns the given observation.
    ///
    /// The observation is returned for any valid coordinates.
    #[must_use]
    pub const fn with_observation(observation: Observation) -> Self {
        Self {
            response: StubResponse::Observation(observation),
        }
    }

    /// Create a source that returns the given error.
    ///
    /// Invalid coordinates still return
    /// `ObservationError::InvalidCoordinates`.
    #[must_use]
    pub const fn with_error(error: ObservationError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }
}

impl ObservationSource for StubObservationSource {
    fn fetch_observation(&self, location: Coordinates) -> Result<Observation, ObservationError> {
        location.validate()?;

        match &self.response {
            StubResponse::Observation(observation) => Ok(observation.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
