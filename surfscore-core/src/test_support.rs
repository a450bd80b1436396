//! Deterministic test doubles for the core traits.

use crate::{Coordinates, Observation, ObservationError, ObservationSource};

/// `ObservationSource` that always returns the same observation.
///
/// Coordinates are still validated so callers exercise the same error path as
/// real sources.
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
#[derive(Debug, Clone, Default)]
pub struct FixedObservationSource {
    observation: Observation,
}

impl FixedObservationSource {
    /// Create a source returning `observation` for every request.
    #[must_use]
    pub const fn new(observation: Observation) -> Self {
        Self { observation }
    }
}

impl ObservationSource for FixedObservationSource {
    fn fetch_observation(&self, location: Coordinates) -> Result<Observation, ObservationError> {
        location.validate()?;
        Ok(self.observation.clone())
    }
}
