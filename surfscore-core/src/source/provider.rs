//! Observation source trait and the coordinates it is keyed by.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Observation;

use super::error::ObservationError;

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub latitude: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub longitude: f64,
}

impl Coordinates {
    /// Validate and construct coordinates.
    ///
    /// # Errors
    /// Returns [`ObservationError::InvalidCoordinates`] when either value is
    /// not finite or lies outside its valid range.
    ///
    /// # Examples
    /// ```
    /// use surfscore_core::Coordinates;
    ///
    /// assert!(Coordinates::new(43.483, -1.558).is_ok());
    /// assert!(Coordinates::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ObservationError> {
        let coordinates = Self {
            latitude,
            longitude,
        };
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// Check that both values are finite and in range.
    ///
    /// # Errors
    /// Returns [`ObservationError::InvalidCoordinates`] otherwise.
    pub fn validate(&self) -> Result<(), ObservationError> {
        if (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude) {
            Ok(())
        } else {
            Err(ObservationError::InvalidCoordinates {
                latitude: self.latitude.to_string(),
                longitude: self.longitude.to_string(),
            })
        }
    }
}

/// Fetch the first available hourly observation for a location.
///
/// Implementers return an [`Observation`] whose missing measurements are
/// `None`; only transport or decoding failures are errors.
///
/// # Examples
///
/// ```rust
/// use surfscore_core::{Coordinates, Observation, ObservationError, ObservationSource};
///
/// struct CalmSea;
///
/// impl ObservationSource for CalmSea {
///     fn fetch_observation(
///         &self,
///         location: Coordinates,
///     ) -> Result<Observation, ObservationError> {
///         location.validate()?;
///         Ok(Observation::new("2025-10-16T00:00").with_swell(Some(0.3), Some(6.0), None))
///     }
/// }
///
/// let observation = CalmSea.fetch_observation(Coordinates::new(43.5, -1.5)?)?;
/// assert_eq!(observation.wave_height_m, Some(0.3));
/// # Ok::<(), ObservationError>(())
/// ```
pub trait ObservationSource: Send + Sync {
    /// Return the observation for `location`.
    ///
    /// Implementations must return `Err(ObservationError::InvalidCoordinates)`
    /// when `location` fails [`Coordinates::validate`].
    fn fetch_observation(&self, location: Coordinates) -> Result<Observation, ObservationError>;
}
