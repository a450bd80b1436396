//! Lookup table of named surf spots.
//!
//! Callers inject a [`SpotCatalogue`] instead of relying on a global list.
//! [`SpotCatalogue::builtin`] carries the reference spots on the Basque
//! coast; catalogues can also be decoded from JSON documents of the form
//! `{"spots": [{"id": …, "name": …, "location": …, "coordinates": {…},
//! "profile": {…}}]}` where any omitted profile field falls back to
//! [`SpotProfile::default`].

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coordinates, ObservationError, SpotProfile, SpotProfileError};

/// A named spot with its location and scoring profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spot {
    /// Stable identifier, e.g. `biarritz-grande-plage`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Town or region.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: String,
    /// Position used to query observation sources.
    pub coordinates: Coordinates,
    /// Scoring configuration.
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile: SpotProfile,
}

/// Validated collection of spots with unique identifiers.
///
/// # Examples
/// ```
/// use surfscore_core::SpotCatalogue;
///
/// let catalogue = SpotCatalogue::builtin();
/// let spot = catalogue.get("biarritz-grande-plage").expect("builtin spot");
/// assert_eq!(spot.profile.orientation_deg, 300.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpotCatalogue {
    spots: Vec<Spot>,
}

/// Identifier of the spot used when callers do not pick one.
pub const DEFAULT_SPOT_ID: &str = "biarritz-grande-plage";

impl SpotCatalogue {
    /// Validate and construct a catalogue.
    ///
    /// # Errors
    /// Returns [`CatalogueError`] when an identifier is blank or repeated, or
    /// when a spot carries invalid coordinates or an invalid profile.
    pub fn new(spots: Vec<Spot>) -> Result<Self, CatalogueError> {
        validate_spots(&spots)?;
        Ok(Self { spots })
    }

    /// Catalogue of the reference spots.
    #[must_use]
    pub fn builtin() -> Self {
        let west_facing = SpotProfile {
            orientation_deg: 270.0,
            ..SpotProfile::default()
        };
        Self {
            spots: vec![
                Spot {
                    id: "hossegor-plage-nord".to_owned(),
                    name: "Hossegor - Plage Nord".to_owned(),
                    location: "Hossegor, France".to_owned(),
                    coordinates: Coordinates {
                        latitude: 43.6667,
                        longitude: -1.4,
                    },
                    profile: west_facing,
                },
                Spot {
                    id: "hossegor-la-graviere".to_owned(),
                    name: "Hossegor - La Gravière".to_owned(),
                    location: "Hossegor, France".to_owned(),
                    coordinates: Coordinates {
                        latitude: 43.6617,
                        longitude: -1.4033,
                    },
                    profile: west_facing,
                },
                Spot {
                    id: DEFAULT_SPOT_ID.to_owned(),
                    name: "Biarritz - Grande Plage".to_owned(),
                    location: "Biarritz, France".to_owned(),
                    coordinates: Coordinates {
                        latitude: 43.483,
                        longitude: -1.558,
                    },
                    profile: SpotProfile::default(),
                },
            ],
        }
    }

    /// Decode and validate a catalogue from a JSON document.
    ///
    /// # Errors
    /// Returns [`CatalogueError::Parse`] when the document is malformed and
    /// the validation errors of [`SpotCatalogue::new`] otherwise.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let document: CatalogueDocument =
            serde_json::from_str(json).map_err(|err| CatalogueError::Parse {
                message: err.to_string(),
            })?;
        Self::new(document.spots)
    }

    /// Look up a spot by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    /// Iterate over the spots in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &Spot> {
        self.spots.iter()
    }

    /// Return the number of spots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Report whether the catalogue holds no spots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

impl Default for SpotCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_spots(spots: &[Spot]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::new();
    for spot in spots {
        if spot.id.trim().is_empty() {
            return Err(CatalogueError::EmptyId);
        }
        if !seen.insert(spot.id.as_str()) {
            return Err(CatalogueError::DuplicateId {
                id: spot.id.clone(),
            });
        }
        spot.coordinates
            .validate()
            .map_err(|source| CatalogueError::InvalidCoordinates {
                id: spot.id.clone(),
                source,
            })?;
        spot.profile
            .validate()
            .map_err(|source| CatalogueError::InvalidProfile {
                id: spot.id.clone(),
                source,
            })?;
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CatalogueDocument {
    spots: Vec<Spot>,
}

/// Errors raised while building a [`SpotCatalogue`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogueError {
    /// A spot had a blank identifier.
    #[error("spot identifiers must not be empty")]
    EmptyId,
    /// Two spots shared an identifier.
    #[error("spot identifier '{id}' appears more than once")]
    DuplicateId {
        /// Repeated identifier.
        id: String,
    },
    /// A spot's coordinates were out of range.
    #[error("spot '{id}' has invalid coordinates")]
    InvalidCoordinates {
        /// Identifier of the affected spot.
        id: String,
        /// Underlying validation error.
        #[source]
        source: ObservationError,
    },
    /// A spot's profile failed validation.
    #[error("spot '{id}' has an invalid profile")]
    InvalidProfile {
        /// Identifier of the affected spot.
        id: String,
        /// Underlying validation error.
        #[source]
        source: SpotProfileError,
    },
    /// The catalogue document could not be decoded.
    #[error("failed to parse spot catalogue: {message}")]
    Parse {
        /// Decoder error detail.
        message: String,
    },
}
