//! Fetch marine observations for a location.
//!
//! The `ObservationSource` trait abstracts the retrieval of one
//! [`Observation`](crate::Observation) for a pair of [`Coordinates`]. The
//! scoring pipeline never performs I/O itself; callers fetch first and score
//! the returned record.
//!
//! Errors are returned when coordinates are invalid or the source cannot
//! produce a sample.

mod error;
mod provider;

pub use error::ObservationError;
pub use provider::{Coordinates, ObservationSource};
