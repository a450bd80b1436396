//! Test helpers for CLI fixtures and stubbed observation sources.

use camino::{Utf8Path, Utf8PathBuf};
use surfscore_core::{Observation, ObservationError, ObservationSource};
use surfscore_data::marine::test_support::StubObservationSource;
use tempfile::TempDir;

use crate::CliError;
use crate::score::{ObservationSourceBuilder, ScoreConfig};

/// Catalogue holding a single west-facing reef that prefers low tide.
pub(super) const REEF_CATALOGUE: &str = r#"{
  "spots": [
    {
      "id": "test-reef",
      "name": "Test Reef",
      "location": "Nowhere",
      "coordinates": { "latitude": 10.0, "longitude": -20.0 },
      "profile": { "orientation_deg": 270.0, "tide_preference": "low" }
    }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture");
}

pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Swell 2.2 m at 12 s from 300° with a 0.8 m tide proxy.
pub(super) fn reference_observation() -> Observation {
    Observation::new("2025-10-16T00:00")
        .with_timezone("Europe/Paris")
        .with_swell(Some(2.2), Some(12.0), Some(300.0))
        .with_tide_height(Some(0.8))
}

/// Builder handing out a [`StubObservationSource`] with a fixed response.
#[derive(Debug, Clone)]
pub(super) struct StubSourceBuilder {
    response: Result<Observation, ObservationError>,
}

impl StubSourceBuilder {
    pub(super) const fn returning(observation: Observation) -> Self {
        Self {
            response: Ok(observation),
        }
    }

    pub(super) const fn failing(error: ObservationError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl ObservationSourceBuilder for StubSourceBuilder {
    fn build(&self, _config: &ScoreConfig) -> Result<Box<dyn ObservationSource>, CliError> {
        let source = match &self.response {
            Ok(observation) => StubObservationSource::with_observation(observation.clone()),
            Err(error) => StubObservationSource::with_error(error.clone()),
        };
        Ok(Box::new(source))
    }
}
