//! Error types emitted by the surfscore CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use surfscore_core::{CatalogueError, ObservationError, SpotProfileError, WeightsError};
use surfscore_data::marine::SourceBuildError;
use thiserror::Error;

/// Errors emitted by the surfscore CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Long flag name of the option naming the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Long flag name of the option naming the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Long flag name of the option naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the spot catalogue failed.
    #[error("failed to read spot catalogue at {path:?}: {source}")]
    ReadCatalogue {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The spot catalogue could not be decoded or failed validation.
    #[error("invalid spot catalogue at {path:?}: {source}")]
    ParseCatalogue {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: Box<CatalogueError>,
    },
    /// The requested spot is not in the catalogue.
    #[error("unknown spot '{id}' (run `surfscore spots` to list identifiers)")]
    UnknownSpot {
        /// Requested identifier.
        id: String,
    },
    /// A tide preference option was not `low`, `mid` or `high`.
    #[error(transparent)]
    TidePreference(SpotProfileError),
    /// The spot profile failed validation after overrides were applied.
    #[error("spot '{spot}' has an invalid profile: {source}")]
    InvalidProfile {
        /// Identifier of the spot being scored.
        spot: String,
        /// Validation failure.
        #[source]
        source: SpotProfileError,
    },
    /// The configured weights cannot be used for aggregation.
    #[error("invalid weights: {0}")]
    InvalidWeights(#[source] WeightsError),
    /// Latitude or longitude overrides were out of range.
    #[error("invalid location override: {0}")]
    InvalidLocation(#[source] ObservationError),
    /// The output format was not `text` or `json`.
    #[error("unknown output format '{value}' (expected text or json)")]
    UnknownFormat {
        /// Rejected input.
        value: String,
    },
    /// Constructing the marine observation source failed.
    #[error("failed to build marine observation source for {base_url:?}: {source}")]
    BuildObservationSource {
        /// Configured service base URL.
        base_url: String,
        /// Construction failure.
        #[source]
        source: SourceBuildError,
    },
    /// Fetching the observation failed.
    #[error("failed to fetch observation for spot '{spot}': {source}")]
    FetchObservation {
        /// Identifier of the spot being scored.
        spot: String,
        /// Source failure.
        #[source]
        source: ObservationError,
    },
    /// Serialising the score result failed.
    #[error("failed to serialise score result: {0}")]
    SerialiseScore(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
