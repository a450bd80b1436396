//! HTTP-based `ObservationSource` using the Open-Meteo Marine API.
//!
//! This module provides [`OpenMeteoMarineSource`], an implementation of the
//! [`ObservationSource`] trait that fetches hourly marine forecasts via HTTP
//! and returns the first available hour.
//!
//! # Architecture
//!
//! The [`ObservationSource`] trait is synchronous to keep the scoring
//! pipeline embeddable in synchronous contexts. This source bridges the async
//! HTTP call to the sync interface by blocking on a Tokio runtime internally.

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use surfscore_core::{Coordinates, Observation, ObservationError, ObservationSource};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::open_meteo::{HOURLY_VARIABLES, MarineResponse};

/// Error type for [`OpenMeteoMarineSource`] construction failures.
#[derive(Debug)]
pub enum SourceBuildError {
    /// The configured base URL could not be parsed.
    InvalidBaseUrl {
        /// Rejected base URL.
        url: String,
        /// Parser error.
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for SourceBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl { url, source } => {
                write!(f, "invalid marine service URL {url}: {source}")
            }
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for SourceBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBaseUrl { source, .. } => Some(source),
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Default Open-Meteo Marine service root.
pub const DEFAULT_BASE_URL: &str = "https://marine-api.open-meteo.com";

/// Default timezone for hourly timestamps.
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Default user agent for marine requests.
pub const DEFAULT_USER_AGENT: &str = "surfscore-marine/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const MARINE_PATH: &str = "v1/marine";

/// Configuration for [`OpenMeteoMarineSource`].
#[derive(Debug, Clone)]
pub struct OpenMeteoMarineConfig {
    /// Service root (e.g., `"https://marine-api.open-meteo.com"`).
    pub base_url: String,
    /// IANA timezone the service should express timestamps in.
    pub timezone: String,
    /// Number of forecast days to request.
    pub forecast_days: u8,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OpenMeteoMarineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timezone: DEFAULT_TIMEZONE.to_owned(),
            forecast_days: 1,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OpenMeteoMarineConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the timezone of returned timestamps.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Set the number of forecast days.
    #[must_use]
    pub const fn with_forecast_days(mut self, forecast_days: u8) -> Self {
        self.forecast_days = forecast_days;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Observation source backed by the Open-Meteo Marine forecast API.
///
/// The source implements the synchronous [`ObservationSource`] trait by
/// internally blocking on asynchronous HTTP requests. It owns a Tokio runtime
/// that is reused across calls.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the source uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]), it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics.
///
/// When called from within a `current_thread` Tokio runtime, the source
/// falls back to its own internal runtime, which may deadlock if the
/// caller's runtime is driving IO this request depends on.
pub struct OpenMeteoMarineSource {
    client: Client,
    config: OpenMeteoMarineConfig,
    endpoint: Url,
    runtime: Runtime,
}

impl std::fmt::Debug for OpenMeteoMarineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenMeteoMarineSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl OpenMeteoMarineSource {
    /// Create a source against `base_url` with otherwise default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceBuildError> {
        Self::with_config(OpenMeteoMarineConfig::new(base_url))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: OpenMeteoMarineConfig) -> Result<Self, SourceBuildError> {
        let endpoint = marine_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(SourceBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SourceBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            runtime,
        })
    }

    /// Build the forecast URL for `location`.
    fn build_forecast_url(&self, location: Coordinates) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &location.latitude.to_string())
            .append_pair("longitude", &location.longitude.to_string())
            .append_pair("hourly", &HOURLY_VARIABLES.join(","))
            .append_pair("timezone", &self.config.timezone)
            .append_pair("forecast_days", &self.config.forecast_days.to_string());
        url
    }

    /// Fetch the first hourly observation asynchronously.
    async fn fetch_observation_async(
        &self,
        location: Coordinates,
    ) -> Result<Observation, ObservationError> {
        let url = self.build_forecast_url(location);
        debug!("requesting marine forecast from {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url.as_str()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url.as_str()))?;

        let observation = interpret_response(status, &body, url.as_str())?;
        if observation.tide_height_m.is_none() {
            warn!(
                "no sea level height at ({}, {}); tide will not be scored",
                location.latitude, location.longitude
            );
        }
        Ok(observation)
    }

    /// Convert a reqwest error to an `ObservationError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> ObservationError {
        if error.is_timeout() {
            return ObservationError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ObservationError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        ObservationError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

fn marine_endpoint(base_url: &str) -> Result<Url, SourceBuildError> {
    let invalid = |source| SourceBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    };
    let root = Url::parse(&format!("{}/", base_url.trim_end_matches('/'))).map_err(invalid)?;
    root.join(MARINE_PATH).map_err(invalid)
}

/// Map an HTTP status and body onto the first hourly observation.
///
/// Error payloads take precedence over the status so the service's reason
/// reaches the caller; other non-success statuses become
/// [`ObservationError::HttpError`].
fn interpret_response(
    status: StatusCode,
    body: &str,
    url: &str,
) -> Result<Observation, ObservationError> {
    let parsed = serde_json::from_str::<MarineResponse>(body);
    if let Ok(payload) = &parsed
        && payload.is_error()
    {
        return Err(ObservationError::ServiceError {
            reason: payload
                .reason
                .clone()
                .unwrap_or_else(|| "unspecified error".to_owned()),
        });
    }
    if !status.is_success() {
        return Err(ObservationError::HttpError {
            url: url.to_owned(),
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or_default().to_owned(),
        });
    }
    let response = parsed.map_err(|err| ObservationError::ParseError {
        message: err.to_string(),
    })?;
    convert_response(response)
}

/// Convert a successful marine response into an observation.
fn convert_response(response: MarineResponse) -> Result<Observation, ObservationError> {
    let hourly = response
        .hourly
        .ok_or_else(|| ObservationError::ParseError {
            message: "marine response missing hourly series".to_owned(),
        })?;
    let mut observation = hourly
        .first_observation()
        .ok_or(ObservationError::EmptySeries)?;
    observation.timezone = response.timezone;
    Ok(observation)
}

impl ObservationSource for OpenMeteoMarineSource {
    /// Fetch the first hourly observation for `location`.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded (`flavor = "multi_thread"`). From a `current_thread`
    /// runtime the method falls back to its own internal runtime.
    fn fetch_observation(&self, location: Coordinates) -> Result<Observation, ObservationError> {
        location.validate()?;

        let future = self.fetch_observation_async(location);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn biarritz() -> Coordinates {
        Coordinates {
            latitude: 43.483,
            longitude: -1.558,
        }
    }

    const SUCCESS_BODY: &str = r#"{
        "timezone": "Europe/Paris",
        "hourly": {
            "time": ["2025-10-16T00:00"],
            "wave_height": [2.2],
            "wave_period": [12.0],
            "wave_direction": [300.0],
            "sea_level_height_msl": [0.8]
        }
    }"#;

    #[rstest]
    fn build_forecast_url_encodes_query(biarritz: Coordinates) {
        let source = OpenMeteoMarineSource::with_config(OpenMeteoMarineConfig::default())
            .expect("source should build");

        let url = source.build_forecast_url(biarritz);

        assert_eq!(
            url.as_str(),
            "https://marine-api.open-meteo.com/v1/marine?latitude=43.483&longitude=-1.558\
             &hourly=wave_height%2Cwave_period%2Cwave_direction%2Csea_surface_temperature\
             %2Csea_level_height_msl%2Cocean_current_velocity%2Cocean_current_direction\
             &timezone=Europe%2FParis&forecast_days=1"
        );
    }

    #[rstest]
    #[case("http://localhost:8080")]
    #[case("http://localhost:8080/")]
    fn build_forecast_url_handles_trailing_slash(biarritz: Coordinates, #[case] base: &str) {
        let source = OpenMeteoMarineSource::new(base).expect("source should build");

        let url = source.build_forecast_url(biarritz);

        assert!(url.as_str().starts_with("http://localhost:8080/v1/marine?"));
    }

    #[rstest]
    fn build_forecast_url_keeps_base_path(biarritz: Coordinates) {
        let source =
            OpenMeteoMarineSource::new("http://proxy.example.com/open-meteo").expect("builds");

        let url = source.build_forecast_url(biarritz);

        assert_eq!(url.path(), "/open-meteo/v1/marine");
    }

    #[rstest]
    fn invalid_base_url_is_rejected() {
        let err = OpenMeteoMarineSource::new("not a url").expect_err("should fail");

        assert!(matches!(err, SourceBuildError::InvalidBaseUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[rstest]
    fn interpret_response_maps_first_hour() {
        let observation = interpret_response(StatusCode::OK, SUCCESS_BODY, "http://test")
            .expect("should parse");

        assert_eq!(observation.timestamp, "2025-10-16T00:00");
        assert_eq!(observation.timezone.as_deref(), Some("Europe/Paris"));
        assert_eq!(observation.wave_height_m, Some(2.2));
        assert_eq!(observation.tide_height_m, Some(0.8));
        assert_eq!(observation.sea_surface_temp_c, None);
    }

    #[rstest]
    fn interpret_response_prefers_service_reason() {
        let body = r#"{"error": true, "reason": "Parameter 'hourly' is invalid"}"#;

        let err = interpret_response(StatusCode::BAD_REQUEST, body, "http://test")
            .expect_err("should fail");

        assert_eq!(
            err,
            ObservationError::ServiceError {
                reason: "Parameter 'hourly' is invalid".to_owned(),
            }
        );
    }

    #[rstest]
    fn interpret_response_reports_http_status() {
        let err = interpret_response(StatusCode::BAD_GATEWAY, "<html></html>", "http://test")
            .expect_err("should fail");

        match err {
            ObservationError::HttpError { url, status, .. } => {
                assert_eq!(url, "http://test");
                assert_eq!(status, 502);
            }
            _ => panic!("expected HttpError, got {err:?}"),
        }
    }

    #[rstest]
    fn interpret_response_rejects_malformed_body() {
        let err =
            interpret_response(StatusCode::OK, "{", "http://test").expect_err("should fail");

        assert!(matches!(err, ObservationError::ParseError { .. }));
    }

    #[rstest]
    fn convert_response_requires_hourly_series() {
        let err = convert_response(MarineResponse::default()).expect_err("should fail");

        assert!(matches!(err, ObservationError::ParseError { .. }));
    }

    #[rstest]
    fn convert_response_rejects_empty_series() {
        let body = r#"{"hourly": {"time": [], "wave_height": []}}"#;

        let err = interpret_response(StatusCode::OK, body, "http://test").expect_err("should fail");

        assert_eq!(err, ObservationError::EmptySeries);
    }

    #[rstest]
    fn invalid_coordinates_fail_before_any_request() {
        let source =
            OpenMeteoMarineSource::new("http://127.0.0.1:9").expect("source should build");

        let err = source
            .fetch_observation(Coordinates {
                latitude: 91.0,
                longitude: 0.0,
            })
            .expect_err("should fail");

        assert!(matches!(err, ObservationError::InvalidCoordinates { .. }));
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = OpenMeteoMarineConfig::new("http://example.com")
            .with_timezone("UTC")
            .with_forecast_days(3)
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.forecast_days, 3);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }
}
