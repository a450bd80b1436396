use thiserror::Error;

/// Errors from [`crate::source::ObservationSource::fetch_observation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationError {
    /// Latitude or longitude was outside the valid range.
    #[error("coordinates ({latitude}, {longitude}) are out of range")]
    InvalidCoordinates {
        /// Requested latitude, formatted for display.
        latitude: String,
        /// Requested longitude, formatted for display.
        longitude: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} failed with status {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("network error requesting {url}: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The service reported an error in its payload.
    #[error("marine service rejected the request: {reason}")]
    ServiceError {
        /// Reason reported by the service.
        reason: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse marine response: {message}")]
    ParseError {
        /// Decoder error detail.
        message: String,
    },
    /// The response contained no hourly samples.
    #[error("marine response contained no hourly samples")]
    EmptySeries,
}
