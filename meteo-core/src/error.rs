use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the Open-Meteo client.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport-level failure (DNS, timeout, connection refused).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not valid JSON.
    #[error("failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A success payload was missing an expected field.
    #[error("missing expected field in response: {0}")]
    MissingField(&'static str),

    /// The metrics list was empty; no request was issued.
    #[error("at least one weather metric must be requested")]
    EmptyMetrics,

    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// The archive probe did not yield a parseable latest-recorded date.
    #[error("could not determine the latest recorded archive date from the service")]
    LatestDateUnavailable,
}
