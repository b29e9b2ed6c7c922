use chrono::NaiveDate;
use reqwest::Client;

use crate::{
    error::WeatherError,
    model::{Coordinate, ErrorEnvelope, HourlyData, HourlyEnvelope},
};

const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/era5";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// The out-of-range probe window used to discover the archive's latest date.
/// The service rejects it and names the last valid date in its error reason.
const PROBE_START: &str = "2023-01-01";
const PROBE_END: &str = "2030-12-31";

/// Client for the Open-Meteo archive (ERA5) and forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    archive_url: String,
    forecast_url: String,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            archive_url: ARCHIVE_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
        }
    }

    /// Point the client at alternative endpoints, e.g. a mock server in tests.
    pub fn with_base_urls(archive_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            archive_url: archive_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    /// Latest date available in the weather archive.
    ///
    /// Probes the archive endpoint with a date window that extends past the
    /// present; the service rejects it with a reason ending in the last valid
    /// date, which is extracted and parsed. Any payload that does not carry
    /// such a reason yields [`WeatherError::LatestDateUnavailable`], so a
    /// change in the service's error formatting degrades into an explicit
    /// error rather than a panic.
    pub async fn latest_recorded_date(&self) -> Result<NaiveDate, WeatherError> {
        let res = self
            .http
            .get(&self.archive_url)
            .query(&[
                ("latitude", "0"),
                ("longitude", "0"),
                ("start_date", PROBE_START),
                ("end_date", PROBE_END),
            ])
            .send()
            .await?;

        let body = res.text().await?;

        let envelope: ErrorEnvelope =
            serde_json::from_str(&body).map_err(|_| WeatherError::LatestDateUnavailable)?;

        envelope
            .reason
            .as_deref()
            .and_then(date_from_reason)
            .ok_or(WeatherError::LatestDateUnavailable)
    }

    /// Historical hourly weather for a coordinate, date range, and metrics.
    pub async fn archived_weather(
        &self,
        coordinate: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
        metrics: &[impl AsRef<str>],
    ) -> Result<HourlyData, WeatherError> {
        let mut params = base_params(coordinate, metrics)?;
        params.push(("start_date", start.format("%Y-%m-%d").to_string()));
        params.push(("end_date", end.format("%Y-%m-%d").to_string()));

        self.fetch_hourly(&self.archive_url, &params).await
    }

    /// Forecast hourly weather for a coordinate and metrics, over the
    /// service's default forecast window.
    pub async fn forecast_weather(
        &self,
        coordinate: Coordinate,
        metrics: &[impl AsRef<str>],
    ) -> Result<HourlyData, WeatherError> {
        let params = base_params(coordinate, metrics)?;

        self.fetch_hourly(&self.forecast_url, &params).await
    }

    async fn fetch_hourly(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<HourlyData, WeatherError> {
        let res = self.http.get(url).query(params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let envelope: HourlyEnvelope = serde_json::from_str(&body)?;
        envelope.into_hourly_data()
    }
}

fn base_params(
    coordinate: Coordinate,
    metrics: &[impl AsRef<str>],
) -> Result<Vec<(&'static str, String)>, WeatherError> {
    if metrics.is_empty() {
        return Err(WeatherError::EmptyMetrics);
    }

    let hourly = metrics
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");

    Ok(vec![
        ("latitude", coordinate.latitude().to_string()),
        ("longitude", coordinate.longitude().to_string()),
        ("hourly", hourly),
    ])
}

/// Extract the trailing `YYYY-MM-DD` from an error reason such as
/// "Parameter 'end_date' is out of allowed range ... 2024-05-28".
fn date_from_reason(reason: &str) -> Option<NaiveDate> {
    let tail = reason.get(reason.len().checked_sub(10)?..)?;
    NaiveDate::parse_from_str(tail, "%Y-%m-%d").ok()
}

fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    match body.char_indices().nth(MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
