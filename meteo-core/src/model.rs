use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::WeatherError;

/// A validated geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting latitudes outside [-90, 90] and
    /// longitudes outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinate { latitude, longitude });
        }

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Hourly weather data for one location.
///
/// `series` maps each requested metric name (plus the service's `time` axis)
/// to a parallel array of values, aligned by index.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyData {
    pub latitude: f64,
    pub longitude: f64,
    pub series: Map<String, Value>,
}

impl HourlyData {
    /// Flatten into the `{latitude, longitude, <metric>: [...]}` mapping,
    /// coordinates first, series keys in service order.
    pub fn into_map(self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("latitude".to_string(), self.latitude.into());
        map.insert("longitude".to_string(), self.longitude.into());
        map.extend(self.series);
        map
    }
}

/// Success envelope returned by the archive and forecast endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct HourlyEnvelope {
    pub latitude: f64,
    pub longitude: f64,
    pub hourly: Option<Map<String, Value>>,
}

impl HourlyEnvelope {
    pub(crate) fn into_hourly_data(self) -> Result<HourlyData, WeatherError> {
        let series = self.hourly.ok_or(WeatherError::MissingField("hourly"))?;

        Ok(HourlyData {
            latitude: self.latitude,
            longitude: self.longitude,
            series,
        })
    }
}

/// Error envelope: `{"error": true, "reason": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub reason: Option<String>,
}
