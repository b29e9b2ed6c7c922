//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - A client for the Open-Meteo archive (ERA5) and forecast endpoints
//! - Shared domain models (coordinates, hourly weather series)
//! - A haversine great-circle distance helper
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod error;
pub mod geo;
pub mod model;

pub use client::OpenMeteoClient;
pub use error::WeatherError;
pub use geo::distance_km;
pub use model::{Coordinate, HourlyData};
