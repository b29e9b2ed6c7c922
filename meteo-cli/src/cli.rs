use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use meteo_core::{Coordinate, OpenMeteoClient, distance_km};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Open-Meteo client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch forecast hourly weather for a coordinate.
    Forecast {
        #[arg(long)]
        lat: f64,

        #[arg(long)]
        lon: f64,

        /// Metric names, e.g. "temperature_2m,precipitation".
        #[arg(long, value_delimiter = ',', required = true)]
        metrics: Vec<String>,
    },

    /// Fetch archived (ERA5) hourly weather for a coordinate and date range.
    Archive {
        #[arg(long)]
        lat: f64,

        #[arg(long)]
        lon: f64,

        /// Start date, YYYY-MM-DD.
        #[arg(long)]
        start: NaiveDate,

        /// End date, YYYY-MM-DD.
        #[arg(long)]
        end: NaiveDate,

        /// Metric names, e.g. "temperature_2m,precipitation".
        #[arg(long, value_delimiter = ',', required = true)]
        metrics: Vec<String>,
    },

    /// Print the latest date available in the weather archive.
    LatestDate,

    /// Great-circle distance in km between two coordinate pairs (degrees).
    Distance {
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let client = OpenMeteoClient::new();

        match self.command {
            Command::Forecast { lat, lon, metrics } => {
                let coordinate = Coordinate::new(lat, lon)?;
                let data = client
                    .forecast_weather(coordinate, &metrics)
                    .await
                    .context("Failed to fetch forecast weather")?;

                println!("{}", serde_json::to_string_pretty(&data.into_map())?);
            }
            Command::Archive { lat, lon, start, end, metrics } => {
                let coordinate = Coordinate::new(lat, lon)?;
                let data = client
                    .archived_weather(coordinate, start, end, &metrics)
                    .await
                    .context("Failed to fetch archived weather")?;

                println!("{}", serde_json::to_string_pretty(&data.into_map())?);
            }
            Command::LatestDate => {
                let date = client
                    .latest_recorded_date()
                    .await
                    .context("Failed to determine the latest recorded archive date")?;

                println!("{date}");
            }
            Command::Distance { lon1, lat1, lon2, lat2 } => {
                println!("{:.3}", distance_km(lon1, lat1, lon2, lat2));
            }
        }

        Ok(())
    }
}
