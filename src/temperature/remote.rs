//! Remote sea-surface-temperature client
//!
//! Queries an ERDDAP griddap endpoint for the last-available grid cell
//! nearest to a coordinate. The payload is untrusted: every access into it
//! is checked, and any shortfall surfaces as a [`RemoteError`] for the
//! provider to recover from. Nothing in this module falls back by itself.

use crate::types::Coordinate;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Column index of the temperature value within a griddap data row
/// (time, latitude, longitude, value).
const VALUE_COLUMN: usize = 3;

/// Offset between Kelvin and Celsius.
const KELVIN_OFFSET: f64 = 273.15;

/// Failure of a single remote attempt. Never leaves the temperature
/// provider; it is logged and answered with the geographic model.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(String),
}

/// Subset of the griddap JSON response the engine reads.
#[derive(Debug, Deserialize)]
struct GriddapPayload {
    table: GriddapTable,
}

#[derive(Debug, Deserialize)]
struct GriddapTable {
    rows: Vec<Vec<serde_json::Value>>,
}

/// Blocking client for one ERDDAP griddap dataset.
#[derive(Debug)]
pub struct RemoteSstClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl RemoteSstClient {
    /// Build a client with a bounded request timeout.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Fetch the sea-surface temperature for a coordinate, in °C.
    ///
    /// Issues exactly one GET; there is no retry.
    pub fn fetch(&self, coord: Coordinate) -> Result<f64, RemoteError> {
        let url = self.query_url(coord);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let kelvin = kelvin_from_payload(&body)?;
        Ok(kelvin - KELVIN_OFFSET)
    }

    /// Griddap query for the last-available time step at the grid cell
    /// nearest to the coordinate.
    fn query_url(&self, coord: Coordinate) -> String {
        format!(
            "{}?sea_surface_temperature[(last)][(last)][({:.4})][({:.4})]",
            self.endpoint,
            coord.latitude(),
            coord.longitude()
        )
    }
}

/// Extract the Kelvin temperature from a griddap JSON body.
fn kelvin_from_payload(body: &str) -> Result<f64, RemoteError> {
    let payload: GriddapPayload =
        serde_json::from_str(body).map_err(|e| RemoteError::Payload(e.to_string()))?;

    let row = payload
        .table
        .rows
        .first()
        .ok_or_else(|| RemoteError::Payload("no data rows".to_string()))?;

    let value = row
        .get(VALUE_COLUMN)
        .ok_or_else(|| RemoteError::Payload(format!("row has no column {}", VALUE_COLUMN)))?;

    let kelvin = value
        .as_f64()
        .ok_or_else(|| RemoteError::Payload(format!("temperature cell is not numeric: {}", value)))?;

    // Grid cells over land report null or sentinel values; anything outside
    // a physically meaningful Kelvin range is treated as malformed.
    if !kelvin.is_finite() || kelvin <= 0.0 {
        return Err(RemoteError::Payload(format!(
            "implausible Kelvin value {}",
            kelvin
        )));
    }

    Ok(kelvin)
}
