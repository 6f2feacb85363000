//! Temperature acquisition
//!
//! Resolves a sea-surface temperature for a coordinate with live-then-model
//! semantics:
//!
//! 1. With live data disabled, the geographic fallback model answers
//!    directly; no network access is attempted.
//! 2. With live data enabled, a single bounded remote query is attempted.
//!    Any failure (connect, timeout, HTTP status, malformed payload) is
//!    logged and answered with the fallback model instead.
//!
//! The failure path is observable, not exceptional: callers inspect the
//! returned reading's `is_live` flag and `source_label` to learn which
//! stage produced it. Live-mode resolutions are memoized per coordinate for
//! a bounded window.

mod cache;
mod fallback;
mod remote;

pub use fallback::geographic_estimate;
pub use remote::{RemoteError, RemoteSstClient};

use crate::clock::{Clock, SystemClock};
use crate::errors::{StefError, StefResult};
use crate::parameters::ProviderParameters;
use crate::types::Coordinate;
use cache::ReadingCache;
use chrono::{DateTime, Datelike, Duration, Utc};
use fallback::round_to_tenth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration as StdDuration;
use tracing::{debug, warn};

/// Source label for a reading obtained from the live satellite feed.
pub const SOURCE_SATELLITE_LIVE: &str = "satellite-live";

/// Source label for a reading estimated by the geographic model.
pub const SOURCE_GEOGRAPHIC_MODEL: &str = "geographic-model";

/// A resolved sea-surface temperature. Produced once per query and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Temperature in °C, rounded to one decimal.
    pub value_celsius: f64,
    /// Whether the value came from the live feed (`true`) or the
    /// geographic model (`false`).
    pub is_live: bool,
    /// Provenance label, one of [`SOURCE_SATELLITE_LIVE`] or
    /// [`SOURCE_GEOGRAPHIC_MODEL`].
    pub source_label: String,
    /// When the reading was resolved.
    pub observed_at: DateTime<Utc>,
}

/// Resolves sea-surface temperatures with live/fallback semantics.
#[derive(Debug)]
pub struct TemperatureProvider {
    remote: RemoteSstClient,
    cache: ReadingCache,
    clock: Arc<dyn Clock>,
}

impl TemperatureProvider {
    /// Build a provider against the system clock.
    pub fn new(params: ProviderParameters) -> StefResult<Self> {
        Self::with_clock(params, Arc::new(SystemClock))
    }

    /// Build a provider with an injected clock, making cache expiry and the
    /// fallback's seasonal term deterministic.
    pub fn with_clock(params: ProviderParameters, clock: Arc<dyn Clock>) -> StefResult<Self> {
        let remote = RemoteSstClient::new(
            params.endpoint.clone(),
            StdDuration::from_secs(params.timeout_secs),
        )
        .map_err(|e| StefError::HttpClient(e.to_string()))?;

        Ok(Self {
            remote,
            cache: ReadingCache::new(Duration::seconds(params.cache_ttl_secs as i64)),
            clock,
        })
    }

    /// Resolve a temperature reading for a coordinate.
    ///
    /// Never fails: the worst outcome is a model-based estimate clearly
    /// labelled as such.
    pub fn resolve(&mut self, coord: Coordinate, use_live: bool) -> TemperatureReading {
        let now = self.clock.now();

        if !use_live {
            return self.model_reading(coord, now);
        }

        if let Some(reading) = self.cache.get(coord, now) {
            debug!(%coord, "reusing cached reading");
            return reading.clone();
        }

        let reading = match self.remote.fetch(coord) {
            Ok(celsius) => TemperatureReading {
                value_celsius: round_to_tenth(celsius),
                is_live: true,
                source_label: SOURCE_SATELLITE_LIVE.to_string(),
                observed_at: now,
            },
            Err(error) => {
                warn!(%coord, %error, "live data unavailable; using model estimation");
                self.model_reading(coord, now)
            }
        };

        self.cache.insert(coord, reading.clone(), now);
        reading
    }

    fn model_reading(&self, coord: Coordinate, now: DateTime<Utc>) -> TemperatureReading {
        TemperatureReading {
            value_celsius: geographic_estimate(coord, now.month()),
            is_live: false,
            source_label: SOURCE_GEOGRAPHIC_MODEL.to_string(),
            observed_at: now,
        }
    }
}
