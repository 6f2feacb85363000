//! Temperature provider parameters
//!
//! Settings for the live sea-surface-temperature source and the reading
//! cache in front of it.

use serde::{Deserialize, Serialize};

/// Parameters for live temperature acquisition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderParameters {
    /// ERDDAP griddap endpoint serving sea-surface temperature (Kelvin).
    ///
    /// The query asks for the last-available grid cell nearest to the
    /// requested coordinate.
    ///
    /// Default: NOAA OISST v2.1 aggregate
    pub endpoint: String,

    /// Timeout for the single remote attempt (s). There is no retry; a
    /// failed attempt falls back to the geographic model immediately.
    ///
    /// Default: 10 s
    pub timeout_secs: u64,

    /// Lifetime of a cached reading (s). Identical coordinates resolved
    /// within this window reuse the earlier reading.
    ///
    /// Default: 3600 s
    pub cache_ttl_secs: u64,
}

impl Default for ProviderParameters {
    fn default() -> Self {
        Self {
            endpoint: "https://www.ncei.noaa.gov/erddap/griddap/ncdcOisst21Agg_LonPM180.json"
                .to_string(),
            timeout_secs: 10,
            cache_ttl_secs: 3600, // one hour, matching the upstream grid cadence
        }
    }
}
