use thiserror::Error;

/// Error type for invalid operations.
///
/// Remote-fetch failures are deliberately absent: the temperature provider
/// recovers from them internally by falling back to the geographic model, so
/// they never cross a public boundary.
#[derive(Error, Debug)]
pub enum StefError {
    #[error("latitude {0} is outside the valid range [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside the valid range [-180, 180]")]
    InvalidLongitude(f64),
    #[error("unknown climate scenario '{0}'. Expected one of: baseline, ssp1-2.6, ssp5-8.5")]
    UnknownScenario(String),
    #[error("failed to initialise the HTTP client: {0}")]
    HttpClient(String),
    #[error("cannot read configuration file '{path}'")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, StefError>`.
pub type StefResult<T> = Result<T, StefError>;
