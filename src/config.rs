//! Engine configuration
//!
//! [`EngineConfig`] aggregates every component's parameter struct. All
//! sections and fields default, so a TOML file only needs to name what it
//! overrides:
//!
//! ```toml
//! [provider]
//! timeout_secs = 5
//!
//! [risk]
//! base_lethal_limit = 30.8
//! ```

use crate::errors::{StefError, StefResult};
use crate::parameters::{
    MetabolismParameters, ProjectionParameters, ProviderParameters, RiskParameters,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub provider: ProviderParameters,
    pub metabolism: MetabolismParameters,
    pub risk: RiskParameters,
    pub projection: ProjectionParameters,
}

impl EngineConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> StefResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> StefResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StefError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();

        assert_eq!(config.provider.timeout_secs, 10);
        assert!((config.risk.base_lethal_limit - 31.5).abs() < 1e-10);
        assert_eq!(config.projection.start_year, 2026);
    }

    #[test]
    fn test_partial_config_overrides_named_fields_only() {
        let config = EngineConfig::from_toml_str(
            r#"
            [provider]
            timeout_secs = 5

            [risk]
            base_lethal_limit = 30.8
            "#,
        )
        .unwrap();

        assert_eq!(config.provider.timeout_secs, 5);
        assert_eq!(config.provider.cache_ttl_secs, 3600);
        assert!((config.risk.base_lethal_limit - 30.8).abs() < 1e-10);
        assert!((config.risk.starvation_penalty - 1.07).abs() < 1e-10);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let result = EngineConfig::from_toml_str("[risk]\nbase_lethal_limit = \"hot\"");
        assert!(matches!(result, Err(StefError::ConfigParse(_))));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = EngineConfig::default();
        let serialised = toml::to_string(&config).unwrap();
        let restored = EngineConfig::from_toml_str(&serialised).unwrap();

        assert_eq!(config.provider.endpoint, restored.provider.endpoint);
        assert!((config.metabolism.smr_scale - restored.metabolism.smr_scale).abs() < 1e-10);
        assert_eq!(config.projection.horizon_years, restored.projection.horizon_years);
    }
}
