//! Configuration for identifier lookups
//!
//! Timeouts, retry and debounce settings for the network-backed ORCID and
//! DOI metadata calls made around the synchronous core.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Lookup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Settle window for interactive input in milliseconds
    pub debounce_ms: u64,
    /// Maximum attempts per lookup, including the first one
    pub max_attempts: u32,
    /// Delay before the first retry in milliseconds (doubles per attempt)
    pub retry_base_delay_ms: u64,
    /// Upper bound for a single retry delay in milliseconds
    pub retry_max_delay_ms: u64,
    /// Maximum number of ORCID search hits returned
    pub orcid_search_limit: u32,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            debounce_ms: 600,
            max_attempts: 3,
            retry_base_delay_ms: 250,
            retry_max_delay_ms: 4000,
            orcid_search_limit: 10,
        }
    }
}

impl LookupConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::OutOfRange(
                "timeout_ms must be positive".to_string(),
            ));
        }

        if !(500..=800).contains(&self.debounce_ms) {
            return Err(ConfigError::OutOfRange(
                "debounce_ms must be between 500 and 800".to_string(),
            ));
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::OutOfRange(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        if self.retry_max_delay_ms < self.retry_base_delay_ms {
            return Err(ConfigError::InvalidDelays(
                "retry_max_delay_ms must not be below retry_base_delay_ms".to_string(),
            ));
        }

        if self.orcid_search_limit == 0 {
            return Err(ConfigError::OutOfRange(
                "orcid_search_limit must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Retry delays are inconsistent with each other
    #[error("Invalid retry delays: {0}")]
    InvalidDelays(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Could not serialize configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LookupConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_json_serialization() {
        let config = LookupConfig::default();
        let json = config.to_json().unwrap();
        let parsed = LookupConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LookupConfig::from_toml("timeout_ms = 2500\ndebounce_ms = 800\n").unwrap();
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.debounce_ms, 800);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_debounce_out_of_range() {
        let mut config = LookupConfig::default();
        config.debounce_ms = 100;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));
    }

    #[test]
    fn test_invalid_delays() {
        let mut config = LookupConfig::default();
        config.retry_base_delay_ms = 5000;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDelays(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            LookupConfig::from_json("{ timeout_ms: }"),
            Err(ConfigError::Json(_))
        ));
    }
}
