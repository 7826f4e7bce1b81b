//! Application configuration with documented defaults
//!
//! Loaded from an optional TOML file; every field falls back to the value
//! the calculator ships with. The config is passed by reference to whatever
//! needs it and never stored in a global.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{ConfigurationError, Result};
use crate::core::types::{ContainerKey, SuitKey, WeaponKey};

/// Configuration for the calculator session, record book and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    // === CATALOG ===
    /// Catalog file to load instead of the built-in standard catalog
    pub catalog_path: Option<PathBuf>,

    // === LOGGING ===
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,

    // === SESSION DEFAULTS ===
    /// Weapon selected when a session starts
    pub default_weapon: WeaponKey,

    /// Target health points
    pub default_health: u32,

    /// Target armor in percent (0..=100)
    pub default_armor: f64,

    /// Engagement distance in meters
    pub default_distance: f64,

    /// Left-hand weapon of the comparison pair
    pub compare_first: WeaponKey,

    /// Right-hand weapon of the comparison pair
    pub compare_second: WeaponKey,

    /// Suit equipped in a fresh loadout
    pub default_suit: SuitKey,

    /// Container equipped in a fresh loadout
    pub default_container: ContainerKey,

    // === RECORD BOOK ===
    /// Maximum number of saved builds
    pub build_limit: usize,

    /// Maximum number of saved comparisons
    pub comparison_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: "csx_armory=info".to_string(),

            default_weapon: WeaponKey::new("ak74"),
            default_health: 100,
            default_armor: 0.0,
            default_distance: 50.0,
            compare_first: WeaponKey::new("ak74"),
            compare_second: WeaponKey::new("svd"),
            default_suit: SuitKey::new("combat"),
            default_container: ContainerKey::new("standard"),

            build_limit: 1000,
            comparison_limit: 500,
        }
    }
}

impl AppConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        if self.default_health == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "default_health must be positive".into(),
            ));
        }

        if !(0.0..=100.0).contains(&self.default_armor) {
            return Err(ConfigurationError::InvalidSetting(format!(
                "default_armor ({}) must be within 0..=100",
                self.default_armor
            )));
        }

        if !self.default_distance.is_finite() || self.default_distance < 0.0 {
            return Err(ConfigurationError::InvalidSetting(format!(
                "default_distance ({}) must be finite and non-negative",
                self.default_distance
            )));
        }

        if self.build_limit == 0 || self.comparison_limit == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "record limits must be positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str("default_distance = 120.0\nbuild_limit = 10\n").unwrap();
        assert_eq!(config.default_distance, 120.0);
        assert_eq!(config.build_limit, 10);
        assert_eq!(config.default_weapon, WeaponKey::new("ak74"));
        assert_eq!(config.comparison_limit, 500);
    }

    #[test]
    fn test_armor_outside_range_rejected() {
        let result = AppConfig::from_toml_str("default_armor = 140.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = AppConfig {
            comparison_limit: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
