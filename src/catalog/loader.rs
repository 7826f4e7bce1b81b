//! Load a catalog from a TOML file
//!
//! ```toml
//! [[weapons]]
//! key = "ak74"
//! name = "AK-74"
//! base_damage = 45
//! fire_rate_rpm = 600.0
//! effective_range = 150.0
//! max_range = 400.0
//!
//! [[containers]]
//! key = "military"
//! name = "Military container"
//! slots = 3
//! bonus_stats = { bullet_resistance = 15, movement_speed = -5 }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::catalog::equipment::{Artifact, Container, Suit};
use crate::catalog::registry::Catalog;
use crate::core::error::Result;
use crate::damage::Weapon;

/// On-disk layout of a catalog file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    weapons: Vec<Weapon>,
    suits: Vec<Suit>,
    containers: Vec<Container>,
    artifacts: Vec<Artifact>,
}

impl Catalog {
    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut catalog = Catalog::new();
        for weapon in file.weapons {
            catalog.add_weapon(weapon)?;
        }
        for suit in file.suits {
            catalog.add_suit(suit)?;
        }
        for container in file.containers {
            catalog.add_container(container)?;
        }
        for artifact in file.artifacts {
            catalog.add_artifact(artifact)?;
        }
        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded catalog from {}: {} weapons, {} suits, {} containers, {} artifacts",
            path.display(),
            catalog.weapons().len(),
            catalog.suits().len(),
            catalog.containers().len(),
            catalog.artifacts().len()
        );
        Ok(catalog)
    }
}
