//! Saved equipment builds

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, StatBlock};
use crate::core::error::Result;
use crate::core::types::{ArtifactId, ContainerKey, RecordId, SuitKey};
use crate::loadout::Loadout;
use crate::records::{now_timestamp, validate_name};

/// Equipment part of a saved build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEquipment {
    pub suit: SuitKey,
    pub container: ContainerKey,
    /// Equipped artifacts, packed (empty slots dropped)
    #[serde(default)]
    pub artifacts: Vec<ArtifactId>,
}

/// Derived data stored alongside a build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub total_stats: StatBlock,
    /// RFC 3339
    pub timestamp: String,
}

/// A named loadout snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBuild {
    #[serde(default)]
    pub id: RecordId,
    pub build_name: String,
    pub weapon_data: BuildEquipment,
    #[serde(default)]
    pub settings_data: BuildSettings,
}

impl SavedBuild {
    /// Snapshot a loadout under a name, with its current totals
    pub fn capture(name: &str, loadout: &Loadout, catalog: &Catalog) -> Result<Self> {
        let build_name = validate_name(name)?;
        let total_stats = loadout.total_stats(catalog)?;

        Ok(Self {
            id: RecordId::new(),
            build_name,
            weapon_data: BuildEquipment {
                suit: loadout.suit().clone(),
                container: loadout.container().clone(),
                artifacts: loadout.equipped().collect(),
            },
            settings_data: BuildSettings {
                total_stats,
                timestamp: now_timestamp(),
            },
        })
    }

    /// Rebuild the loadout this build was captured from
    pub fn restore(&self, catalog: &Catalog) -> Result<Loadout> {
        Loadout::from_parts(
            catalog,
            self.weapon_data.suit.as_str(),
            self.weapon_data.container.as_str(),
            &self.weapon_data.artifacts,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ArmoryError, ValidationError};

    #[test]
    fn test_capture_and_restore() {
        let catalog = Catalog::standard();
        let mut loadout = Loadout::new(&catalog, "scientific", "scientific").unwrap();
        loadout.place_artifact(&catalog, 1, ArtifactId(2)).unwrap();

        let build = SavedBuild::capture("Lab run", &loadout, &catalog).unwrap();
        assert_eq!(build.build_name, "Lab run");
        assert_eq!(build.weapon_data.artifacts, vec![ArtifactId(2)]);
        assert_eq!(build.settings_data.total_stats.anomaly_resistance, 80 + 20 + 20);
        assert!(!build.settings_data.timestamp.is_empty());

        // Packed on save, so the artifact comes back in the first slot
        let restored = build.restore(&catalog).unwrap();
        assert_eq!(restored.slots()[0], Some(ArtifactId(2)));
        assert_eq!(restored.total_stats(&catalog).unwrap(), build.settings_data.total_stats);
    }

    #[test]
    fn test_blank_name_rejected() {
        let catalog = Catalog::standard();
        let loadout = Loadout::new(&catalog, "combat", "standard").unwrap();
        assert!(matches!(
            SavedBuild::capture("   ", &loadout, &catalog),
            Err(ArmoryError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn test_payload_uses_record_keys() {
        let catalog = Catalog::standard();
        let loadout = Loadout::new(&catalog, "combat", "standard").unwrap();
        let build = SavedBuild::capture("Default", &loadout, &catalog).unwrap();

        let json = serde_json::to_value(&build).unwrap();
        assert_eq!(json["build_name"], "Default");
        assert_eq!(json["weapon_data"]["suit"], "combat");
        assert_eq!(json["settings_data"]["total_stats"]["bullet_resistance"], 80);
    }
}
