//! In-memory record book of saved builds and comparisons
//!
//! Storage is someone else's job: the book serializes to and from JSON
//! and can be written to a file, nothing more.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::config::AppConfig;
use crate::core::error::{ArmoryError, Result};
use crate::core::types::RecordId;
use crate::damage::weapon::validate_distance;
use crate::damage::TargetProfile;
use crate::records::build::{BuildEquipment, BuildSettings, SavedBuild};
use crate::records::comparison::SavedComparison;
use crate::records::{now_timestamp, validate_name};

pub const BACKUP_VERSION: &str = "1.0";

/// Maximum number of records per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLimits {
    pub builds: usize,
    pub comparisons: usize,
}

impl Default for RecordLimits {
    fn default() -> Self {
        Self {
            builds: 1000,
            comparisons: 500,
        }
    }
}

impl RecordLimits {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            builds: config.build_limit,
            comparisons: config.comparison_limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStats {
    pub builds_count: usize,
    pub comparisons_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageLine {
    pub count: usize,
    pub limit: usize,
    pub percentage: f64,
}

impl UsageLine {
    fn new(count: usize, limit: usize) -> Self {
        Self {
            count,
            limit,
            percentage: if limit == 0 {
                0.0
            } else {
                count as f64 / limit as f64 * 100.0
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    pub builds: UsageLine,
    pub comparisons: UsageLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreSummary {
    pub restored: usize,
    pub total: usize,
    pub restored_comparisons: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearSummary {
    pub deleted_builds: usize,
    pub deleted_comparisons: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildExport {
    pub export_date: String,
    pub builds: Vec<SavedBuild>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupData {
    pub builds: Vec<SavedBuild>,
    #[serde(default)]
    pub comparisons: Vec<SavedComparison>,
    pub stats: RecordStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub version: String,
    pub backup_date: String,
    pub data: BackupData,
}

/// Build fields accepted by import; the id is always reassigned
#[derive(Debug, Deserialize)]
struct ImportedBuild {
    build_name: String,
    weapon_data: BuildEquipment,
    #[serde(default)]
    settings_data: BuildSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordBook {
    #[serde(default)]
    builds: Vec<SavedBuild>,
    #[serde(default)]
    comparisons: Vec<SavedComparison>,
    #[serde(skip)]
    limits: RecordLimits,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: RecordLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> RecordLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: RecordLimits) {
        self.limits = limits;
    }

    // === BUILDS ===

    pub fn save_build(&mut self, build: SavedBuild) -> Result<RecordId> {
        validate_name(&build.build_name)?;
        if self.builds.iter().any(|b| b.id == build.id) {
            return Err(ArmoryError::DuplicateRecord(build.id));
        }
        if self.builds.len() >= self.limits.builds {
            return Err(ArmoryError::LimitReached {
                kind: "builds",
                limit: self.limits.builds,
            });
        }
        let id = build.id;
        tracing::info!("Saved build '{}' ({})", build.build_name, id);
        self.builds.push(build);
        Ok(id)
    }

    pub fn builds(&self) -> &[SavedBuild] {
        &self.builds
    }

    pub fn build(&self, id: RecordId) -> Result<&SavedBuild> {
        self.builds
            .iter()
            .find(|b| b.id == id)
            .ok_or(ArmoryError::RecordNotFound(id))
    }

    pub fn delete_build(&mut self, id: RecordId) -> Result<SavedBuild> {
        let idx = self
            .builds
            .iter()
            .position(|b| b.id == id)
            .ok_or(ArmoryError::RecordNotFound(id))?;
        Ok(self.builds.remove(idx))
    }

    /// Replace a build's payload in place, keeping its id
    pub fn update_build(&mut self, id: RecordId, mut build: SavedBuild) -> Result<()> {
        validate_name(&build.build_name)?;
        let slot = self
            .builds
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(ArmoryError::RecordNotFound(id))?;
        build.id = id;
        *slot = build;
        Ok(())
    }

    /// Builds whose name contains `query`, ignoring case
    pub fn search_builds(&self, query: &str) -> Vec<&SavedBuild> {
        let needle = query.to_lowercase();
        self.builds
            .iter()
            .filter(|b| b.build_name.to_lowercase().contains(&needle))
            .collect()
    }

    // === COMPARISONS ===

    /// Store a comparison; its parameters must be usable by `recompute`
    pub fn save_comparison(&mut self, comparison: SavedComparison) -> Result<RecordId> {
        validate_name(&comparison.comparison_name)?;
        let parameters = &comparison.parameters;
        TargetProfile::new(parameters.health, parameters.armor)?;
        validate_distance(parameters.distance)?;
        if self.comparisons.iter().any(|c| c.id == comparison.id) {
            return Err(ArmoryError::DuplicateRecord(comparison.id));
        }
        if self.comparisons.len() >= self.limits.comparisons {
            return Err(ArmoryError::LimitReached {
                kind: "comparisons",
                limit: self.limits.comparisons,
            });
        }
        let id = comparison.id;
        tracing::info!("Saved comparison '{}' ({})", comparison.comparison_name, id);
        self.comparisons.push(comparison);
        Ok(id)
    }

    pub fn comparisons(&self) -> &[SavedComparison] {
        &self.comparisons
    }

    pub fn comparison(&self, id: RecordId) -> Result<&SavedComparison> {
        self.comparisons
            .iter()
            .find(|c| c.id == id)
            .ok_or(ArmoryError::RecordNotFound(id))
    }

    pub fn delete_comparison(&mut self, id: RecordId) -> Result<SavedComparison> {
        let idx = self
            .comparisons
            .iter()
            .position(|c| c.id == id)
            .ok_or(ArmoryError::RecordNotFound(id))?;
        Ok(self.comparisons.remove(idx))
    }

    // === MAINTENANCE ===

    pub fn stats(&self) -> RecordStats {
        RecordStats {
            builds_count: self.builds.len(),
            comparisons_count: self.comparisons.len(),
        }
    }

    pub fn usage(&self) -> UsageReport {
        UsageReport {
            builds: UsageLine::new(self.builds.len(), self.limits.builds),
            comparisons: UsageLine::new(self.comparisons.len(), self.limits.comparisons),
        }
    }

    pub fn export_builds(&self) -> Result<String> {
        let export = BuildExport {
            export_date: now_timestamp(),
            builds: self.builds.clone(),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }

    /// Import builds from an export; entries that fail are skipped
    pub fn import_builds(&mut self, json: &str) -> Result<ImportSummary> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let entries = value
            .get("builds")
            .and_then(|b| b.as_array())
            .ok_or_else(|| ArmoryError::InvalidBackup("missing 'builds' array".into()))?;

        let imported = self.save_build_values(entries);
        Ok(ImportSummary {
            imported,
            total: entries.len(),
        })
    }

    pub fn backup(&self) -> Backup {
        Backup {
            version: BACKUP_VERSION.to_string(),
            backup_date: now_timestamp(),
            data: BackupData {
                builds: self.builds.clone(),
                comparisons: self.comparisons.clone(),
                stats: self.stats(),
            },
        }
    }

    /// Restore builds and comparisons from a backup; bad entries are skipped
    pub fn restore_from_backup(&mut self, json: &str) -> Result<RestoreSummary> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let data = value
            .get("data")
            .ok_or_else(|| ArmoryError::InvalidBackup("missing 'data'".into()))?;
        let builds = data
            .get("builds")
            .and_then(|b| b.as_array())
            .ok_or_else(|| ArmoryError::InvalidBackup("missing 'data.builds' array".into()))?;

        let restored = self.save_build_values(builds);

        let mut restored_comparisons = 0;
        if let Some(comparisons) = data.get("comparisons").and_then(|c| c.as_array()) {
            for entry in comparisons {
                let outcome = serde_json::from_value::<SavedComparison>(entry.clone())
                    .map_err(ArmoryError::from)
                    .and_then(|mut comparison| {
                        comparison.id = RecordId::new();
                        self.save_comparison(comparison)
                    });
                match outcome {
                    Ok(_) => restored_comparisons += 1,
                    Err(e) => tracing::warn!("Skipping comparison during restore: {}", e),
                }
            }
        }

        Ok(RestoreSummary {
            restored,
            total: builds.len(),
            restored_comparisons,
        })
    }

    pub fn clear_all(&mut self) -> ClearSummary {
        let summary = ClearSummary {
            deleted_builds: self.builds.len(),
            deleted_comparisons: self.comparisons.len(),
        };
        self.builds.clear();
        self.comparisons.clear();
        summary
    }

    /// Load a record book written by `save_file`
    pub fn load_file(path: &Path, limits: RecordLimits) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut book: RecordBook = serde_json::from_str(&content)?;
        book.check_unique_ids()?;
        book.limits = limits;
        tracing::info!(
            "Loaded {} builds and {} comparisons from {}",
            book.builds.len(),
            book.comparisons.len(),
            path.display()
        );
        Ok(book)
    }

    /// Load a record book, starting empty when the file does not exist yet
    pub fn load_or_default(path: &Path, limits: RecordLimits) -> Result<Self> {
        if path.exists() {
            Self::load_file(path, limits)
        } else {
            Ok(Self::with_limits(limits))
        }
    }

    pub fn save_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Wrote record book to {}", path.display());
        Ok(())
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = AHashSet::new();
        let ids = self
            .builds
            .iter()
            .map(|b| b.id)
            .chain(self.comparisons.iter().map(|c| c.id));
        for id in ids {
            if !seen.insert(id) {
                return Err(ArmoryError::DuplicateRecord(id));
            }
        }
        Ok(())
    }

    fn save_build_values(&mut self, entries: &[serde_json::Value]) -> usize {
        let mut saved = 0;
        for entry in entries {
            let outcome = serde_json::from_value::<ImportedBuild>(entry.clone())
                .map_err(ArmoryError::from)
                .and_then(|build| {
                    self.save_build(SavedBuild {
                        id: RecordId::new(),
                        build_name: build.build_name,
                        weapon_data: build.weapon_data,
                        settings_data: build.settings_data,
                    })
                });
            match outcome {
                Ok(_) => saved += 1,
                Err(e) => tracing::warn!("Skipping build during import: {}", e),
            }
        }
        saved
    }
}
