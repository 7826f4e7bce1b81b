use thiserror::Error;

use crate::core::types::{ArtifactId, RecordId};

/// Malformed or out-of-range input to a single computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Distance must be finite and non-negative, got {0}")]
    InvalidDistance(f64),

    #[error("Armor must be within 0..=100 percent, got {0}")]
    ArmorOutOfRange(f64),

    #[error("Target health must be positive")]
    NonPositiveHealth,

    #[error("Base damage must be positive")]
    NonPositiveDamage,

    #[error("Damage per hit must be positive")]
    NonPositiveDamagePerHit,

    #[error("Fire rate must be finite and positive, got {0} rpm")]
    InvalidFireRate(f64),

    #[error("Distance modifier must be within (0, 1], got {0}")]
    ModifierOutOfRange(f64),

    #[error("Record name must not be empty")]
    EmptyName,

    #[error("Slot {index} is out of range for a container with {slots} slots")]
    SlotOutOfRange { index: usize, slots: usize },

    #[error("{count} artifacts do not fit into a container with {slots} slots")]
    TooManyArtifacts { count: usize, slots: usize },
}

/// Malformed reference data or configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Weapon '{weapon}': effective range {effective_range} must exceed point-blank range {point_blank}")]
    EffectiveRangeTooShort {
        weapon: String,
        effective_range: f64,
        point_blank: f64,
    },

    #[error("Weapon '{weapon}': max range {max_range} must exceed effective range {effective_range}")]
    MaxRangeNotBeyondEffective {
        weapon: String,
        effective_range: f64,
        max_range: f64,
    },

    #[error("Weapon '{weapon}': {reason}")]
    InvalidWeapon { weapon: String, reason: String },

    #[error("Duplicate catalog key: {0}")]
    DuplicateKey(String),

    #[error("Container '{0}' must have at least one artifact slot")]
    EmptyContainer(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

#[derive(Error, Debug)]
pub enum ArmoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),

    #[error("Unknown suit: {0}")]
    UnknownSuit(String),

    #[error("Unknown container: {0}")]
    UnknownContainer(String),

    #[error("Unknown artifact: {0}")]
    UnknownArtifact(ArtifactId),

    #[error("All {0} container slots are occupied")]
    ContainerFull(usize),

    #[error("Usage limit reached: at most {limit} saved {kind}")]
    LimitReached { kind: &'static str, limit: usize },

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Duplicate record id: {0}")]
    DuplicateRecord(RecordId),

    #[error("Invalid backup: {0}")]
    InvalidBackup(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArmoryError>;
