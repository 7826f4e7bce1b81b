//! Weapon and target inputs to the damage model
//!
//! A weapon is immutable reference data. Its range contract
//! (`effective_range > POINT_BLANK_RANGE`, `max_range > effective_range`)
//! is checked when it is built and again on first use, so the falloff
//! curve never divides by zero.

use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigurationError, Result, ValidationError};
use crate::core::types::WeaponKey;
use crate::damage::constants::{MAX_ARMOR_PERCENT, POINT_BLANK_RANGE, SECONDS_PER_MINUTE};

/// Firearm reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub key: WeaponKey,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Damage of one body hit at point-blank range against no armor
    pub base_damage: u32,
    /// Rounds per minute
    pub fire_rate_rpm: f64,
    /// Distance (m) at which falloff reaches 70%
    pub effective_range: f64,
    /// Distance (m) beyond which damage stays at the floor
    pub max_range: f64,
}

impl Weapon {
    /// Build a weapon, rejecting malformed reference data
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        base_damage: u32,
        fire_rate_rpm: f64,
        effective_range: f64,
        max_range: f64,
    ) -> Result<Self> {
        let weapon = Self {
            key: WeaponKey::new(key),
            name: name.into(),
            description: String::new(),
            base_damage,
            fire_rate_rpm,
            effective_range,
            max_range,
        };
        weapon.validate()?;
        Ok(weapon)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check damage, fire rate and range contract
    pub fn validate(&self) -> Result<()> {
        if self.base_damage == 0 {
            return Err(ValidationError::NonPositiveDamage.into());
        }
        validate_fire_rate(self.fire_rate_rpm)?;
        validate_ranges(self.key.as_str(), self.effective_range, self.max_range)?;
        Ok(())
    }

    /// Seconds between two consecutive shots
    pub fn shot_interval(&self) -> f64 {
        SECONDS_PER_MINUTE / self.fire_rate_rpm
    }

    /// Standard weapon: AK-74 assault rifle
    pub fn ak74() -> Self {
        Self::preset("ak74", "AK-74", "Kalashnikov assault rifle", 45, 600.0, 150.0, 400.0)
    }

    /// Standard weapon: SVD sniper rifle
    pub fn svd() -> Self {
        Self::preset("svd", "SVD", "Dragunov sniper rifle", 80, 30.0, 300.0, 800.0)
    }

    /// Standard weapon: pump shotgun
    pub fn shotgun() -> Self {
        Self::preset("shotgun", "Shotgun", "Close-quarters weapon", 60, 60.0, 15.0, 40.0)
    }

    /// Standard weapon: PM pistol
    pub fn pm() -> Self {
        Self::preset("pm", "PM", "Makarov pistol", 20, 30.0, 25.0, 50.0)
    }

    fn preset(
        key: &str,
        name: &str,
        description: &str,
        base_damage: u32,
        fire_rate_rpm: f64,
        effective_range: f64,
        max_range: f64,
    ) -> Self {
        Self {
            key: WeaponKey::new(key),
            name: name.to_string(),
            description: description.to_string(),
            base_damage,
            fire_rate_rpm,
            effective_range,
            max_range,
        }
    }
}

pub(crate) fn validate_fire_rate(fire_rate_rpm: f64) -> std::result::Result<(), ValidationError> {
    if !fire_rate_rpm.is_finite() || fire_rate_rpm <= 0.0 {
        return Err(ValidationError::InvalidFireRate(fire_rate_rpm));
    }
    Ok(())
}

/// Range contract shared by weapons and the raw falloff function
pub(crate) fn validate_ranges(
    weapon: &str,
    effective_range: f64,
    max_range: f64,
) -> std::result::Result<(), ConfigurationError> {
    if effective_range.is_infinite() || max_range.is_infinite() {
        return Err(ConfigurationError::InvalidWeapon {
            weapon: weapon.to_string(),
            reason: "ranges must be finite".into(),
        });
    }

    // NaN fails both comparisons and lands here as well
    if !(effective_range > POINT_BLANK_RANGE) {
        return Err(ConfigurationError::EffectiveRangeTooShort {
            weapon: weapon.to_string(),
            effective_range,
            point_blank: POINT_BLANK_RANGE,
        });
    }

    if !(max_range > effective_range) {
        return Err(ConfigurationError::MaxRangeNotBeyondEffective {
            weapon: weapon.to_string(),
            effective_range,
            max_range,
        });
    }

    Ok(())
}

/// The target being shot at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub health: u32,
    /// Armor in percent, 0..=100
    pub armor: f64,
}

impl TargetProfile {
    pub fn new(health: u32, armor: f64) -> Result<Self> {
        let target = Self { health, armor };
        target.validate()?;
        Ok(target)
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.health == 0 {
            return Err(ValidationError::NonPositiveHealth);
        }
        validate_armor(self.armor)
    }
}

impl Default for TargetProfile {
    fn default() -> Self {
        Self {
            health: 100,
            armor: 0.0,
        }
    }
}

pub(crate) fn validate_armor(armor: f64) -> std::result::Result<(), ValidationError> {
    // `contains` is false for NaN
    if !(0.0..=MAX_ARMOR_PERCENT).contains(&armor) {
        return Err(ValidationError::ArmorOutOfRange(armor));
    }
    Ok(())
}

pub(crate) fn validate_distance(distance: f64) -> std::result::Result<(), ValidationError> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(ValidationError::InvalidDistance(distance));
    }
    Ok(())
}

/// One weapon against one target at one distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementInput {
    pub weapon: Weapon,
    pub target: TargetProfile,
    pub distance: f64,
}

impl EngagementInput {
    pub fn new(weapon: Weapon, target: TargetProfile, distance: f64) -> Result<Self> {
        let input = Self {
            weapon,
            target,
            distance,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<()> {
        self.weapon.validate()?;
        self.target.validate()?;
        validate_distance(self.distance)?;
        Ok(())
    }

    /// Run the full damage model for this engagement
    pub fn evaluate(&self) -> Result<crate::damage::DamageResult> {
        crate::damage::compare_engagement(&self.weapon, &self.target, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ArmoryError;

    #[test]
    fn test_standard_weapons_are_valid() {
        for weapon in [Weapon::ak74(), Weapon::svd(), Weapon::shotgun(), Weapon::pm()] {
            assert!(weapon.validate().is_ok(), "{} should be valid", weapon.key);
        }
    }

    #[test]
    fn test_effective_range_must_exceed_point_blank() {
        let result = Weapon::new("stub", "Stub", 10, 60.0, 10.0, 50.0);
        assert!(matches!(
            result,
            Err(ArmoryError::Configuration(ConfigurationError::EffectiveRangeTooShort { .. }))
        ));
    }

    #[test]
    fn test_max_range_must_exceed_effective() {
        let result = Weapon::new("stub", "Stub", 10, 60.0, 100.0, 100.0);
        assert!(matches!(
            result,
            Err(ArmoryError::Configuration(ConfigurationError::MaxRangeNotBeyondEffective { .. }))
        ));
    }

    #[test]
    fn test_zero_damage_and_fire_rate_rejected() {
        assert!(matches!(
            Weapon::new("stub", "Stub", 0, 60.0, 100.0, 200.0),
            Err(ArmoryError::Validation(ValidationError::NonPositiveDamage))
        ));
        assert!(matches!(
            Weapon::new("stub", "Stub", 10, 0.0, 100.0, 200.0),
            Err(ArmoryError::Validation(ValidationError::InvalidFireRate(_)))
        ));
    }

    #[test]
    fn test_shot_interval() {
        assert!((Weapon::ak74().shot_interval() - 0.1).abs() < 1e-12);
        assert!((Weapon::svd().shot_interval() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_target_validation() {
        assert!(TargetProfile::new(100, 0.0).is_ok());
        assert!(TargetProfile::new(100, 100.0).is_ok());
        assert!(TargetProfile::new(0, 0.0).is_err());
        assert!(TargetProfile::new(100, -1.0).is_err());
        assert!(TargetProfile::new(100, 100.5).is_err());
        assert!(TargetProfile::new(100, f64::NAN).is_err());
    }

    #[test]
    fn test_engagement_rejects_negative_distance() {
        let result = EngagementInput::new(Weapon::ak74(), TargetProfile::default(), -5.0);
        assert!(matches!(
            result,
            Err(ArmoryError::Validation(ValidationError::InvalidDistance(_)))
        ));
    }
}
