//! Per-hit damage after distance falloff and armor

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ValidationError};
use crate::damage::constants::{HEADSHOT_MULTIPLIER, MAX_ARMOR_PERCENT, MIN_HIT_DAMAGE};
use crate::damage::weapon::validate_armor;

/// Damage of a single landed hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitDamage {
    /// Base damage after distance falloff, before armor
    pub modified: u32,
    pub body: u32,
    pub head: u32,
}

/// Apply falloff and armor to a weapon's base damage
///
/// Every stage is floored to a whole hit point and never drops below 1.
/// Head hits use the fixed 1.5x multiplier before armor.
pub fn compute_effective_damage(
    base_damage: u32,
    distance_modifier: f64,
    armor_percent: f64,
) -> Result<HitDamage> {
    if base_damage == 0 {
        return Err(ValidationError::NonPositiveDamage.into());
    }
    if !(distance_modifier > 0.0 && distance_modifier <= 1.0) {
        return Err(ValidationError::ModifierOutOfRange(distance_modifier).into());
    }
    validate_armor(armor_percent)?;

    let modified = floor_hit(base_damage as f64 * distance_modifier);
    let armor_reduction = armor_percent / MAX_ARMOR_PERCENT;
    let body = floor_hit(modified as f64 * (1.0 - armor_reduction));
    let head = floor_hit(modified as f64 * HEADSHOT_MULTIPLIER * (1.0 - armor_reduction));

    Ok(HitDamage {
        modified,
        body,
        head,
    })
}

fn floor_hit(raw: f64) -> u32 {
    // `as` saturates at u32::MAX for absurd base damage
    (raw.floor() as u32).max(MIN_HIT_DAMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmored_falloff() {
        let modifier = 1.0 - 40.0 / 140.0 * 0.3;
        let hit = compute_effective_damage(45, modifier, 0.0).unwrap();
        assert_eq!(hit.modified, 41);
        assert_eq!(hit.body, 41);
        assert_eq!(hit.head, 61);
    }

    #[test]
    fn test_floor_modifier_keeps_minimum_one() {
        let hit = compute_effective_damage(45, 0.1, 0.0).unwrap();
        assert_eq!(hit.modified, 4);

        let tiny = compute_effective_damage(5, 0.1, 0.0).unwrap();
        assert_eq!(tiny.modified, 1);
        assert_eq!(tiny.body, 1);
        assert_eq!(tiny.head, 1);
    }

    #[test]
    fn test_armor_reduces_both_zones() {
        let hit = compute_effective_damage(80, 1.0, 50.0).unwrap();
        assert_eq!(hit.modified, 80);
        assert_eq!(hit.body, 40);
        assert_eq!(hit.head, 60);
    }

    #[test]
    fn test_huge_base_damage_saturates() {
        let hit = compute_effective_damage(u32::MAX, 1.0, 0.0).unwrap();
        assert_eq!(hit.modified, u32::MAX);
        assert_eq!(hit.body, u32::MAX);
        assert_eq!(hit.head, u32::MAX);
    }

    #[test]
    fn test_full_armor_still_deals_one() {
        let hit = compute_effective_damage(80, 1.0, 100.0).unwrap();
        assert_eq!(hit.body, 1);
        assert_eq!(hit.head, 1);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(compute_effective_damage(0, 1.0, 0.0).is_err());
        assert!(compute_effective_damage(45, 0.0, 0.0).is_err());
        assert!(compute_effective_damage(45, 1.2, 0.0).is_err());
        assert!(compute_effective_damage(45, 1.0, -10.0).is_err());
        assert!(compute_effective_damage(45, 1.0, 101.0).is_err());
    }
}
