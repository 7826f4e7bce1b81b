//! Engagement resolution: one weapon against one target
//!
//! Composes falloff, effective damage and lethality into a `DamageResult`.
//! Pure function of its inputs; repeated calls give identical results.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::damage::effective::compute_effective_damage;
use crate::damage::falloff::falloff;
use crate::damage::lethality::{compute_shots_to_kill, compute_time_to_kill};
use crate::damage::weapon::{validate_distance, TargetProfile, Weapon};

/// Everything the calculator derives for one engagement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    pub distance_modifier: f64,
    /// Base damage after falloff, before armor
    pub modified_damage: u32,
    pub body_damage_per_hit: u32,
    pub head_damage_per_hit: u32,
    pub body_shots_to_kill: u32,
    pub head_shots_to_kill: u32,
    /// Seconds
    pub body_time_to_kill: f64,
    /// Seconds
    pub head_time_to_kill: f64,
    /// Damage dealt by the full body-shot burst (overkill included)
    pub total_body_damage: u32,
    pub total_head_damage: u32,
    /// Body shots that aiming for the head saves
    pub shots_saved: u32,
    /// Seconds saved by aiming for the head
    pub time_saved: f64,
    /// `shots_saved` as a rounded percentage of body shots
    pub efficiency_percent: u32,
}

/// Resolve a single engagement
pub fn compare_engagement(
    weapon: &Weapon,
    target: &TargetProfile,
    distance: f64,
) -> Result<DamageResult> {
    weapon.validate()?;
    target.validate()?;
    validate_distance(distance)?;

    let distance_modifier = falloff(distance, weapon.effective_range, weapon.max_range);
    let hit = compute_effective_damage(weapon.base_damage, distance_modifier, target.armor)?;

    let body_shots = compute_shots_to_kill(target.health, hit.body)?;
    let head_shots = compute_shots_to_kill(target.health, hit.head)?;

    let body_time = compute_time_to_kill(body_shots, weapon.fire_rate_rpm)?;
    let head_time = compute_time_to_kill(head_shots, weapon.fire_rate_rpm)?;

    // head >= body per hit, so head_shots <= body_shots and body_shots >= 1
    let shots_saved = body_shots.saturating_sub(head_shots);
    let efficiency_percent = (f64::from(shots_saved) / f64::from(body_shots) * 100.0).round() as u32;

    let result = DamageResult {
        distance_modifier,
        modified_damage: hit.modified,
        body_damage_per_hit: hit.body,
        head_damage_per_hit: hit.head,
        body_shots_to_kill: body_shots,
        head_shots_to_kill: head_shots,
        body_time_to_kill: body_time,
        head_time_to_kill: head_time,
        total_body_damage: body_shots.saturating_mul(hit.body),
        total_head_damage: head_shots.saturating_mul(hit.head),
        shots_saved,
        time_saved: body_time - head_time,
        efficiency_percent,
    };

    tracing::debug!(
        weapon = %weapon.key,
        distance,
        modifier = distance_modifier,
        body_shots,
        head_shots,
        "Resolved engagement"
    );

    Ok(result)
}

/// Resolve two weapons against the same target and distance
///
/// The results are independent; ordering or ranking them is up to the caller.
pub fn compare_two_weapons(
    first: &Weapon,
    second: &Weapon,
    target: &TargetProfile,
    distance: f64,
) -> Result<(DamageResult, DamageResult)> {
    let first_result = compare_engagement(first, target, distance)?;
    let second_result = compare_engagement(second, target, distance)?;
    Ok((first_result, second_result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ak74_at_fifty_meters() {
        let result = compare_engagement(&Weapon::ak74(), &TargetProfile::default(), 50.0).unwrap();

        assert!((result.distance_modifier - 0.9143).abs() < 1e-4);
        assert_eq!(result.modified_damage, 41);
        assert_eq!(result.body_damage_per_hit, 41);
        assert_eq!(result.head_damage_per_hit, 61);
        assert_eq!(result.body_shots_to_kill, 3);
        assert_eq!(result.head_shots_to_kill, 2);
        assert!((result.body_time_to_kill - 0.2).abs() < 1e-9);
        assert!((result.head_time_to_kill - 0.1).abs() < 1e-9);
        assert_eq!(result.shots_saved, 1);
        assert_eq!(result.efficiency_percent, 33);
        assert_eq!(result.total_body_damage, 123);
        assert_eq!(result.total_head_damage, 122);
        assert!((result.time_saved - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_ak74_beyond_max_range() {
        let result = compare_engagement(&Weapon::ak74(), &TargetProfile::default(), 500.0).unwrap();

        assert_eq!(result.distance_modifier, 0.1);
        assert_eq!(result.modified_damage, 4);
        assert_eq!(result.body_damage_per_hit, 4);
        assert_eq!(result.head_damage_per_hit, 6);
        assert_eq!(result.body_shots_to_kill, 25);
        assert_eq!(result.head_shots_to_kill, 17);
        assert_eq!(result.shots_saved, 8);
        assert_eq!(result.efficiency_percent, 32);
    }

    #[test]
    fn test_one_shot_kill_saves_nothing() {
        let target = TargetProfile::new(50, 0.0).unwrap();
        let result = compare_engagement(&Weapon::svd(), &target, 5.0).unwrap();

        assert_eq!(result.body_shots_to_kill, 1);
        assert_eq!(result.head_shots_to_kill, 1);
        assert_eq!(result.body_time_to_kill, 0.0);
        assert_eq!(result.shots_saved, 0);
        assert_eq!(result.efficiency_percent, 0);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let target = TargetProfile::new(150, 35.0).unwrap();
        let first = compare_engagement(&Weapon::shotgun(), &target, 22.0).unwrap();
        let second = compare_engagement(&Weapon::shotgun(), &target, 22.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_weapons_are_independent() {
        let target = TargetProfile::default();
        let (ak, svd) = compare_two_weapons(&Weapon::ak74(), &Weapon::svd(), &target, 50.0).unwrap();

        assert_eq!(ak, compare_engagement(&Weapon::ak74(), &target, 50.0).unwrap());
        assert_eq!(svd, compare_engagement(&Weapon::svd(), &target, 50.0).unwrap());
    }

    #[test]
    fn test_invalid_target_rejected_before_computation() {
        let target = TargetProfile {
            health: 0,
            armor: 0.0,
        };
        assert!(compare_engagement(&Weapon::ak74(), &target, 50.0).is_err());

        let armored = TargetProfile {
            health: 100,
            armor: 120.0,
        };
        assert!(compare_engagement(&Weapon::ak74(), &armored, 50.0).is_err());
    }

    #[test]
    fn test_degenerate_weapon_rejected_on_first_use() {
        let mut weapon = Weapon::pm();
        weapon.effective_range = 8.0;
        assert!(compare_engagement(&weapon, &TargetProfile::default(), 20.0).is_err());
    }
}
