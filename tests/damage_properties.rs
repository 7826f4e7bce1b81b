//! Property tests for the damage model

use csx_armory::damage::{
    compare_engagement, compute_distance_modifier, compute_effective_damage, compute_time_to_kill,
    TargetProfile, Weapon,
};
use proptest::prelude::*;

/// Well-formed (effective_range, max_range) pairs
fn ranges() -> impl Strategy<Value = (f64, f64)> {
    (10.5f64..600.0, 1.0f64..1000.0).prop_map(|(effective, extra)| (effective, effective + extra))
}

fn weapon() -> impl Strategy<Value = Weapon> {
    (1u32..500, 1.0f64..1200.0, ranges()).prop_map(|(damage, rpm, (effective, max))| {
        Weapon::new("prop", "Prop", damage, rpm, effective, max).unwrap()
    })
}

fn target() -> impl Strategy<Value = TargetProfile> {
    (1u32..2000, 0.0f64..=100.0).prop_map(|(health, armor)| TargetProfile { health, armor })
}

proptest! {
    #[test]
    fn point_blank_is_full_damage(distance in 0.0f64..=10.0, (effective, max) in ranges()) {
        prop_assert_eq!(compute_distance_modifier(distance, effective, max).unwrap(), 1.0);
    }

    #[test]
    fn beyond_max_range_is_floor(overshoot in 0.001f64..10_000.0, (effective, max) in ranges()) {
        prop_assert_eq!(compute_distance_modifier(max + overshoot, effective, max).unwrap(), 0.1);
    }

    #[test]
    fn modifier_stays_in_bounds(distance in 0.0f64..5000.0, (effective, max) in ranges()) {
        let modifier = compute_distance_modifier(distance, effective, max).unwrap();
        prop_assert!((0.1..=1.0).contains(&modifier));
    }

    #[test]
    fn modifier_is_non_increasing(
        a in 0.0f64..3000.0,
        b in 0.0f64..3000.0,
        (effective, max) in ranges(),
    ) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let near_mod = compute_distance_modifier(near, effective, max).unwrap();
        let far_mod = compute_distance_modifier(far, effective, max).unwrap();
        prop_assert!(far_mod <= near_mod, "{} m -> {}, {} m -> {}", near, near_mod, far, far_mod);
    }

    #[test]
    fn head_damage_at_least_body(
        damage in 1u32..1000,
        modifier in 0.1f64..=1.0,
        armor in 0.0f64..=100.0,
    ) {
        let hit = compute_effective_damage(damage, modifier, armor).unwrap();
        prop_assert!(hit.head >= hit.body);
        prop_assert!(hit.body >= 1);
    }

    #[test]
    fn head_shots_never_exceed_body_shots(
        weapon in weapon(),
        target in target(),
        distance in 0.0f64..2000.0,
    ) {
        let result = compare_engagement(&weapon, &target, distance).unwrap();
        prop_assert!(result.head_shots_to_kill <= result.body_shots_to_kill);
        prop_assert!(result.head_time_to_kill <= result.body_time_to_kill);
        prop_assert!(result.efficiency_percent <= 100);
        prop_assert_eq!(result.shots_saved, result.body_shots_to_kill - result.head_shots_to_kill);
    }

    #[test]
    fn single_shot_takes_no_time(rpm in 0.01f64..5000.0) {
        prop_assert_eq!(compute_time_to_kill(1, rpm).unwrap(), 0.0);
    }

    #[test]
    fn engagement_is_repeatable(
        weapon in weapon(),
        target in target(),
        distance in 0.0f64..2000.0,
    ) {
        let first = compare_engagement(&weapon, &target, distance).unwrap();
        let second = compare_engagement(&weapon, &target, distance).unwrap();
        prop_assert_eq!(first, second);
    }
}
