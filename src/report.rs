//! Presentation: text rendering and caller-side ranking of results

use ordered_float::OrderedFloat;
use serde::Serialize;
use std::fmt::Write;
use std::str::FromStr;

use crate::catalog::{Catalog, StatBlock};
use crate::core::error::Result;
use crate::damage::{compare_engagement, DamageResult, TargetProfile, Weapon};

/// Result field to rank weapons by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankKey {
    BodyTimeToKill,
    HeadTimeToKill,
    BodyShots,
    HeadShots,
    Efficiency,
    BodyDamage,
}

impl RankKey {
    /// Sort score; lower ranks first
    fn score(self, result: &DamageResult) -> OrderedFloat<f64> {
        let score = match self {
            RankKey::BodyTimeToKill => result.body_time_to_kill,
            RankKey::HeadTimeToKill => result.head_time_to_kill,
            RankKey::BodyShots => f64::from(result.body_shots_to_kill),
            RankKey::HeadShots => f64::from(result.head_shots_to_kill),
            RankKey::Efficiency => -f64::from(result.efficiency_percent),
            RankKey::BodyDamage => -f64::from(result.body_damage_per_hit),
        };
        OrderedFloat(score)
    }
}

impl FromStr for RankKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "body-ttk" => Ok(RankKey::BodyTimeToKill),
            "head-ttk" => Ok(RankKey::HeadTimeToKill),
            "body-shots" => Ok(RankKey::BodyShots),
            "head-shots" => Ok(RankKey::HeadShots),
            "efficiency" => Ok(RankKey::Efficiency),
            "body-damage" => Ok(RankKey::BodyDamage),
            other => Err(format!(
                "unknown rank key '{}' (expected body-ttk, head-ttk, body-shots, head-shots, efficiency, body-damage)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWeapon {
    pub key: String,
    pub name: String,
    pub result: DamageResult,
}

/// Every catalog weapon against one target, best first
///
/// Ties keep catalog order.
pub fn rank_weapons(
    catalog: &Catalog,
    target: &TargetProfile,
    distance: f64,
    key: RankKey,
) -> Result<Vec<RankedWeapon>> {
    let mut ranked = catalog
        .weapons()
        .iter()
        .map(|weapon| {
            Ok(RankedWeapon {
                key: weapon.key.to_string(),
                name: weapon.name.clone(),
                result: compare_engagement(weapon, target, distance)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by_key(|entry| key.score(&entry.result));
    Ok(ranked)
}

pub fn percent(modifier: f64) -> i64 {
    (modifier * 100.0).round() as i64
}

/// Single-weapon breakdown
pub fn render_result(weapon: &Weapon, distance: f64, result: &DamageResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", weapon.name, weapon.description);
    let _ = writeln!(
        out,
        "  Base damage {} | {} rpm | effective range {} m",
        weapon.base_damage, weapon.fire_rate_rpm, weapon.effective_range
    );
    let _ = writeln!(
        out,
        "  Distance {} m (damage: {}%)",
        distance,
        percent(result.distance_modifier)
    );
    let _ = writeln!(
        out,
        "  Body: {} damage, {} shots, {:.1} s",
        result.body_damage_per_hit, result.body_shots_to_kill, result.body_time_to_kill
    );
    let _ = writeln!(
        out,
        "  Head: {} damage, {} shots, {:.1} s",
        result.head_damage_per_hit, result.head_shots_to_kill, result.head_time_to_kill
    );
    let _ = write!(
        out,
        "  Headshots save {} shots, {:.1} s ({}% efficiency)",
        result.shots_saved, result.time_saved, result.efficiency_percent
    );
    out
}

/// Side-by-side weapon cards
pub fn render_comparison(
    first: (&Weapon, &DamageResult),
    second: (&Weapon, &DamageResult),
) -> String {
    [first, second]
        .into_iter()
        .map(|(weapon, result)| {
            format!(
                "{}\n  Damage: {}\n  Fire rate: {} rpm\n  Effective range: {} m\n  Body shots: {}\n  Time to kill: {:.1} s",
                weapon.name,
                weapon.base_damage,
                weapon.fire_rate_rpm,
                weapon.effective_range,
                result.body_shots_to_kill,
                result.body_time_to_kill
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_stats(stats: &StatBlock) -> String {
    crate::catalog::Stat::ALL
        .iter()
        .map(|&stat| format!("{}: {}%", stat.label(), stats.get(stat)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_body_damage_at_point_blank() {
        let catalog = Catalog::standard();
        let ranked =
            rank_weapons(&catalog, &TargetProfile::default(), 5.0, RankKey::BodyDamage).unwrap();
        let keys: Vec<_> = ranked.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["svd", "shotgun", "ak74", "pm"]);
    }

    #[test]
    fn test_rank_by_time_prefers_fast_fire() {
        let catalog = Catalog::standard();
        let ranked =
            rank_weapons(&catalog, &TargetProfile::default(), 50.0, RankKey::BodyTimeToKill)
                .unwrap();
        assert_eq!(ranked[0].key, "ak74");
    }

    #[test]
    fn test_rank_key_parsing() {
        assert_eq!("head-ttk".parse::<RankKey>().unwrap(), RankKey::HeadTimeToKill);
        assert!("dps".parse::<RankKey>().is_err());
    }

    #[test]
    fn test_render_result_mentions_modifier() {
        let weapon = Weapon::ak74();
        let result = compare_engagement(&weapon, &TargetProfile::default(), 50.0).unwrap();
        let text = render_result(&weapon, 50.0, &result);
        assert!(text.contains("damage: 91%"));
        assert!(text.contains("Body: 41 damage, 3 shots, 0.2 s"));
        assert!(text.contains("33% efficiency"));
    }

    #[test]
    fn test_render_stats_lists_all_fields() {
        let text = render_stats(&StatBlock::resistances(80, 40, 20));
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("Bullet resistance: 80%"));
        assert!(text.ends_with("Stamina: 0%"));
    }
}
