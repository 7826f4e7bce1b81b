//! Protective equipment: suits, artifact containers and artifacts
//!
//! All equipment contributes to the same fixed stat record. Values are
//! percent points and are simply summed; negative values are penalties.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::core::types::{ArtifactId, ContainerKey, SuitKey};

/// One of the five equipment stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    BulletResistance,
    AnomalyResistance,
    RadiationResistance,
    MovementSpeed,
    Stamina,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::BulletResistance,
        Stat::AnomalyResistance,
        Stat::RadiationResistance,
        Stat::MovementSpeed,
        Stat::Stamina,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stat::BulletResistance => "Bullet resistance",
            Stat::AnomalyResistance => "Anomaly resistance",
            Stat::RadiationResistance => "Radiation resistance",
            Stat::MovementSpeed => "Movement speed",
            Stat::Stamina => "Stamina",
        }
    }
}

/// Fixed stat record shared by suits, containers, artifacts and totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub bullet_resistance: i32,
    pub anomaly_resistance: i32,
    pub radiation_resistance: i32,
    pub movement_speed: i32,
    pub stamina: i32,
}

impl StatBlock {
    /// Resistances only (what a suit provides)
    pub fn resistances(bullet: i32, anomaly: i32, radiation: i32) -> Self {
        Self {
            bullet_resistance: bullet,
            anomaly_resistance: anomaly,
            radiation_resistance: radiation,
            ..Self::default()
        }
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::BulletResistance => self.bullet_resistance,
            Stat::AnomalyResistance => self.anomaly_resistance,
            Stat::RadiationResistance => self.radiation_resistance,
            Stat::MovementSpeed => self.movement_speed,
            Stat::Stamina => self.stamina,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::BulletResistance => self.bullet_resistance = value,
            Stat::AnomalyResistance => self.anomaly_resistance = value,
            Stat::RadiationResistance => self.radiation_resistance = value,
            Stat::MovementSpeed => self.movement_speed = value,
            Stat::Stamina => self.stamina = value,
        }
    }

    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    /// Stats with a non-zero value, in display order
    pub fn nonzero(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL
            .into_iter()
            .map(|stat| (stat, self.get(stat)))
            .filter(|(_, value)| *value != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.nonzero().next().is_none()
    }
}

impl Add for StatBlock {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            bullet_resistance: self.bullet_resistance.saturating_add(rhs.bullet_resistance),
            anomaly_resistance: self.anomaly_resistance.saturating_add(rhs.anomaly_resistance),
            radiation_resistance: self
                .radiation_resistance
                .saturating_add(rhs.radiation_resistance),
            movement_speed: self.movement_speed.saturating_add(rhs.movement_speed),
            stamina: self.stamina.saturating_add(rhs.stamina),
        }
    }
}

impl AddAssign for StatBlock {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for StatBlock {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Protective suit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suit {
    pub key: SuitKey,
    pub name: String,
    pub base_stats: StatBlock,
}

impl Suit {
    pub fn combat() -> Self {
        Self {
            key: SuitKey::new("combat"),
            name: "Combat suit".into(),
            base_stats: StatBlock::resistances(80, 40, 20),
        }
    }

    pub fn scientific() -> Self {
        Self {
            key: SuitKey::new("scientific"),
            name: "Scientific suit".into(),
            base_stats: StatBlock::resistances(30, 80, 60),
        }
    }

    pub fn combined() -> Self {
        Self {
            key: SuitKey::new("combined"),
            name: "Combined suit".into(),
            base_stats: StatBlock::resistances(60, 60, 40),
        }
    }
}

/// Artifact container worn with a suit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub key: ContainerKey,
    pub name: String,
    /// Number of artifact slots (at least one)
    pub slots: usize,
    #[serde(default)]
    pub bonus_stats: StatBlock,
}

impl Container {
    pub fn standard() -> Self {
        Self {
            key: ContainerKey::new("standard"),
            name: "Standard container".into(),
            slots: 4,
            bonus_stats: StatBlock::default(),
        }
    }

    pub fn military() -> Self {
        Self {
            key: ContainerKey::new("military"),
            name: "Military container".into(),
            slots: 3,
            bonus_stats: StatBlock::default()
                .with(Stat::BulletResistance, 15)
                .with(Stat::MovementSpeed, -5),
        }
    }

    pub fn scientific() -> Self {
        Self {
            key: ContainerKey::new("scientific"),
            name: "Scientific container".into(),
            slots: 3,
            bonus_stats: StatBlock::default()
                .with(Stat::AnomalyResistance, 20)
                .with(Stat::RadiationResistance, 10),
        }
    }
}

/// Artifact placed in a container slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,
    pub stats: StatBlock,
}

impl Artifact {
    /// The standard artifact set
    pub fn standard_set() -> Vec<Self> {
        vec![
            Self::new(
                1,
                "Stone Flower",
                StatBlock::default()
                    .with(Stat::BulletResistance, 15)
                    .with(Stat::AnomalyResistance, 5),
            ),
            Self::new(
                2,
                "Night Star",
                StatBlock::default()
                    .with(Stat::AnomalyResistance, 20)
                    .with(Stat::RadiationResistance, 10),
            ),
            Self::new(
                3,
                "Vyvert",
                StatBlock::default()
                    .with(Stat::MovementSpeed, 15)
                    .with(Stat::Stamina, 10),
            ),
            Self::new(4, "Shell", StatBlock::resistances(8, 8, 5)),
            Self::new(
                5,
                "Stone Blood",
                StatBlock::default()
                    .with(Stat::BulletResistance, 25)
                    .with(Stat::AnomalyResistance, -5)
                    .with(Stat::MovementSpeed, -3),
            ),
        ]
    }

    pub fn new(id: u32, name: impl Into<String>, stats: StatBlock) -> Self {
        Self {
            id: ArtifactId(id),
            name: name.into(),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_blocks_add_fieldwise() {
        let total = Suit::combat().base_stats + Container::military().bonus_stats;
        assert_eq!(total.bullet_resistance, 95);
        assert_eq!(total.anomaly_resistance, 40);
        assert_eq!(total.movement_speed, -5);
        assert_eq!(total.stamina, 0);
    }

    #[test]
    fn test_sum_of_artifacts() {
        let total: StatBlock = Artifact::standard_set().iter().map(|a| a.stats).sum();
        assert_eq!(total.bullet_resistance, 15 + 8 + 25);
        assert_eq!(total.anomaly_resistance, 5 + 20 + 8 - 5);
        assert_eq!(total.radiation_resistance, 10 + 5);
        assert_eq!(total.movement_speed, 15 - 3);
        assert_eq!(total.stamina, 10);
    }

    #[test]
    fn test_nonzero_skips_empty_stats() {
        let stats: Vec<_> = Container::military().bonus_stats.nonzero().collect();
        assert_eq!(
            stats,
            vec![(Stat::BulletResistance, 15), (Stat::MovementSpeed, -5)]
        );
        assert!(Container::standard().bonus_stats.is_empty());
    }

    #[test]
    fn test_extreme_stats_saturate() {
        let huge = StatBlock::resistances(i32::MAX, i32::MIN, 1);
        let total = huge + StatBlock::resistances(10, -10, 1);
        assert_eq!(total.bullet_resistance, i32::MAX);
        assert_eq!(total.anomaly_resistance, i32::MIN);
        assert_eq!(total.radiation_resistance, 2);
    }

    #[test]
    fn test_missing_stats_default_to_zero() {
        let stats: StatBlock = serde_json::from_str(r#"{"stamina": 7}"#).unwrap();
        assert_eq!(stats.stamina, 7);
        assert_eq!(stats.bullet_resistance, 0);
    }
}
