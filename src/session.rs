//! Calculator session: the user's current selections
//!
//! Everything the calculator screens need lives in one struct that is
//! passed by reference, never in process-wide state.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, StatBlock};
use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::core::types::WeaponKey;
use crate::damage::weapon::validate_distance;
use crate::damage::{compare_engagement, compare_two_weapons, DamageResult, TargetProfile};
use crate::loadout::Loadout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSession {
    weapon: WeaponKey,
    target: TargetProfile,
    distance: f64,
    compare: (WeaponKey, WeaponKey),
    loadout: Loadout,
}

impl CalculatorSession {
    /// Start a session from configured defaults
    ///
    /// Defaults missing from the catalog fall back to its first entries
    /// (the second weapon for the right-hand side of the comparison pair).
    pub fn new(catalog: &Catalog, config: &AppConfig) -> Result<Self> {
        let weapon = catalog
            .weapon_or_fallback(config.default_weapon.as_str(), 0)?
            .key
            .clone();
        let first = catalog
            .weapon_or_fallback(config.compare_first.as_str(), 0)?
            .key
            .clone();
        let second = catalog
            .weapon_or_fallback(config.compare_second.as_str(), 1)?
            .key
            .clone();
        let target = TargetProfile::new(config.default_health, config.default_armor)?;
        validate_distance(config.default_distance)?;
        let suit = catalog.suit_or_first(config.default_suit.as_str())?;
        let container = catalog.container_or_first(config.default_container.as_str())?;
        let loadout = Loadout::new(catalog, suit.key.as_str(), container.key.as_str())?;

        Ok(Self {
            weapon,
            target,
            distance: config.default_distance,
            compare: (first, second),
            loadout,
        })
    }

    pub fn weapon(&self) -> &WeaponKey {
        &self.weapon
    }

    pub fn target(&self) -> &TargetProfile {
        &self.target
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn comparison_pair(&self) -> (&WeaponKey, &WeaponKey) {
        (&self.compare.0, &self.compare.1)
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn loadout_mut(&mut self) -> &mut Loadout {
        &mut self.loadout
    }

    pub fn select_weapon(&mut self, catalog: &Catalog, key: &str) -> Result<()> {
        self.weapon = catalog.weapon(key)?.key.clone();
        Ok(())
    }

    pub fn set_target(&mut self, health: u32, armor: f64) -> Result<()> {
        self.target = TargetProfile::new(health, armor)?;
        Ok(())
    }

    pub fn set_distance(&mut self, distance: f64) -> Result<()> {
        validate_distance(distance)?;
        self.distance = distance;
        Ok(())
    }

    pub fn select_comparison(&mut self, catalog: &Catalog, first: &str, second: &str) -> Result<()> {
        let first = catalog.weapon(first)?.key.clone();
        let second = catalog.weapon(second)?.key.clone();
        self.compare = (first, second);
        Ok(())
    }

    /// Damage figures for the selected weapon
    pub fn calculate(&self, catalog: &Catalog) -> Result<DamageResult> {
        let weapon = catalog.weapon(self.weapon.as_str())?;
        compare_engagement(weapon, &self.target, self.distance)
    }

    /// Damage figures for the comparison pair
    pub fn compare(&self, catalog: &Catalog) -> Result<(DamageResult, DamageResult)> {
        let first = catalog.weapon(self.compare.0.as_str())?;
        let second = catalog.weapon(self.compare.1.as_str())?;
        compare_two_weapons(first, second, &self.target, self.distance)
    }

    pub fn total_stats(&self, catalog: &Catalog) -> Result<StatBlock> {
        self.loadout.total_stats(catalog)
    }
}
