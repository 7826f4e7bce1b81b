//! Catalog of weapons and equipment
//!
//! Entries keep their definition order for listing and are indexed by key
//! for lookup. Everything added through the public API is validated first,
//! so a weapon found here always satisfies the falloff range contract.

use ahash::AHashMap;

use crate::catalog::equipment::{Artifact, Container, Suit};
use crate::core::error::{ArmoryError, ConfigurationError, Result};
use crate::core::types::{ArtifactId, ContainerKey, SuitKey, WeaponKey};
use crate::damage::Weapon;

/// Immutable reference data for a calculator session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    weapons: Vec<Weapon>,
    weapon_index: AHashMap<WeaponKey, usize>,
    suits: Vec<Suit>,
    suit_index: AHashMap<SuitKey, usize>,
    containers: Vec<Container>,
    container_index: AHashMap<ContainerKey, usize>,
    artifacts: Vec<Artifact>,
    artifact_index: AHashMap<ArtifactId, usize>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog the calculator ships with
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for weapon in [Weapon::ak74(), Weapon::svd(), Weapon::shotgun(), Weapon::pm()] {
            catalog.push_weapon(weapon);
        }
        for suit in [Suit::combat(), Suit::scientific(), Suit::combined()] {
            catalog.push_suit(suit);
        }
        for container in [Container::standard(), Container::military(), Container::scientific()] {
            catalog.push_container(container);
        }
        for artifact in Artifact::standard_set() {
            catalog.push_artifact(artifact);
        }
        catalog
    }

    /// Validate and register a weapon
    pub fn add_weapon(&mut self, weapon: Weapon) -> Result<()> {
        weapon.validate()?;
        if self.weapon_index.contains_key(&weapon.key) {
            return Err(ConfigurationError::DuplicateKey(format!("weapon {}", weapon.key)).into());
        }
        self.push_weapon(weapon);
        Ok(())
    }

    pub fn add_suit(&mut self, suit: Suit) -> Result<()> {
        if self.suit_index.contains_key(&suit.key) {
            return Err(ConfigurationError::DuplicateKey(format!("suit {}", suit.key)).into());
        }
        self.push_suit(suit);
        Ok(())
    }

    pub fn add_container(&mut self, container: Container) -> Result<()> {
        if container.slots == 0 {
            return Err(ConfigurationError::EmptyContainer(container.key.to_string()).into());
        }
        if self.container_index.contains_key(&container.key) {
            return Err(
                ConfigurationError::DuplicateKey(format!("container {}", container.key)).into(),
            );
        }
        self.push_container(container);
        Ok(())
    }

    pub fn add_artifact(&mut self, artifact: Artifact) -> Result<()> {
        if self.artifact_index.contains_key(&artifact.id) {
            return Err(
                ConfigurationError::DuplicateKey(format!("artifact {}", artifact.id)).into(),
            );
        }
        self.push_artifact(artifact);
        Ok(())
    }

    /// Re-check every entry (used after bulk construction)
    pub fn validate(&self) -> Result<()> {
        for weapon in &self.weapons {
            weapon.validate()?;
        }
        for container in &self.containers {
            if container.slots == 0 {
                return Err(ConfigurationError::EmptyContainer(container.key.to_string()).into());
            }
        }
        Ok(())
    }

    pub fn weapon(&self, key: &str) -> Result<&Weapon> {
        self.weapon_index
            .get(&WeaponKey::from(key))
            .map(|&idx| &self.weapons[idx])
            .ok_or_else(|| ArmoryError::UnknownWeapon(key.to_string()))
    }

    pub fn suit(&self, key: &str) -> Result<&Suit> {
        self.suit_index
            .get(&SuitKey::from(key))
            .map(|&idx| &self.suits[idx])
            .ok_or_else(|| ArmoryError::UnknownSuit(key.to_string()))
    }

    pub fn container(&self, key: &str) -> Result<&Container> {
        self.container_index
            .get(&ContainerKey::from(key))
            .map(|&idx| &self.containers[idx])
            .ok_or_else(|| ArmoryError::UnknownContainer(key.to_string()))
    }

    pub fn artifact(&self, id: ArtifactId) -> Result<&Artifact> {
        self.artifact_index
            .get(&id)
            .map(|&idx| &self.artifacts[idx])
            .ok_or(ArmoryError::UnknownArtifact(id))
    }

    // === FALLBACK LOOKUPS ===

    /// Weapon by key, or the `nth` catalog weapon when the key is unknown
    ///
    /// Used for configured defaults, which need not exist in a custom catalog.
    /// Falls back to the first weapon when there is no `nth` one.
    pub fn weapon_or_fallback(&self, key: &str, nth: usize) -> Result<&Weapon> {
        with_fallback(self.weapon(key), &self.weapons, nth)
    }

    pub fn suit_or_first(&self, key: &str) -> Result<&Suit> {
        with_fallback(self.suit(key), &self.suits, 0)
    }

    pub fn container_or_first(&self, key: &str) -> Result<&Container> {
        with_fallback(self.container(key), &self.containers, 0)
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    fn push_weapon(&mut self, weapon: Weapon) {
        self.weapon_index.insert(weapon.key.clone(), self.weapons.len());
        self.weapons.push(weapon);
    }

    fn push_suit(&mut self, suit: Suit) {
        self.suit_index.insert(suit.key.clone(), self.suits.len());
        self.suits.push(suit);
    }

    fn push_container(&mut self, container: Container) {
        self.container_index
            .insert(container.key.clone(), self.containers.len());
        self.containers.push(container);
    }

    fn push_artifact(&mut self, artifact: Artifact) {
        self.artifact_index.insert(artifact.id, self.artifacts.len());
        self.artifacts.push(artifact);
    }
}

fn with_fallback<'a, T>(found: Result<&'a T>, entries: &'a [T], nth: usize) -> Result<&'a T> {
    match found {
        Ok(entry) => Ok(entry),
        Err(err) => match entries.get(nth).or_else(|| entries.first()) {
            Some(entry) => {
                tracing::warn!("{}, using catalog entry {} instead", err, nth);
                Ok(entry)
            }
            None => Err(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::equipment::StatBlock;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = Catalog::standard();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.weapons().len(), 4);
        assert_eq!(catalog.suits().len(), 3);
        assert_eq!(catalog.containers().len(), 3);
        assert_eq!(catalog.artifacts().len(), 5);
    }

    #[test]
    fn test_lookup_by_key() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.weapon("svd").unwrap().base_damage, 80);
        assert_eq!(catalog.container("military").unwrap().slots, 3);
        assert_eq!(catalog.artifact(ArtifactId(5)).unwrap().name, "Stone Blood");
    }

    #[test]
    fn test_unknown_keys_are_errors() {
        let catalog = Catalog::standard();
        assert!(matches!(catalog.weapon("bfg"), Err(ArmoryError::UnknownWeapon(_))));
        assert!(matches!(catalog.suit("exo"), Err(ArmoryError::UnknownSuit(_))));
        assert!(matches!(catalog.container("bag"), Err(ArmoryError::UnknownContainer(_))));
        assert!(matches!(
            catalog.artifact(ArtifactId(99)),
            Err(ArmoryError::UnknownArtifact(ArtifactId(99)))
        ));
    }

    #[test]
    fn test_fallback_lookups() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.weapon_or_fallback("svd", 0).unwrap().key.as_str(), "svd");
        assert_eq!(catalog.weapon_or_fallback("groza", 0).unwrap().key.as_str(), "ak74");
        assert_eq!(catalog.weapon_or_fallback("groza", 1).unwrap().key.as_str(), "svd");
        assert_eq!(catalog.weapon_or_fallback("groza", 9).unwrap().key.as_str(), "ak74");
        assert_eq!(catalog.suit_or_first("exo").unwrap().key.as_str(), "combat");
        assert_eq!(catalog.container_or_first("bag").unwrap().key.as_str(), "standard");

        let empty = Catalog::new();
        assert!(matches!(
            empty.weapon_or_fallback("ak74", 0),
            Err(ArmoryError::UnknownWeapon(_))
        ));
        assert!(matches!(empty.suit_or_first("combat"), Err(ArmoryError::UnknownSuit(_))));
    }

    #[test]
    fn test_listing_keeps_definition_order() {
        let catalog = Catalog::standard();
        let keys: Vec<_> = catalog.weapons().iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, vec!["ak74", "svd", "shotgun", "pm"]);
    }

    #[test]
    fn test_duplicate_and_invalid_entries_rejected() {
        let mut catalog = Catalog::standard();
        assert!(catalog.add_weapon(Weapon::ak74()).is_err());

        let mut broken = Weapon::pm();
        broken.key = WeaponKey::new("broken");
        broken.max_range = 20.0;
        assert!(catalog.add_weapon(broken).is_err());

        let bag = Container {
            key: ContainerKey::new("bag"),
            name: "Bag".into(),
            slots: 0,
            bonus_stats: StatBlock::default(),
        };
        assert!(catalog.add_container(bag).is_err());
    }
}
