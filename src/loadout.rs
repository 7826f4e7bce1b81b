//! Equipment builder: a suit, a container and the artifacts in its slots
//!
//! The loadout stores keys and artifact ids only; stats are resolved
//! against a `Catalog` when totals are requested.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, StatBlock};
use crate::core::error::{ArmoryError, Result, ValidationError};
use crate::core::types::{ArtifactId, ContainerKey, SuitKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    suit: SuitKey,
    container: ContainerKey,
    /// One entry per container slot; `None` is an empty slot
    slots: Vec<Option<ArtifactId>>,
}

impl Loadout {
    /// Fresh loadout with every slot empty
    pub fn new(catalog: &Catalog, suit: &str, container: &str) -> Result<Self> {
        let suit = catalog.suit(suit)?.key.clone();
        let container = catalog.container(container)?;
        Ok(Self {
            suit,
            container: container.key.clone(),
            slots: vec![None; container.slots],
        })
    }

    /// Rebuild a loadout from a packed artifact list (saved builds)
    ///
    /// Artifacts fill slots from the first one onward.
    pub fn from_parts(
        catalog: &Catalog,
        suit: &str,
        container: &str,
        artifacts: &[ArtifactId],
    ) -> Result<Self> {
        let mut loadout = Self::new(catalog, suit, container)?;
        if artifacts.len() > loadout.slots.len() {
            return Err(ValidationError::TooManyArtifacts {
                count: artifacts.len(),
                slots: loadout.slots.len(),
            }
            .into());
        }
        for &id in artifacts {
            loadout.add_artifact(catalog, id)?;
        }
        Ok(loadout)
    }

    pub fn suit(&self) -> &SuitKey {
        &self.suit
    }

    pub fn container(&self) -> &ContainerKey {
        &self.container
    }

    pub fn slots(&self) -> &[Option<ArtifactId>] {
        &self.slots
    }

    pub fn select_suit(&mut self, catalog: &Catalog, suit: &str) -> Result<()> {
        self.suit = catalog.suit(suit)?.key.clone();
        Ok(())
    }

    /// Switch container, keeping artifacts whose slot still exists
    ///
    /// Returns the artifacts that no longer fit, in slot order.
    pub fn select_container(&mut self, catalog: &Catalog, container: &str) -> Result<Vec<ArtifactId>> {
        let container = catalog.container(container)?;
        let new_len = container.slots;

        let displaced: Vec<ArtifactId> = if new_len < self.slots.len() {
            self.slots.drain(new_len..).flatten().collect()
        } else {
            self.slots.resize(new_len, None);
            Vec::new()
        };
        self.container = container.key.clone();

        if !displaced.is_empty() {
            tracing::debug!(
                "Switching to {} displaced {} artifacts",
                self.container,
                displaced.len()
            );
        }
        Ok(displaced)
    }

    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Put an artifact into the first empty slot and return that slot
    pub fn add_artifact(&mut self, catalog: &Catalog, id: ArtifactId) -> Result<usize> {
        catalog.artifact(id)?;
        let index = self
            .find_empty_slot()
            .ok_or(ArmoryError::ContainerFull(self.slots.len()))?;
        self.slots[index] = Some(id);
        Ok(index)
    }

    /// Put an artifact into a specific slot, returning what was there
    pub fn place_artifact(
        &mut self,
        catalog: &Catalog,
        index: usize,
        id: ArtifactId,
    ) -> Result<Option<ArtifactId>> {
        catalog.artifact(id)?;
        let slot = self.slot_mut(index)?;
        Ok(slot.replace(id))
    }

    /// Empty a slot, returning what was there
    pub fn remove_artifact(&mut self, index: usize) -> Result<Option<ArtifactId>> {
        let slot = self.slot_mut(index)?;
        Ok(slot.take())
    }

    /// Equipped artifacts in slot order
    pub fn equipped(&self) -> impl Iterator<Item = ArtifactId> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Suit base stats + container bonus + every equipped artifact
    pub fn total_stats(&self, catalog: &Catalog) -> Result<StatBlock> {
        let mut total = catalog.suit(self.suit.as_str())?.base_stats;
        total += catalog.container(self.container.as_str())?.bonus_stats;
        for id in self.equipped() {
            total += catalog.artifact(id)?.stats;
        }
        Ok(total)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<ArtifactId>> {
        let slots = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or_else(|| ValidationError::SlotOutOfRange { index, slots }.into())
    }
}
