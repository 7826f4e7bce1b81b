//! Saved weapon comparisons

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::core::error::Result;
use crate::core::types::{RecordId, WeaponKey};
use crate::damage::{compare_two_weapons, DamageResult, TargetProfile};
use crate::records::{now_timestamp, validate_name};
use crate::session::CalculatorSession;

/// Inputs the comparison was made with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParameters {
    pub health: u32,
    pub armor: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonResults {
    /// RFC 3339
    pub timestamp: String,
    pub first: Option<DamageResult>,
    pub second: Option<DamageResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedComparison {
    #[serde(default)]
    pub id: RecordId,
    pub comparison_name: String,
    pub weapon1_id: WeaponKey,
    pub weapon2_id: WeaponKey,
    pub parameters: ComparisonParameters,
    #[serde(default)]
    pub results: ComparisonResults,
}

impl SavedComparison {
    /// Snapshot the session's comparison pair and its results
    pub fn capture(name: &str, session: &CalculatorSession, catalog: &Catalog) -> Result<Self> {
        let comparison_name = validate_name(name)?;
        let (first, second) = session.compare(catalog)?;
        let (weapon1, weapon2) = session.comparison_pair();
        let target = session.target();

        Ok(Self {
            id: RecordId::new(),
            comparison_name,
            weapon1_id: weapon1.clone(),
            weapon2_id: weapon2.clone(),
            parameters: ComparisonParameters {
                health: target.health,
                armor: target.armor,
                distance: session.distance(),
            },
            results: ComparisonResults {
                timestamp: now_timestamp(),
                first: Some(first),
                second: Some(second),
            },
        })
    }

    /// Run the stored comparison again against the current catalog
    pub fn recompute(&self, catalog: &Catalog) -> Result<(DamageResult, DamageResult)> {
        let first = catalog.weapon(self.weapon1_id.as_str())?;
        let second = catalog.weapon(self.weapon2_id.as_str())?;
        let target = TargetProfile::new(self.parameters.health, self.parameters.armor)?;
        compare_two_weapons(first, second, &target, self.parameters.distance)
    }
}
