//! Saved builds and comparisons
//!
//! Payloads are plain serde structs; the record book keeps them in memory
//! and hands them out as JSON. Where they end up is up to the caller.

pub mod book;
pub mod build;
pub mod comparison;

pub use book::{Backup, ClearSummary, ImportSummary, RecordBook, RecordLimits, RecordStats, RestoreSummary, UsageReport};
pub use build::{BuildEquipment, BuildSettings, SavedBuild};
pub use comparison::{ComparisonParameters, ComparisonResults, SavedComparison};

use crate::core::error::ValidationError;

/// Current time as RFC 3339
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Trimmed, non-empty record name
pub(crate) fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}
