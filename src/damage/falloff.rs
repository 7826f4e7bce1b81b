//! Distance falloff: piecewise linear damage modifier
//!
//! ```text
//! d <= 10                 -> 1.0
//! 10 < d <= effective     -> 1.0 .. 0.7
//! effective < d <= max    -> 0.7 .. 0.1
//! d > max                 -> 0.1
//! ```

use crate::core::error::Result;
use crate::damage::constants::{
    EFFECTIVE_RANGE_PENALTY, FULL_DAMAGE_MODIFIER, MAX_RANGE_PENALTY, MIN_DISTANCE_MODIFIER,
    POINT_BLANK_RANGE,
};
use crate::damage::weapon::{validate_distance, validate_ranges};

/// Damage modifier in `[0.1, 1.0]` for a shot fired from `distance` meters
///
/// Rejects a negative or non-finite distance and ranges that break the
/// contract `effective_range > 10` and `max_range > effective_range`.
pub fn compute_distance_modifier(distance: f64, effective_range: f64, max_range: f64) -> Result<f64> {
    validate_distance(distance)?;
    validate_ranges("<inline>", effective_range, max_range)?;

    Ok(falloff(distance, effective_range, max_range))
}

/// Unchecked falloff curve; callers guarantee the range contract
pub(crate) fn falloff(distance: f64, effective_range: f64, max_range: f64) -> f64 {
    if distance <= POINT_BLANK_RANGE {
        FULL_DAMAGE_MODIFIER
    } else if distance <= effective_range {
        let range = effective_range - POINT_BLANK_RANGE;
        let penalty = (distance - POINT_BLANK_RANGE) / range * EFFECTIVE_RANGE_PENALTY;
        FULL_DAMAGE_MODIFIER - penalty
    } else if distance <= max_range {
        let range = max_range - effective_range;
        let penalty =
            EFFECTIVE_RANGE_PENALTY + (distance - effective_range) / range * MAX_RANGE_PENALTY;
        (FULL_DAMAGE_MODIFIER - penalty).max(MIN_DISTANCE_MODIFIER)
    } else {
        MIN_DISTANCE_MODIFIER
    }
}
