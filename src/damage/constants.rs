//! Damage model constants - all falloff and hit-zone values in one place

/// Distance (m) up to which a weapon deals full damage
pub const POINT_BLANK_RANGE: f64 = 10.0;

/// Damage lost between point-blank and effective range
pub const EFFECTIVE_RANGE_PENALTY: f64 = 0.3;

/// Additional damage lost between effective and max range
pub const MAX_RANGE_PENALTY: f64 = 0.6;

/// Distance modifier floor, applied at and beyond max range
pub const MIN_DISTANCE_MODIFIER: f64 = 0.1;

/// Full-damage modifier (no falloff)
pub const FULL_DAMAGE_MODIFIER: f64 = 1.0;

/// Headshot damage multiplier
pub const HEADSHOT_MULTIPLIER: f64 = 1.5;

/// Smallest damage a landed hit can deal
pub const MIN_HIT_DAMAGE: u32 = 1;

/// Upper bound of the armor scale (percent)
pub const MAX_ARMOR_PERCENT: f64 = 100.0;

/// Seconds per minute, for converting rounds-per-minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;
