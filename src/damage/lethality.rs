//! Shots-to-kill and time-to-kill

use crate::core::error::{Result, ValidationError};
use crate::damage::constants::SECONDS_PER_MINUTE;
use crate::damage::weapon::validate_fire_rate;

/// Hits needed to bring `health` to zero: `ceil(health / damage_per_hit)`
pub fn compute_shots_to_kill(health: u32, damage_per_hit: u32) -> Result<u32> {
    if health == 0 {
        return Err(ValidationError::NonPositiveHealth.into());
    }
    if damage_per_hit == 0 {
        return Err(ValidationError::NonPositiveDamagePerHit.into());
    }
    Ok(health.div_ceil(damage_per_hit))
}

/// Seconds from the first to the last shot of a burst
///
/// The first shot lands at t = 0, so one shot kills instantly and
/// `shots` hits take `shots - 1` shot intervals. No reaction delay.
pub fn compute_time_to_kill(shots: u32, fire_rate_rpm: f64) -> Result<f64> {
    validate_fire_rate(fire_rate_rpm)?;
    if shots == 0 {
        return Ok(0.0);
    }
    let time_between_shots = SECONDS_PER_MINUTE / fire_rate_rpm;
    Ok(f64::from(shots - 1) * time_between_shots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shots_round_up() {
        assert_eq!(compute_shots_to_kill(100, 41).unwrap(), 3);
        assert_eq!(compute_shots_to_kill(100, 61).unwrap(), 2);
        assert_eq!(compute_shots_to_kill(100, 100).unwrap(), 1);
        assert_eq!(compute_shots_to_kill(100, 250).unwrap(), 1);
        assert_eq!(compute_shots_to_kill(100, 1).unwrap(), 100);
    }

    #[test]
    fn test_zero_health_or_damage_rejected() {
        assert!(compute_shots_to_kill(0, 10).is_err());
        assert!(compute_shots_to_kill(10, 0).is_err());
    }

    #[test]
    fn test_time_to_kill_counts_intervals() {
        assert_eq!(compute_time_to_kill(0, 600.0).unwrap(), 0.0);
        assert_eq!(compute_time_to_kill(1, 600.0).unwrap(), 0.0);
        assert!((compute_time_to_kill(3, 600.0).unwrap() - 0.2).abs() < 1e-12);
        assert!((compute_time_to_kill(2, 30.0).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_fire_rate_rejected() {
        assert!(compute_time_to_kill(3, 0.0).is_err());
        assert!(compute_time_to_kill(3, -60.0).is_err());
        assert!(compute_time_to_kill(3, f64::NAN).is_err());
    }
}
