//! Damage model: distance falloff, armor, shots-to-kill and time-to-kill
//!
//! Stateless and synchronous. Every function validates its inputs and
//! returns an error instead of clamping nonsense into a number.

pub mod constants;
pub mod effective;
pub mod engagement;
pub mod falloff;
pub mod lethality;
pub mod weapon;

pub use effective::{compute_effective_damage, HitDamage};
pub use engagement::{compare_engagement, compare_two_weapons, DamageResult};
pub use falloff::compute_distance_modifier;
pub use lethality::{compute_shots_to_kill, compute_time_to_kill};
pub use weapon::{EngagementInput, TargetProfile, Weapon};
