//! CSX Armory - weapon damage calculator and equipment builder

pub mod catalog;
pub mod core;
pub mod damage;
pub mod loadout;
pub mod records;
pub mod report;
pub mod session;
