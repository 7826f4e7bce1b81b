//! Reference data: weapons, suits, containers and artifacts

pub mod equipment;
pub mod loader;
pub mod registry;

pub use equipment::{Artifact, Container, Stat, StatBlock, Suit};
pub use registry::Catalog;
