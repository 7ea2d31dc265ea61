//! Domain models for zoo record management.
//!
//! This module contains the two record types held by the system, the closed
//! sets of species and habitat kinds they draw from, and configuration.

/// Animal records and the fixed species list.
pub mod animal;
pub use animal::{Animal, Species};

mod config;
pub use config::Config;

/// Enclosure (habitat) records and the fixed habitat kind list.
pub mod enclosure;
pub use enclosure::{Enclosure, HabitatKind};
