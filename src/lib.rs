//! Record management for a small zoo.
//!
//! Animal and enclosure records are held in in-memory repositories and
//! exported to flat files after every mutation. The files are write-only
//! artifacts: nothing reads them back, so every process run starts empty.

pub mod domain;
pub use domain::{Animal, Config, Enclosure, HabitatKind, Species};

/// Flat-file backed record collections.
pub mod storage;
pub use storage::{Record, Repository, WriteError};
