//! Flat-file backed record collections.
//!
//! Each [`Repository`] holds its records in memory and rewrites its backing
//! file in full after every mutation. There is no read path from disk.

pub mod repository;
mod writer;

pub use repository::{Record, Repository};
pub use writer::{WriteError, write_records};
