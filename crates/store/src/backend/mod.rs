//! Persistence backends
//!
//! Concrete implementations of [`PersistenceBackend`]:
//!
//! - [`MemoryBackend`]: an in-process map, used by tests and previews
//! - [`FileBackend`]: one JSON file per key inside a data directory
//!
//! [`PersistenceBackend`]: pagemgr_core::PersistenceBackend

mod file;
mod memory;

pub use file::{DATA_DIR_NAME, FileBackend};
pub use memory::MemoryBackend;
