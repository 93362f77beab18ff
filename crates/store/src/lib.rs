//! # Page Manager Store
//!
//! The page collection and everything that mutates it.
//!
//! ## Core Concepts
//!
//! - **Page**: a named block of text with a stable id
//! - **PageStore**: the ordered collection plus transient selection,
//!   edit-mode, detail-view, drag and rename state
//! - **Intent**: a user action routed to one store operation
//! - **Backends**: where the serialized collection is kept
//!

pub mod backend;
pub mod config;
pub mod intent;
pub mod page;
pub mod serialization;
pub mod store;
pub mod view;

pub use backend::{FileBackend, MemoryBackend};
pub use config::StoreConfig;
pub use intent::Intent;
pub use page::{NEW_PAGE_CONTENT, Page, SEED_CONTENT_1, SEED_CONTENT_2, default_pages};
pub use serialization::{PAGES_KEY, deserialize_pages, serialize_pages};
pub use store::PageStore;
pub use view::{RenameState, ViewState};

// Re-export core types that are commonly used with the store
pub use pagemgr_core::{PageError, PageId, PageResult, PersistenceBackend};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        FileBackend, Intent, MemoryBackend, Page, PageError, PageId, PageResult, PageStore,
        PersistenceBackend, StoreConfig, ViewState,
    };
}
