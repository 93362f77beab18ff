//! Application State for Page Manager
//!
//! The page store lives in a single Dioxus global signal. Components read it
//! to render and send user actions back through [`dispatch`].

use dioxus::prelude::*;
use pagemgr_store::{FileBackend, Intent, PageStore};
use std::path::PathBuf;

/// Environment variable overriding where pages are stored
pub const DATA_DIR_ENV: &str = "PAGE_MANAGER_DATA_DIR";

// ============================================================================
// Store Construction
// ============================================================================

/// Open the page store at the configured location
///
/// Uses `$PAGE_MANAGER_DATA_DIR` when set, otherwise the per-user config
/// directory.
pub fn open_store() -> PageStore<FileBackend> {
    let backend = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => FileBackend::new(PathBuf::from(dir)),
        _ => FileBackend::default_location(),
    };
    tracing::info!("Using page data in {}", backend.dir().display());
    PageStore::load(backend)
}

/// Open the page store in an explicit directory
pub fn open_store_at(dir: impl Into<PathBuf>) -> PageStore<FileBackend> {
    PageStore::load(FileBackend::new(dir))
}

// ============================================================================
// Global State
// ============================================================================

/// Global page store signal
pub static STORE: GlobalSignal<PageStore<FileBackend>> = Signal::global(open_store);

/// Forward a user action to the store
pub fn dispatch(intent: Intent) {
    STORE.write().dispatch(intent);
}

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to check whether edit mode is on
pub fn use_edit_mode() -> bool {
    STORE.read().edit_mode()
}

/// Hook to get the last persistence failure as display text
pub fn use_status_text() -> Option<String> {
    STORE
        .read()
        .last_error()
        .map(|e| format!("Changes are not being saved: {}", e))
}

// ============================================================================
// Tests
// ============================================================================
