//! Store configuration

use crate::serialization::PAGES_KEY;
use pagemgr_core::{PageError, PageResult};

/// Tunables for a [`PageStore`](crate::PageStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backend key the page list is stored under
    pub storage_key: String,
    /// Persist after every intermediate drag step (`true`) or once when the
    /// drag gesture ends (`false`)
    pub persist_during_drag: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: PAGES_KEY.to_string(),
            persist_during_drag: true,
        }
    }
}

impl StoreConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Choose when drag reorders are written
    pub fn with_persist_during_drag(mut self, persist: bool) -> Self {
        self.persist_during_drag = persist;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> PageResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(PageError::InvalidConfig(
                "storage key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
