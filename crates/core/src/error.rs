//! Error types for Page Manager
//!
//! Every failure in the page store is local-recovery only: persistence
//! problems leave the in-memory collection authoritative, corrupt stored data
//! falls back to the default pages, and stale page ids are ignored. The
//! variants here give those situations a name so they can be logged and
//! surfaced to whoever is interested.

use crate::types::PageId;
use thiserror::Error;

/// The main error type for Page Manager
#[derive(Debug, Error)]
pub enum PageError {
    // ========================================================================
    // Persistence Errors
    // ========================================================================
    /// Backend read or write failed
    #[error("Persistence unavailable for key '{key}': {message}")]
    PersistenceUnavailable { key: String, message: String },

    /// Stored value could not be parsed into a page sequence
    #[error("Corrupt stored data: {0}")]
    CorruptStoredData(String),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// An operation referenced a page that is no longer in the collection
    #[error("Page not found: {0}")]
    NotFound(PageId),

    /// An index outside the collection bounds
    #[error("Index {index} out of range for {len} pages")]
    IndexOutOfRange { index: usize, len: usize },

    // ========================================================================
    // IO / Serialization Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PageError {
    /// Create a persistence error for a key
    pub fn persistence(key: impl Into<String>, msg: impl Into<String>) -> Self {
        PageError::PersistenceUnavailable {
            key: key.into(),
            message: msg.into(),
        }
    }

    /// Create a corrupt-data error
    pub fn corrupt(msg: impl Into<String>) -> Self {
        PageError::CorruptStoredData(msg.into())
    }

    /// Check if this error came from the persistence boundary
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            PageError::PersistenceUnavailable { .. } | PageError::Io(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PageError::NotFound(_) | PageError::IndexOutOfRange { .. }
        )
    }

    /// Check if this error means the stored value was unusable
    pub fn is_corrupt(&self) -> bool {
        matches!(self, PageError::CorruptStoredData(_) | PageError::Json(_))
    }
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;

// ============================================================================
// Tests
// ============================================================================
