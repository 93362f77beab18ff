//! Serialization of the page collection
//!
//! The stored value is a JSON array of `{ "id", "name", "content" }`
//! objects in display order. There is no schema version; the format is the
//! one earlier sessions already wrote, so it must stay byte-compatible.

use crate::page::Page;
use pagemgr_core::{PageError, PageResult};
use std::collections::HashSet;

// ============================================================================
// Constants
// ============================================================================

/// Key under which the page collection is stored
pub const PAGES_KEY: &str = "pages";

// ============================================================================
// Save / Load
// ============================================================================

/// Serialize pages to a compact JSON string
pub fn serialize_pages(pages: &[Page]) -> PageResult<String> {
    serde_json::to_string(pages).map_err(Into::into)
}

/// Parse a stored value back into pages
///
/// Any value that is not an array of well-formed pages, or that repeats an
/// id, is reported as [`PageError::CorruptStoredData`].
pub fn deserialize_pages(json: &str) -> PageResult<Vec<Page>> {
    let pages: Vec<Page> = serde_json::from_str(json)
        .map_err(|e| PageError::corrupt(format!("invalid page list: {}", e)))?;

    let mut seen = HashSet::with_capacity(pages.len());
    for page in &pages {
        if !seen.insert(&page.id) {
            return Err(PageError::corrupt(format!(
                "duplicate page id '{}'",
                page.id
            )));
        }
    }

    Ok(pages)
}

// ============================================================================
// Tests
// ============================================================================
