//! Page definitions
//!
//! A page is a named block of text. Pages carry no structure beyond their
//! id, name and content; ordering lives in the collection that holds them.

use pagemgr_core::PageId;
use serde::{Deserialize, Serialize};

// ============================================================================
// Default Content
// ============================================================================

/// Content of the first seeded page
pub const SEED_CONTENT_1: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

/// Content of the second seeded page
pub const SEED_CONTENT_2: &str = "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

/// Content given to every newly created page
pub const NEW_PAGE_CONTENT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

// ============================================================================
// Page
// ============================================================================

/// A named text document held in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Stable identifier, never changes after creation
    pub id: PageId,
    /// Display name (not unique)
    pub name: String,
    /// Body text
    pub content: String,
}

impl Page {
    /// Create a page with explicit fields
    pub fn new(id: impl Into<PageId>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// Default display name for the page that will sit at 1-based `position`
    pub fn default_name(position: usize) -> String {
        format!("Page {}", position)
    }
}

/// The pages written when no collection has been stored yet
pub fn default_pages() -> Vec<Page> {
    vec![
        Page::new("1", Page::default_name(1), SEED_CONTENT_1),
        Page::new("2", Page::default_name(2), SEED_CONTENT_2),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages() {
        let pages = default_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id, PageId::from("1"));
        assert_eq!(pages[0].name, "Page 1");
        assert_eq!(pages[1].id, PageId::from("2"));
        assert_eq!(pages[1].name, "Page 2");
        assert_eq!(pages[1].content, SEED_CONTENT_2);
    }

    #[test]
    fn test_new_page_content_extends_seed() {
        assert!(NEW_PAGE_CONTENT.starts_with(SEED_CONTENT_1));
        assert!(NEW_PAGE_CONTENT.contains(SEED_CONTENT_2));
        assert!(NEW_PAGE_CONTENT.ends_with("nulla pariatur."));
    }
}
