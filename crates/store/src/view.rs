//! Transient UI state owned by the store
//!
//! None of this is persisted. The detail view is a single enum so that at
//! most one page can be open, and at most one can be under edit.

use pagemgr_core::PageId;

// ============================================================================
// Detail View
// ============================================================================

/// Which page (if any) is open in the detail view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// The page list is showing
    #[default]
    Browsing,
    /// A page is open read-only
    Viewing(PageId),
    /// A page is open with its content staged in `buffer`
    Editing { id: PageId, buffer: String },
}

impl ViewState {
    /// Id of the open page
    pub fn page_id(&self) -> Option<&PageId> {
        match self {
            ViewState::Browsing => None,
            ViewState::Viewing(id) | ViewState::Editing { id, .. } => Some(id),
        }
    }

    /// Staged content while editing
    pub fn buffer(&self) -> Option<&str> {
        match self {
            ViewState::Editing { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self, ViewState::Browsing)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ViewState::Editing { .. })
    }
}

// ============================================================================
// Inline Rename
// ============================================================================

/// A rename in progress: the target page and the text typed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameState {
    pub id: PageId,
    pub buffer: String,
}
