//! The page collection state machine
//!
//! [`PageStore`] owns the ordered page list together with the transient
//! selection, edit-mode, detail-view, drag and rename state. Every mutation
//! of the page list is followed by a full-snapshot write to the backend.
//!
//! Operations never return errors to the caller. A failed write is logged,
//! kept in [`PageStore::last_error`], and the in-memory collection stays
//! authoritative. Operations that name a page which no longer exists are
//! no-ops.

use crate::config::StoreConfig;
use crate::page::{NEW_PAGE_CONTENT, Page, default_pages};
use crate::serialization::{deserialize_pages, serialize_pages};
use crate::view::{RenameState, ViewState};
use pagemgr_core::{PageError, PageId, PageResult, PersistenceBackend};
use std::collections::HashSet;

// ============================================================================
// PageStore
// ============================================================================

/// Owned page collection plus its session state
#[derive(Debug)]
pub struct PageStore<B: PersistenceBackend> {
    backend: B,
    config: StoreConfig,
    pages: Vec<Page>,
    selected: HashSet<PageId>,
    edit_mode: bool,
    view: ViewState,
    drag_origin: Option<usize>,
    /// Set when a drag moved pages that have not been written yet
    drag_dirty: bool,
    renaming: Option<RenameState>,
    delete_pending: bool,
    last_error: Option<PageError>,
    /// Set when the backend could not be read; writes are held back so the
    /// unread data is never overwritten
    read_failed: bool,
}

impl<B: PersistenceBackend> PageStore<B> {
    /// Load the collection from `backend` using the default configuration
    pub fn load(backend: B) -> Self {
        Self::build(backend, StoreConfig::default())
    }

    /// Load the collection from `backend` with a custom configuration
    pub fn with_config(backend: B, config: StoreConfig) -> PageResult<Self> {
        config.validate()?;
        Ok(Self::build(backend, config))
    }

    fn build(backend: B, config: StoreConfig) -> Self {
        let mut store = Self {
            backend,
            config,
            pages: Vec::new(),
            selected: HashSet::new(),
            edit_mode: false,
            view: ViewState::Browsing,
            drag_origin: None,
            drag_dirty: false,
            renaming: None,
            delete_pending: false,
            last_error: None,
            read_failed: false,
        };
        store.reload();
        store
    }

    /// Re-read the collection from the backend, resetting session state
    ///
    /// Absent data seeds the default pages and writes them immediately.
    /// Unparseable data is replaced by the default pages. If the backend
    /// cannot be read at all, the defaults are used in memory only and no
    /// write happens until a later reload succeeds.
    pub fn reload(&mut self) {
        let key = self.config.storage_key.clone();
        let stored = self
            .backend
            .get(&key)
            .and_then(|raw| raw.map(|raw| deserialize_pages(&raw)).transpose());

        self.read_failed = false;
        match stored {
            Ok(Some(pages)) => {
                tracing::info!(
                    "Loaded {} pages from {}",
                    pages.len(),
                    self.backend.describe()
                );
                self.pages = pages;
                self.last_error = None;
            }
            Ok(None) => {
                tracing::info!("No stored pages, seeding defaults");
                self.pages = default_pages();
                self.persist();
            }
            Err(e) if e.is_corrupt() => {
                tracing::warn!("Stored pages unreadable, restoring defaults: {}", e);
                self.pages = default_pages();
                self.persist();
            }
            Err(e) => {
                tracing::warn!("Could not read stored pages, using defaults: {}", e);
                self.pages = default_pages();
                self.read_failed = true;
                self.last_error = Some(e);
            }
        }

        self.selected.clear();
        self.edit_mode = false;
        self.view = ViewState::Browsing;
        self.drag_origin = None;
        self.drag_dirty = false;
        self.renaming = None;
        self.delete_pending = false;
    }

    /// Replace the collection with the default pages and persist
    ///
    /// This is an explicit overwrite, so it also writes over data that
    /// could not be read.
    pub fn reset_to_defaults(&mut self) {
        tracing::info!("Resetting pages to defaults");
        self.read_failed = false;
        self.pages = default_pages();
        self.selected.clear();
        self.view = ViewState::Browsing;
        self.drag_origin = None;
        self.drag_dirty = false;
        self.renaming = None;
        self.delete_pending = false;
        self.persist();
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    /// Pages in display order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up a page by id
    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    /// Display position of a page
    pub fn position(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PageId) -> bool {
        self.position(id).is_some()
    }

    /// Ids currently marked for deletion
    pub fn selected(&self) -> &HashSet<PageId> {
        &self.selected
    }

    pub fn is_selected(&self, id: &PageId) -> bool {
        self.selected.contains(id)
    }

    /// Whether every page is selected (true for an empty collection)
    pub fn all_selected(&self) -> bool {
        self.selected.len() == self.pages.len()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Detail view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Page open in the detail view
    pub fn current_page(&self) -> Option<&Page> {
        self.view.page_id().and_then(|id| self.page(id))
    }

    /// Staged content while editing
    pub fn edit_buffer(&self) -> Option<&str> {
        self.view.buffer()
    }

    /// Index the current drag gesture is carrying
    pub fn drag_origin(&self) -> Option<usize> {
        self.drag_origin
    }

    /// Rename in progress
    pub fn renaming(&self) -> Option<&RenameState> {
        self.renaming.as_ref()
    }

    /// Whether a bulk delete is waiting for confirmation
    pub fn delete_pending(&self) -> bool {
        self.delete_pending
    }

    /// Whether the stored data could not be read (writes are held back)
    pub fn read_failed(&self) -> bool {
        self.read_failed
    }

    /// Most recent persistence failure, cleared by the next successful write
    pub fn last_error(&self) -> Option<&PageError> {
        self.last_error.as_ref()
    }

    /// Serialized form of the current collection
    pub fn snapshot(&self) -> PageResult<String> {
        serialize_pages(&self.pages)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Append a new page named after the next position and persist
    ///
    /// The name is computed from the current length, so it can repeat the
    /// name of a page deleted earlier.
    pub fn create_page(&mut self) -> PageId {
        let id = PageId::generate(|candidate| self.contains(candidate));
        let page = Page::new(
            id.clone(),
            Page::default_name(self.pages.len() + 1),
            NEW_PAGE_CONTENT,
        );
        tracing::debug!("Creating page '{}' ({})", page.name, id);
        self.pages.push(page);
        self.persist();
        id
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Flip whether a page is marked for deletion
    pub fn toggle_select(&mut self, id: &PageId) {
        if !self.contains(id) {
            tracing::debug!("Ignoring selection of unknown page {}", id);
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Select every page, or clear the selection if everything is selected
    pub fn select_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.pages.iter().map(|p| p.id.clone()).collect();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Ask for confirmation before deleting the selection
    ///
    /// Returns `false` (and asks nothing) when the selection is empty.
    pub fn request_delete(&mut self) -> bool {
        if self.selected.is_empty() {
            tracing::debug!("Delete requested with empty selection");
            return false;
        }
        self.delete_pending = true;
        true
    }

    /// Dismiss a pending delete confirmation
    pub fn cancel_delete(&mut self) {
        self.delete_pending = false;
    }

    /// Carry out a pending delete; does nothing unless one was requested
    pub fn confirm_delete(&mut self) -> usize {
        if !self.delete_pending {
            tracing::debug!("Delete confirmed without a pending request");
            return 0;
        }
        self.delete_selected()
    }

    /// Remove every selected page, keeping the order of the rest
    ///
    /// Returns the number of pages removed.
    pub fn delete_selected(&mut self) -> usize {
        self.delete_pending = false;
        if self.selected.is_empty() {
            return 0;
        }

        let doomed = std::mem::take(&mut self.selected);
        let before = self.pages.len();
        self.pages.retain(|p| !doomed.contains(&p.id));
        let removed = before - self.pages.len();

        if self.view.page_id().is_some_and(|id| doomed.contains(id)) {
            self.view = ViewState::Browsing;
        }
        if self
            .renaming
            .as_ref()
            .is_some_and(|r| doomed.contains(&r.id))
        {
            self.renaming = None;
        }
        if self.drag_origin.is_some_and(|origin| origin >= self.pages.len()) {
            self.drag_origin = None;
        }

        tracing::debug!("Deleted {} pages", removed);
        self.persist();
        removed
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Move the page at `from` so it ends up at `to`, then persist
    ///
    /// Out-of-range indices and `from == to` leave the collection untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if !self.move_page(from, to) {
            return false;
        }
        self.persist();
        true
    }

    fn move_page(&mut self, from: usize, to: usize) -> bool {
        let len = self.pages.len();
        if from >= len || to >= len {
            tracing::debug!(
                "Ignoring reorder {} -> {}: {}",
                from,
                to,
                PageError::IndexOutOfRange {
                    index: from.max(to),
                    len
                }
            );
            return false;
        }
        if from == to {
            return false;
        }
        let page = self.pages.remove(from);
        self.pages.insert(to, page);
        true
    }

    /// Begin a drag gesture carrying the page at `index` (edit mode only)
    pub fn start_reorder(&mut self, index: usize) {
        if !self.edit_mode || index >= self.pages.len() {
            return;
        }
        self.drag_origin = Some(index);
        self.drag_dirty = false;
    }

    /// The dragged page passed over `index`: move it there
    ///
    /// The drag origin follows the page, so successive calls within one
    /// gesture compose.
    pub fn drag_over(&mut self, index: usize) {
        let Some(origin) = self.drag_origin else {
            return;
        };
        if origin == index {
            return;
        }

        let moved = if self.config.persist_during_drag {
            self.reorder(origin, index)
        } else {
            let moved = self.move_page(origin, index);
            self.drag_dirty |= moved;
            moved
        };
        if moved {
            self.drag_origin = Some(index);
        }
    }

    /// Finish the drag gesture
    pub fn end_reorder(&mut self) {
        self.drag_origin = None;
        if std::mem::take(&mut self.drag_dirty) {
            self.persist();
        }
    }

    // ========================================================================
    // Renaming
    // ========================================================================

    /// Set a page's name and persist; no validation is applied
    pub fn rename_page(&mut self, id: &PageId, name: impl Into<String>) -> bool {
        let Some(page) = self.pages.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!("Ignoring rename: {}", PageError::NotFound(id.clone()));
            return false;
        };
        page.name = name.into();
        tracing::debug!("Renamed page {} to '{}'", id, page.name);
        self.persist();
        true
    }

    /// Stage an inline rename, seeded with the current name (edit mode only)
    pub fn start_rename(&mut self, id: &PageId) {
        if !self.edit_mode {
            return;
        }
        let Some(page) = self.page(id) else {
            return;
        };
        self.renaming = Some(RenameState {
            id: id.clone(),
            buffer: page.name.clone(),
        });
    }

    /// Replace the staged rename text
    pub fn set_rename_buffer(&mut self, text: impl Into<String>) {
        if let Some(rename) = self.renaming.as_mut() {
            rename.buffer = text.into();
        }
    }

    /// Apply the staged rename
    pub fn commit_rename(&mut self) -> bool {
        match self.renaming.take() {
            Some(RenameState { id, buffer }) => self.rename_page(&id, buffer),
            None => false,
        }
    }

    /// Drop the staged rename without touching the page
    pub fn cancel_rename(&mut self) {
        self.renaming = None;
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Replace a page's content and persist
    pub fn set_content(&mut self, id: &PageId, content: impl Into<String>) -> bool {
        let Some(page) = self.pages.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!("Ignoring content edit: {}", PageError::NotFound(id.clone()));
            return false;
        };
        page.content = content.into();
        self.persist();
        true
    }

    // ========================================================================
    // Edit Mode
    // ========================================================================

    /// Flip edit mode; the selection never survives the transition
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        self.selected.clear();
        self.renaming = None;
        self.delete_pending = false;
        if self.drag_origin.is_some() {
            self.end_reorder();
        }
        tracing::debug!("Edit mode {}", if self.edit_mode { "on" } else { "off" });
    }

    // ========================================================================
    // Detail View
    // ========================================================================

    /// Open a page read-only from the list
    ///
    /// Ignored in edit mode, while that page is being renamed, or when a
    /// page is already open.
    pub fn open_page(&mut self, id: &PageId) {
        if self.edit_mode || !self.view.is_browsing() {
            return;
        }
        if self.renaming.as_ref().is_some_and(|r| &r.id == id) {
            return;
        }
        if !self.contains(id) {
            tracing::debug!("Ignoring open: {}", PageError::NotFound(id.clone()));
            return;
        }
        self.view = ViewState::Viewing(id.clone());
    }

    /// Return to the list, discarding any staged edit
    pub fn close_page(&mut self) {
        self.view = ViewState::Browsing;
    }

    /// Start editing the open page, staging its current content
    pub fn start_edit(&mut self) {
        let ViewState::Viewing(id) = &self.view else {
            return;
        };
        let Some(page) = self.page(id) else {
            return;
        };
        self.view = ViewState::Editing {
            id: page.id.clone(),
            buffer: page.content.clone(),
        };
    }

    /// Replace the staged content
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let ViewState::Editing { buffer, .. } = &mut self.view {
            *buffer = text.into();
        }
    }

    /// Commit the staged content and go back to viewing
    pub fn save_edit(&mut self) -> bool {
        match std::mem::take(&mut self.view) {
            ViewState::Editing { id, buffer } => {
                self.view = ViewState::Viewing(id.clone());
                self.set_content(&id, buffer)
            }
            other => {
                self.view = other;
                false
            }
        }
    }

    /// Stage `content` and commit it in one step
    pub fn save_edit_with(&mut self, content: impl Into<String>) -> bool {
        self.set_edit_buffer(content);
        self.save_edit()
    }

    /// Discard the staged content and go back to viewing
    pub fn cancel_edit(&mut self) {
        if let ViewState::Editing { id, .. } = &self.view {
            self.view = ViewState::Viewing(id.clone());
        }
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    fn persist(&mut self) {
        if self.read_failed {
            tracing::warn!(
                "Not writing {} pages: stored data in {} was never read",
                self.pages.len(),
                self.backend.describe()
            );
            return;
        }

        let key = &self.config.storage_key;
        let result =
            serialize_pages(&self.pages).and_then(|json| self.backend.set(key, &json));
        match result {
            Ok(()) => {
                tracing::debug!(
                    "Persisted {} pages to {}",
                    self.pages.len(),
                    self.backend.describe()
                );
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Keeping pages in memory, write failed: {}", e);
                self.last_error = Some(e);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::page::{SEED_CONTENT_1, SEED_CONTENT_2};
    use crate::serialization::PAGES_KEY;
    use pretty_assertions::assert_eq;

    fn store_with(pages: &[Page]) -> PageStore<MemoryBackend> {
        let json = serialize_pages(pages).unwrap();
        PageStore::load(MemoryBackend::with_entry(PAGES_KEY, json))
    }

    fn abc() -> PageStore<MemoryBackend> {
        store_with(&[
            Page::new("a", "A", "alpha"),
            Page::new("b", "B", "beta"),
            Page::new("c", "C", "gamma"),
        ])
    }

    fn ids(store: &PageStore<MemoryBackend>) -> Vec<&str> {
        store.pages().iter().map(|p| p.id.as_str()).collect()
    }

    fn stored(store: &PageStore<MemoryBackend>) -> Vec<Page> {
        deserialize_pages(store.backend().raw(PAGES_KEY).unwrap()).unwrap()
    }

    fn assert_invariants(store: &PageStore<MemoryBackend>) {
        let unique: HashSet<_> = store.pages().iter().map(|p| &p.id).collect();
        assert_eq!(unique.len(), store.len(), "duplicate ids");
        for id in store.selected() {
            assert!(store.contains(id), "selected id {} not in pages", id);
        }
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    #[test]
    fn test_load_seeds_defaults_and_persists() {
        let store = PageStore::load(MemoryBackend::new());
        assert_eq!(store.pages(), default_pages().as_slice());
        assert_eq!(store.pages()[0].content, SEED_CONTENT_1);
        assert_eq!(store.pages()[1].content, SEED_CONTENT_2);
        assert_eq!(store.backend().write_count(), 1);
        assert_eq!(stored(&store), default_pages());
    }

    #[test]
    fn test_load_is_idempotent() {
        let first = PageStore::load(MemoryBackend::new());
        let backend = first.into_backend();
        let second = PageStore::load(backend);
        assert_eq!(second.pages(), default_pages().as_slice());

        let pages = second.pages().to_vec();
        let third = PageStore::load(second.into_backend());
        assert_eq!(third.pages(), pages.as_slice());
    }

    #[test]
    fn test_load_corrupt_data_falls_back_to_defaults() {
        let store = PageStore::load(MemoryBackend::with_entry(PAGES_KEY, "{not json"));
        assert_eq!(store.pages(), default_pages().as_slice());
        assert_eq!(stored(&store), default_pages());
    }

    #[test]
    fn test_load_keeps_stored_empty_collection() {
        let store = PageStore::load(MemoryBackend::with_entry(PAGES_KEY, "[]"));
        assert!(store.is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_load_read_failure_uses_defaults_in_memory() {
        let mut backend = MemoryBackend::new();
        backend.set_fail_reads(true);
        let store = PageStore::load(backend);
        assert_eq!(store.pages(), default_pages().as_slice());
        assert!(store.last_error().is_some_and(|e| e.is_persistence()));
        assert!(store.read_failed());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_read_failure_never_overwrites_stored_pages() {
        let original = r#"[{"id":"x","name":"Mine","content":"keep me"}]"#;
        let mut backend = MemoryBackend::with_entry(PAGES_KEY, original);
        backend.set_fail_reads(true);
        let mut store = PageStore::load(backend);
        assert!(store.read_failed());

        store.backend_mut().set_fail_reads(false);
        store.create_page();
        store.reorder(0, 1);
        store.toggle_select(&PageId::from("1"));
        store.delete_selected();

        assert_eq!(store.backend().raw(PAGES_KEY), Some(original));
        assert_eq!(store.backend().write_count(), 0);
        assert!(store.last_error().is_some_and(|e| e.is_persistence()));
    }

    #[test]
    fn test_successful_reload_resumes_writes() {
        let original = r#"[{"id":"x","name":"Mine","content":"keep me"}]"#;
        let mut backend = MemoryBackend::with_entry(PAGES_KEY, original);
        backend.set_fail_reads(true);
        let mut store = PageStore::load(backend);

        store.backend_mut().set_fail_reads(false);
        store.reload();
        assert!(!store.read_failed());
        assert!(store.last_error().is_none());
        assert_eq!(ids(&store), vec!["x"]);

        store.create_page();
        assert_eq!(stored(&store).len(), 2);
        assert_eq!(stored(&store)[0].name, "Mine");
    }

    #[test]
    fn test_reset_overwrites_unreadable_data() {
        let mut backend = MemoryBackend::with_entry(PAGES_KEY, "[]");
        backend.set_fail_reads(true);
        let mut store = PageStore::load(backend);

        store.reset_to_defaults();
        assert!(!store.read_failed());
        assert_eq!(stored(&store), default_pages());
    }

    #[test]
    fn test_custom_storage_key() {
        let config = StoreConfig::new().with_storage_key("notes");
        let store = PageStore::with_config(MemoryBackend::new(), config).unwrap();
        assert!(store.backend().raw("notes").is_some());
        assert!(store.backend().raw(PAGES_KEY).is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StoreConfig::new().with_storage_key("");
        assert!(PageStore::with_config(MemoryBackend::new(), config).is_err());
    }

    // ------------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------------

    #[test]
    fn test_create_page_appends_numbered_page() {
        let mut store = PageStore::load(MemoryBackend::new());
        let id = store.create_page();

        assert_eq!(store.len(), 3);
        let page = &store.pages()[2];
        assert_eq!(page.id, id);
        assert_eq!(page.name, "Page 3");
        assert_eq!(page.content, NEW_PAGE_CONTENT);
        assert_eq!(stored(&store).len(), 3);
        assert_invariants(&store);
    }

    #[test]
    fn test_create_page_names_can_repeat_after_delete() {
        let mut store = PageStore::load(MemoryBackend::new());
        store.create_page();
        store.toggle_select(&PageId::from("1"));
        store.delete_selected();
        let id = store.create_page();

        let names: Vec<_> = store.pages().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Page 2", "Page 3", "Page 3"]);
        assert_eq!(store.page(&id).map(|p| p.name.as_str()), Some("Page 3"));
        assert_invariants(&store);
    }

    #[test]
    fn test_rapid_creates_get_unique_ids() {
        let mut store = PageStore::load(MemoryBackend::new());
        for _ in 0..20 {
            store.create_page();
        }
        assert_eq!(store.len(), 22);
        assert_invariants(&store);
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    #[test]
    fn test_toggle_select() {
        let mut store = abc();
        let a = PageId::from("a");
        store.toggle_select(&a);
        assert!(store.is_selected(&a));
        store.toggle_select(&a);
        assert!(!store.is_selected(&a));

        store.toggle_select(&PageId::from("missing"));
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_select_all_is_a_toggle() {
        let mut store = abc();
        store.toggle_select(&PageId::from("b"));

        store.select_all();
        assert_eq!(store.selected().len(), 3);
        assert!(store.all_selected());

        store.select_all();
        assert!(store.selected().is_empty());

        store.clear_selection();
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_selection_is_not_persisted() {
        let mut store = abc();
        let writes = store.backend().write_count();
        store.toggle_select(&PageId::from("a"));
        store.select_all();
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn test_toggle_edit_mode_clears_selection() {
        let mut store = abc();
        store.toggle_edit_mode();
        store.select_all();
        assert_eq!(store.selected().len(), 3);

        store.toggle_edit_mode();
        assert!(!store.edit_mode());
        assert!(store.selected().is_empty());

        store.toggle_select(&PageId::from("a"));
        store.toggle_edit_mode();
        assert!(store.edit_mode());
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_toggle_edit_mode_cancels_rename_and_drag() {
        let mut store = abc();
        store.toggle_edit_mode();
        store.start_rename(&PageId::from("a"));
        store.set_rename_buffer("Draft");
        store.start_reorder(0);
        store.drag_over(1);
        assert!(store.renaming().is_some());
        assert_eq!(store.drag_origin(), Some(1));

        store.toggle_edit_mode();
        assert!(store.renaming().is_none());
        assert_eq!(store.drag_origin(), None);
        assert_eq!(store.page(&PageId::from("a")).map(|p| p.name.as_str()), Some("A"));
        assert_eq!(ids(&store), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_toggle_edit_mode_flushes_batched_drag() {
        let config = StoreConfig::new().with_persist_during_drag(false);
        let backend = MemoryBackend::with_entry(
            PAGES_KEY,
            serialize_pages(abc().pages()).unwrap(),
        );
        let mut store = PageStore::with_config(backend, config).unwrap();
        store.toggle_edit_mode();
        store.start_reorder(2);
        store.drag_over(0);
        assert_eq!(store.backend().write_count(), 0);

        store.toggle_edit_mode();
        assert_eq!(store.backend().write_count(), 1);
        assert_eq!(stored(&store)[0].id.as_str(), "c");
    }

    // ------------------------------------------------------------------------
    // Deletion
    // ------------------------------------------------------------------------

    #[test]
    fn test_delete_selected_two_phase() {
        let mut store = abc();
        store.toggle_select(&PageId::from("a"));
        store.toggle_select(&PageId::from("c"));

        assert!(store.request_delete());
        assert!(store.delete_pending());
        assert_eq!(store.len(), 3);

        assert_eq!(store.confirm_delete(), 2);
        assert_eq!(ids(&store), vec!["b"]);
        assert!(store.selected().is_empty());
        assert!(!store.delete_pending());
        assert_eq!(stored(&store), store.pages().to_vec());
    }

    #[test]
    fn test_cancel_delete_keeps_pages_and_selection() {
        let mut store = abc();
        store.toggle_select(&PageId::from("a"));
        store.request_delete();
        store.cancel_delete();

        assert!(!store.delete_pending());
        assert_eq!(store.len(), 3);
        assert!(store.is_selected(&PageId::from("a")));
        assert_eq!(store.confirm_delete(), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_request_delete_with_empty_selection() {
        let mut store = abc();
        assert!(!store.request_delete());
        assert!(!store.delete_pending());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = store_with(&[
            Page::new("1", "1", ""),
            Page::new("2", "2", ""),
            Page::new("3", "3", ""),
            Page::new("4", "4", ""),
            Page::new("5", "5", ""),
        ]);
        store.toggle_select(&PageId::from("2"));
        store.toggle_select(&PageId::from("4"));
        store.delete_selected();
        assert_eq!(ids(&store), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_delete_everything_persists_empty_list() {
        let mut store = abc();
        store.select_all();
        assert_eq!(store.delete_selected(), 3);
        assert!(store.is_empty());
        assert_eq!(store.backend().raw(PAGES_KEY), Some("[]"));

        let reloaded = PageStore::load(store.into_backend());
        assert!(reloaded.is_empty());
    }

    // ------------------------------------------------------------------------
    // Reordering
    // ------------------------------------------------------------------------

    #[test]
    fn test_reorder_moves_page() {
        let mut store = abc();
        assert!(store.reorder(0, 2));
        assert_eq!(ids(&store), vec!["b", "c", "a"]);
        assert_eq!(stored(&store), store.pages().to_vec());

        assert!(store.reorder(2, 0));
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut store = abc();
        let writes = store.backend().write_count();
        assert!(!store.reorder(0, 3));
        assert!(!store.reorder(7, 0));
        assert!(!store.reorder(1, 1));
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn test_drag_gesture_composes_and_persists_each_step() {
        let mut store = abc();
        store.toggle_edit_mode();
        let writes = store.backend().write_count();

        store.start_reorder(0);
        store.drag_over(1);
        assert_eq!(ids(&store), vec!["b", "a", "c"]);
        assert_eq!(store.drag_origin(), Some(1));

        store.drag_over(2);
        assert_eq!(ids(&store), vec!["b", "c", "a"]);
        assert_eq!(store.backend().write_count(), writes + 2);

        store.drag_over(2);
        assert_eq!(store.backend().write_count(), writes + 2);

        store.end_reorder();
        assert_eq!(store.drag_origin(), None);
        assert_eq!(store.backend().write_count(), writes + 2);
    }

    #[test]
    fn test_drag_gesture_batched_write() {
        let config = StoreConfig::new().with_persist_during_drag(false);
        let backend = MemoryBackend::with_entry(
            PAGES_KEY,
            serialize_pages(abc().pages()).unwrap(),
        );
        let mut store = PageStore::with_config(backend, config).unwrap();
        store.toggle_edit_mode();

        store.start_reorder(0);
        store.drag_over(1);
        store.drag_over(2);
        assert_eq!(store.backend().write_count(), 0);

        store.end_reorder();
        assert_eq!(store.backend().write_count(), 1);
        assert_eq!(
            stored(&store).iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c", "a"]
        );
    }

    #[test]
    fn test_drag_requires_edit_mode() {
        let mut store = abc();
        store.start_reorder(0);
        store.drag_over(2);
        assert_eq!(store.drag_origin(), None);
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
    }

    // ------------------------------------------------------------------------
    // Renaming
    // ------------------------------------------------------------------------

    #[test]
    fn test_rename_page() {
        let mut store = abc();
        assert!(store.rename_page(&PageId::from("b"), ""));
        assert_eq!(store.pages()[1].name, "");
        assert_eq!(stored(&store)[1].name, "");

        assert!(!store.rename_page(&PageId::from("missing"), "x"));
    }

    #[test]
    fn test_staged_rename_commit_and_cancel() {
        let mut store = abc();
        let b = PageId::from("b");

        store.start_rename(&b);
        assert!(store.renaming().is_none(), "rename needs edit mode");

        store.toggle_edit_mode();
        store.start_rename(&b);
        assert_eq!(store.renaming().map(|r| r.buffer.as_str()), Some("B"));

        store.set_rename_buffer("Draft");
        store.cancel_rename();
        assert_eq!(store.page(&b).map(|p| p.name.as_str()), Some("B"));

        store.start_rename(&b);
        store.set_rename_buffer("Beta");
        assert!(store.commit_rename());
        assert!(store.renaming().is_none());
        assert_eq!(store.page(&b).map(|p| p.name.as_str()), Some("Beta"));
        assert_eq!(stored(&store)[1].name, "Beta");
    }

    // ------------------------------------------------------------------------
    // Detail view
    // ------------------------------------------------------------------------

    #[test]
    fn test_edit_cancel_restores_content() {
        let mut store = store_with(&[Page::new("p", "P", "X")]);
        let p = PageId::from("p");

        store.open_page(&p);
        store.start_edit();
        assert_eq!(store.edit_buffer(), Some("X"));

        store.set_edit_buffer("Y");
        store.cancel_edit();
        assert_eq!(store.view(), &ViewState::Viewing(p.clone()));
        assert_eq!(store.current_page().map(|p| p.content.as_str()), Some("X"));
        assert_eq!(stored(&store)[0].content, "X");

        store.start_edit();
        assert_eq!(store.edit_buffer(), Some("X"));
    }

    #[test]
    fn test_edit_save_persists_content() {
        let mut store = store_with(&[Page::new("p", "P", "X")]);
        let p = PageId::from("p");

        store.open_page(&p);
        store.start_edit();
        store.set_edit_buffer("Y");
        assert!(store.save_edit());

        assert_eq!(store.view(), &ViewState::Viewing(p));
        assert_eq!(store.current_page().map(|p| p.content.as_str()), Some("Y"));
        assert_eq!(stored(&store)[0].content, "Y");
    }

    #[test]
    fn test_view_transitions_follow_state_machine() {
        let mut store = abc();
        let a = PageId::from("a");

        store.start_edit();
        assert!(store.view().is_browsing());
        assert!(!store.save_edit());

        store.open_page(&a);
        store.open_page(&PageId::from("b"));
        assert_eq!(store.view(), &ViewState::Viewing(a.clone()));

        store.start_edit();
        store.close_page();
        assert!(store.view().is_browsing());

        store.open_page(&PageId::from("missing"));
        assert!(store.view().is_browsing());
    }

    #[test]
    fn test_open_page_blocked_in_edit_mode() {
        let mut store = abc();
        store.toggle_edit_mode();
        store.open_page(&PageId::from("a"));
        assert!(store.view().is_browsing());
    }

    #[test]
    fn test_deleting_open_page_closes_view() {
        let mut store = abc();
        let a = PageId::from("a");
        store.open_page(&a);
        store.toggle_select(&a);
        store.delete_selected();
        assert!(store.view().is_browsing());
        assert!(store.current_page().is_none());
    }

    #[test]
    fn test_set_content_unknown_page_is_noop() {
        let mut store = abc();
        let writes = store.backend().write_count();
        assert!(!store.set_content(&PageId::from("missing"), "x"));
        assert_eq!(store.backend().write_count(), writes);
    }

    // ------------------------------------------------------------------------
    // Failure handling
    // ------------------------------------------------------------------------

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = abc();
        store.backend_mut().set_fail_writes(true);

        store.create_page();
        assert_eq!(store.len(), 4);
        assert!(store.last_error().is_some_and(|e| e.is_persistence()));
        assert_eq!(stored(&store).len(), 3);

        store.backend_mut().set_fail_writes(false);
        store.reorder(0, 1);
        assert!(store.last_error().is_none());
        assert_eq!(stored(&store).len(), 4);
    }

    #[test]
    fn test_invariants_hold_across_mixed_operations() {
        let mut store = PageStore::load(MemoryBackend::new());
        store.toggle_edit_mode();
        for step in 0..30usize {
            match step % 6 {
                0 => {
                    store.create_page();
                }
                1 => {
                    let id = store.pages()[step % store.len()].id.clone();
                    store.toggle_select(&id);
                }
                2 => {
                    store.reorder(0, store.len() - 1);
                }
                3 => store.select_all(),
                4 if step % 12 == 4 => {
                    store.request_delete();
                    store.confirm_delete();
                    store.create_page();
                }
                _ => {
                    let id = store.pages()[0].id.clone();
                    store.rename_page(&id, format!("step {}", step));
                }
            }
            assert_invariants(&store);
        }
        assert_eq!(stored(&store), store.pages().to_vec());
    }
}
