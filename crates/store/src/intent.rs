//! User intents
//!
//! The presentation layer turns clicks, drags and keystrokes into [`Intent`]
//! values and hands them to [`PageStore::dispatch`]. Each intent maps to
//! exactly one store operation and runs to completion before the next.

use crate::store::PageStore;
use pagemgr_core::{PageId, PersistenceBackend};

/// A user action forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CreatePage,
    ToggleSelect(PageId),
    SelectAll,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    OpenPage(PageId),
    ClosePage,
    StartEdit,
    /// Replace the staged content while editing
    SetEditBuffer(String),
    SaveEdit(String),
    CancelEdit,
    ToggleEditMode,
    StartReorder(usize),
    /// The dragged page passed over this index
    DragOver(usize),
    Reorder(usize, usize),
    EndReorder,
    StartRenamePage(PageId),
    /// Replace the staged name while renaming
    SetRenameBuffer(String),
    Rename(PageId, String),
    CancelRenamePage,
}

impl<B: PersistenceBackend> PageStore<B> {
    /// Apply one intent
    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!("Dispatching {:?}", intent);
        match intent {
            Intent::CreatePage => {
                self.create_page();
            }
            Intent::ToggleSelect(id) => self.toggle_select(&id),
            Intent::SelectAll => self.select_all(),
            Intent::RequestDelete => {
                self.request_delete();
            }
            Intent::ConfirmDelete => {
                self.confirm_delete();
            }
            Intent::CancelDelete => self.cancel_delete(),
            Intent::OpenPage(id) => self.open_page(&id),
            Intent::ClosePage => self.close_page(),
            Intent::StartEdit => self.start_edit(),
            Intent::SetEditBuffer(text) => self.set_edit_buffer(text),
            Intent::SaveEdit(content) => {
                self.save_edit_with(content);
            }
            Intent::CancelEdit => self.cancel_edit(),
            Intent::ToggleEditMode => self.toggle_edit_mode(),
            Intent::StartReorder(index) => self.start_reorder(index),
            Intent::DragOver(index) => self.drag_over(index),
            Intent::Reorder(from, to) => {
                self.reorder(from, to);
            }
            Intent::EndReorder => self.end_reorder(),
            Intent::StartRenamePage(id) => self.start_rename(&id),
            Intent::SetRenameBuffer(text) => self.set_rename_buffer(text),
            Intent::Rename(id, name) => {
                if self.renaming().is_some_and(|r| r.id == id) {
                    self.cancel_rename();
                }
                self.rename_page(&id, name);
            }
            Intent::CancelRenamePage => self.cancel_rename(),
        }
    }
}
