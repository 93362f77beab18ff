//! Main Application Component for Page Manager
//!
//! The root component switches between the page list and the detail view
//! and overlays the delete confirmation when one is pending.

use dioxus::prelude::*;
use pagemgr_store::Intent;

use crate::components::{ConfirmDeleteDialog, PageDetail, PageRow};
use crate::state::{STORE, dispatch, use_edit_mode, use_status_text};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Page Manager UI initialized");
    });

    let store = STORE.read();
    let viewing = store.current_page().is_some();
    let delete_pending = store.delete_pending();
    let selected_count = store.selected().len();
    drop(store);

    rsx! {
        div {
            class: "app-container",

            if viewing {
                PageDetail {}
            } else {
                PageList {}
            }

            StatusBar {}

            if delete_pending {
                ConfirmDeleteDialog { count: selected_count }
            }
        }
    }
}

// ============================================================================
// Page List
// ============================================================================

/// List of pages with the edit-mode toolbar
#[component]
fn PageList() -> Element {
    let edit_mode = use_edit_mode();
    let store = STORE.read();
    let pages = store.pages().to_vec();
    let all_selected = store.all_selected();
    let selected_count = store.selected().len();
    let drag_origin = store.drag_origin();
    let rename_target = store.renaming().cloned();
    let selected = store.selected().clone();
    drop(store);

    rsx! {
        div {
            class: "page-list-view",

            h1 { class: "app-title", "Page Manager" }

            div {
                class: "card",

                // Header
                div {
                    class: "card-header",
                    h2 { "Pages" }
                    div {
                        class: "toolbar",
                        button {
                            class: if edit_mode { "btn btn-muted" } else { "btn btn-primary" },
                            onclick: move |_| dispatch(Intent::ToggleEditMode),
                            if edit_mode { "✔ Done" } else { "✎ Edit" }
                        }
                        button {
                            class: "btn btn-success",
                            onclick: move |_| dispatch(Intent::CreatePage),
                            "+ New Page"
                        }
                    }
                }

                // Select all row
                if edit_mode && !pages.is_empty() {
                    div {
                        class: "select-all-row",
                        span { "Select All" }
                        input {
                            r#type: "checkbox",
                            checked: all_selected,
                            onchange: move |_| dispatch(Intent::SelectAll),
                        }
                    }
                }

                // Rows
                div {
                    class: "page-rows",
                    for (index, page) in pages.into_iter().enumerate() {
                        PageRow {
                            key: "{page.id}",
                            index: index,
                            selected: selected.contains(&page.id),
                            dragging: drag_origin == Some(index),
                            drag_active: drag_origin.is_some(),
                            renaming: rename_target.as_ref().is_some_and(|r| r.id == page.id),
                            rename_buffer: rename_target
                                .as_ref()
                                .map(|r| r.buffer.clone())
                                .unwrap_or_default(),
                            edit_mode: edit_mode,
                            page: page.clone(),
                        }
                    }
                }

                // Bulk delete
                if edit_mode && selected_count > 0 {
                    div {
                        class: "delete-bar",
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| dispatch(Intent::RequestDelete),
                            "🗑 Delete Selected ({selected_count})"
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Shows a warning while writes to disk are failing
#[component]
fn StatusBar() -> Element {
    let Some(text) = use_status_text() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "status-bar status-warning",
            "⚠ {text}"
        }
    }
}
