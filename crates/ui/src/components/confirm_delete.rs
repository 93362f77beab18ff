//! # Confirm Delete Dialog Component
//!
//! Asks for confirmation before the selected pages are removed.

use dioxus::prelude::*;
use pagemgr_store::Intent;

use crate::state::dispatch;

/// Confirmation text for deleting `count` pages
pub fn delete_message(count: usize) -> String {
    format!(
        "Are you sure you want to delete {} page{}? This action cannot be undone.",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Modal confirmation for a pending bulk delete
#[component]
pub fn ConfirmDeleteDialog(count: usize) -> Element {
    let message = delete_message(count);

    rsx! {
        div {
            class: "dialog-overlay",

            // Backdrop
            div {
                class: "dialog-backdrop",
                onclick: move |_| dispatch(Intent::CancelDelete),
            }

            div {
                class: "dialog",
                h3 { "Confirm Deletion" }
                p { "{message}" }

                div {
                    class: "toolbar dialog-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-muted",
                        onclick: move |_| dispatch(Intent::CancelDelete),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: move |_| dispatch(Intent::ConfirmDelete),
                        "Yes, Delete"
                    }
                }
            }
        }
    }
}
