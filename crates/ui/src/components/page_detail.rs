//! # Page Detail Component
//!
//! Shows the open page. Editing stages the text in the store; Cancel
//! throws the staged text away and Save commits it.

use dioxus::prelude::*;
use pagemgr_store::Intent;

use crate::state::{STORE, dispatch};

/// The page currently open in the detail view
#[component]
pub fn PageDetail() -> Element {
    let store = STORE.read();
    let Some(page) = store.current_page().cloned() else {
        return rsx! {};
    };
    let editing = store.view().is_editing();
    let buffer = store.edit_buffer().unwrap_or_default().to_string();
    drop(store);

    rsx! {
        div {
            class: "page-detail-view",

            button {
                class: "back-link",
                onclick: move |_| dispatch(Intent::ClosePage),
                "← Back to Pages"
            }

            div {
                class: "card",

                div {
                    class: "card-header",
                    h1 { "{page.name}" }
                    if !editing {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| dispatch(Intent::StartEdit),
                            "✎ Edit"
                        }
                    }
                }

                if editing {
                    div {
                        class: "editor",
                        textarea {
                            placeholder: "Enter content...",
                            value: "{buffer}",
                            oninput: move |e| dispatch(Intent::SetEditBuffer(e.value())),
                        }
                        div {
                            class: "toolbar",
                            button {
                                class: "btn btn-success",
                                onclick: move |_| {
                                    let staged = STORE.read().edit_buffer().map(str::to_string);
                                    if let Some(content) = staged {
                                        dispatch(Intent::SaveEdit(content));
                                    }
                                },
                                "Save"
                            }
                            button {
                                class: "btn btn-muted",
                                onclick: move |_| dispatch(Intent::CancelEdit),
                                "Cancel"
                            }
                        }
                    }
                } else {
                    p { class: "page-content", "{page.content}" }
                }
            }
        }
    }
}
