//! # Page Row Component
//!
//! A single entry in the page list. In edit mode the row is draggable,
//! shows a rename button and always shows its checkbox.

use dioxus::prelude::*;
use pagemgr_store::{Intent, Page};

use crate::state::dispatch;

#[derive(Props, Clone, PartialEq)]
pub struct PageRowProps {
    /// The page shown in this row
    pub page: Page,

    /// Position in the list
    pub index: usize,

    /// Whether the page is marked for deletion
    #[props(default = false)]
    pub selected: bool,

    /// Whether this row is the one being dragged
    #[props(default = false)]
    pub dragging: bool,

    /// Whether any row is being dragged
    #[props(default = false)]
    pub drag_active: bool,

    /// Whether this row shows the inline rename field
    #[props(default = false)]
    pub renaming: bool,

    /// Staged name while renaming
    #[props(default)]
    pub rename_buffer: String,

    /// Whether edit mode is on
    #[props(default = false)]
    pub edit_mode: bool,
}

/// One page in the list
#[component]
pub fn PageRow(props: PageRowProps) -> Element {
    let index = props.index;
    let edit_mode = props.edit_mode;
    let drag_target = is_drag_target(props.drag_active, props.dragging);
    let page_id = props.page.id.clone();

    let mut row_class = String::from("page-row");
    if edit_mode {
        row_class.push_str(" editable");
    }
    if props.dragging {
        row_class.push_str(" dragging");
    }
    let checkbox_class = if edit_mode || props.selected {
        "row-checkbox visible"
    } else {
        "row-checkbox"
    };

    let open_id = page_id.clone();
    let rename_id = page_id.clone();
    let select_id = page_id.clone();

    rsx! {
        div {
            class: "{row_class}",
            draggable: edit_mode,
            ondragstart: move |_| dispatch(Intent::StartReorder(index)),
            ondragover: move |e| {
                e.prevent_default();
                if drag_target {
                    dispatch(Intent::DragOver(index));
                }
            },
            ondragend: move |_| dispatch(Intent::EndReorder),

            if props.renaming {
                RenameField { buffer: props.rename_buffer.clone() }
            } else {
                button {
                    class: "page-name",
                    onclick: move |_| dispatch(Intent::OpenPage(open_id.clone())),
                    "{props.page.name}"
                }
            }

            div {
                class: "row-actions",

                if edit_mode {
                    button {
                        class: "icon-btn",
                        title: "Rename",
                        onclick: move |_| dispatch(Intent::StartRenamePage(rename_id.clone())),
                        "✎"
                    }
                }

                input {
                    class: "{checkbox_class}",
                    r#type: "checkbox",
                    checked: props.selected,
                    onchange: move |_| dispatch(Intent::ToggleSelect(select_id.clone())),
                }
            }
        }
    }
}

/// Inline rename input with save and cancel
#[component]
fn RenameField(buffer: String) -> Element {
    rsx! {
        div {
            class: "rename-field",
            input {
                r#type: "text",
                value: "{buffer}",
                autofocus: true,
                oninput: move |e| dispatch(Intent::SetRenameBuffer(e.value())),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        commit_rename();
                    } else if e.key() == Key::Escape {
                        dispatch(Intent::CancelRenamePage);
                    }
                },
            }
            button {
                class: "btn btn-success btn-small",
                onclick: move |_| commit_rename(),
                "Save"
            }
            button {
                class: "btn btn-muted btn-small",
                onclick: move |_| dispatch(Intent::CancelRenamePage),
                "Cancel"
            }
        }
    }
}

fn commit_rename() {
    let staged = crate::state::STORE
        .read()
        .renaming()
        .map(|r| (r.id.clone(), r.buffer.clone()));
    if let Some((id, name)) = staged {
        dispatch(Intent::Rename(id, name));
    }
}

/// A row reacts to dragover only while another row is being dragged
fn is_drag_target(drag_active: bool, dragging: bool) -> bool {
    drag_active && !dragging
}
