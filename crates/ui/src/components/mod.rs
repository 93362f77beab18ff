//! # UI Components
//!
//! - **PageRow**: one entry in the page list
//! - **PageDetail**: the open page, read-only or under edit
//! - **ConfirmDeleteDialog**: confirmation before a bulk delete
//!

pub mod confirm_delete;
pub mod page_detail;
pub mod page_row;

pub use confirm_delete::{ConfirmDeleteDialog, delete_message};
pub use page_detail::PageDetail;
pub use page_row::PageRow;
