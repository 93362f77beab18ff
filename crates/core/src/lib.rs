//! # Page Manager Core
//!
//! Core types, traits, and error handling for Page Manager.
//!
//! This crate provides the foundational building blocks shared by the
//! store, the desktop UI and the command-line tool:
//!
//! - **Types**: the opaque [`PageId`] identifier
//! - **Traits**: the [`PersistenceBackend`] key/value contract
//! - **Errors**: unified error handling with `PageError` and `PageResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{PageError, PageResult};
pub use traits::PersistenceBackend;
pub use types::PageId;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
