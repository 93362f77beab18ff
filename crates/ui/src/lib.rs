//! # Page Manager UI
//!
//! Dioxus Desktop UI for Page Manager.
//!
//! ## Features
//!
//! - Page list with create, multi-select and bulk delete
//! - Edit mode with drag-to-reorder and inline rename
//! - Page detail view with edit / save / cancel
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use pagemgr_core;
pub use pagemgr_store;

pub use app::App;
pub use components::{ConfirmDeleteDialog, PageDetail, PageRow, delete_message};
pub use state::{DATA_DIR_ENV, STORE, dispatch, open_store, open_store_at};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Page Manager";

/// Application display title
pub const TITLE: &str = "Page Manager";

/// Default window size (logical pixels)
pub const WINDOW_SIZE: (f64, f64) = (900.0, 760.0);

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Page Manager desktop application
///
/// ```rust,ignore
/// fn main() {
///     pagemgr_ui::launch();
/// }
/// ```
pub fn launch() {
    launch_with_config(TITLE, WINDOW_SIZE.0, WINDOW_SIZE.1);
}

/// Launch with a custom window title and size
pub fn launch_with_config(title: &str, width: f64, height: f64) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 400.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
