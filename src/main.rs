//! Page Manager
//!
//! Desktop entry point: installs logging and launches the Dioxus UI.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    tracing::info!(
        "{} (core v{}, store v{})",
        pagemgr_ui::TITLE,
        pagemgr_core::VERSION,
        pagemgr_store::VERSION
    );

    pagemgr_ui::launch();
}
