//! # Page Manager CLI
//!
//! Command-line interface for Page Manager.
//!
//! Works on the same data directory as the desktop app, so pages can be
//! listed, created, renamed, edited, reordered and deleted from a terminal.
//!
//! ## Commands
//!
//! - `list` - List pages in order
//! - `show` - Print one page
//! - `new` - Append a new page
//! - `rename` - Rename a page
//! - `edit` - Replace a page's content
//! - `move` - Move a page to another position
//! - `delete` - Delete pages (needs `--yes`)
//! - `reset` - Restore the default pages (needs `--yes`)
//!

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pagemgr_core::{PageId, PersistenceBackend};
use pagemgr_store::{FileBackend, PageStore};
use std::io::Write;
use std::path::PathBuf;

pub use pagemgr_core;
pub use pagemgr_store;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Environment variable selecting the data directory
pub const DATA_DIR_ENV: &str = "PAGE_MANAGER_DATA_DIR";

// ============================================================================
// Arguments
// ============================================================================

/// Manage simple named text pages
#[derive(Debug, Parser)]
#[command(name = "pagemgr", version, about)]
pub struct Cli {
    /// Directory holding the page data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List pages in order
    List {
        /// Print the stored JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print one page
    Show { id: String },
    /// Append a new page
    New,
    /// Rename a page
    Rename { id: String, name: String },
    /// Replace a page's content
    Edit { id: String, content: String },
    /// Move the page at one position (1-based) to another
    Move { from: usize, to: usize },
    /// Delete pages by id
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Replace all pages with the default pages
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    /// Backend selected by `--data-dir` / the environment
    pub fn backend(&self) -> FileBackend {
        match &self.data_dir {
            Some(dir) => FileBackend::new(dir),
            None => FileBackend::default_location(),
        }
    }
}

// ============================================================================
// Execution
// ============================================================================

/// Parse-free entry point used by `main`
pub fn run(cli: Cli) -> Result<()> {
    let backend = cli.backend();
    let location = backend.dir().display().to_string();
    let mut store = PageStore::load(backend);
    check_loaded(&cli.command, &store)
        .with_context(|| format!("Could not load pages from {}", location))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &mut store, &mut out)
}

/// Run one command against a store, writing human output to `out`
pub fn execute<B, W>(command: &Command, store: &mut PageStore<B>, out: &mut W) -> Result<()>
where
    B: PersistenceBackend,
    W: Write,
{
    tracing::debug!("Running {:?}", command);
    match command {
        Command::List { json } => {
            if *json {
                writeln!(out, "{}", store.snapshot()?)?;
            } else if store.is_empty() {
                writeln!(out, "{}", "No pages".dimmed())?;
            } else {
                for (index, page) in store.pages().iter().enumerate() {
                    writeln!(
                        out,
                        "{:>3}. {}  {}",
                        index + 1,
                        page.name,
                        format!("[{}]", page.id).dimmed()
                    )?;
                }
            }
        }
        Command::Show { id } => {
            let page = store
                .page(&PageId::from(id.as_str()))
                .with_context(|| format!("Page not found: {}", id))?;
            writeln!(out, "{}", page.name.bold())?;
            writeln!(out)?;
            writeln!(out, "{}", page.content)?;
        }
        Command::New => {
            let id = store.create_page();
            check_saved(store)?;
            let name = store.page(&id).map(|p| p.name.clone()).unwrap_or_default();
            writeln!(out, "{} {} [{}]", "Created".green(), name, id)?;
        }
        Command::Rename { id, name } => {
            let id = existing_id(store, id)?;
            store.rename_page(&id, name.as_str());
            check_saved(store)?;
            writeln!(out, "{} {} to {}", "Renamed".green(), id, name)?;
        }
        Command::Edit { id, content } => {
            let id = existing_id(store, id)?;
            store.set_content(&id, content.as_str());
            check_saved(store)?;
            writeln!(out, "{} {}", "Updated".green(), id)?;
        }
        Command::Move { from, to } => {
            let len = store.len();
            let from_index = position_to_index(*from, len)?;
            let to_index = position_to_index(*to, len)?;
            store.reorder(from_index, to_index);
            check_saved(store)?;
            writeln!(out, "{} {} -> {}", "Moved".green(), from, to)?;
        }
        Command::Delete { ids, yes } => {
            let ids = ids
                .iter()
                .map(|id| existing_id(store, id))
                .collect::<Result<Vec<_>>>()?;
            if !*yes {
                bail!(
                    "Refusing to delete {} page(s) without --yes",
                    ids.len()
                );
            }
            store.clear_selection();
            for id in &ids {
                if !store.is_selected(id) {
                    store.toggle_select(id);
                }
            }
            store.request_delete();
            let removed = store.confirm_delete();
            check_saved(store)?;
            writeln!(out, "{} {} page(s)", "Deleted".red(), removed)?;
        }
        Command::Reset { yes } => {
            if !*yes {
                bail!("Refusing to reset pages without --yes");
            }
            store.reset_to_defaults();
            check_saved(store)?;
            writeln!(out, "{} {} default pages", "Restored".green(), store.len())?;
        }
    }
    Ok(())
}

fn existing_id<B: PersistenceBackend>(store: &PageStore<B>, id: &str) -> Result<PageId> {
    let id = PageId::from(id);
    if !store.contains(&id) {
        bail!("Page not found: {}", id);
    }
    Ok(id)
}

fn position_to_index(position: usize, len: usize) -> Result<usize> {
    if position == 0 || position > len {
        bail!("Position {} is out of range (1-{})", position, len);
    }
    Ok(position - 1)
}

/// Refuse to run against defaults when the stored pages could not be read
///
/// `reset` is the one command allowed through, since it overwrites the data.
fn check_loaded<B: PersistenceBackend>(command: &Command, store: &PageStore<B>) -> Result<()> {
    if matches!(command, Command::Reset { .. }) || !store.read_failed() {
        return Ok(());
    }
    match store.last_error() {
        Some(e) => bail!("{}", e),
        None => bail!("stored pages could not be read"),
    }
}

fn check_saved<B: PersistenceBackend>(store: &PageStore<B>) -> Result<()> {
    match store.last_error() {
        Some(e) => bail!("Changes were not saved: {}", e),
        None => Ok(()),
    }
}

// ============================================================================
// Tests
// ============================================================================
