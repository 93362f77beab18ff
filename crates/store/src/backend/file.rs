//! File-backed persistence backend
//!
//! Each key maps to `<dir>/<key>.json`. Writes go through a temporary file
//! in the same directory followed by a rename, so a crash mid-write leaves
//! the previous snapshot intact.

use pagemgr_core::{PageError, PageResult, PersistenceBackend};
use std::path::{Path, PathBuf};

/// Directory name used under the user's config directory
pub const DATA_DIR_NAME: &str = "page-manager";

/// Key/value store writing one JSON file per key
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Store files inside `dir` (created on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store files in the per-user config directory
    ///
    /// - Linux/macOS: `~/.config/page-manager`
    /// - Windows: `%USERPROFILE%/.config/page-manager`
    ///
    /// Falls back to `./page-manager` when no home directory is known.
    pub fn default_location() -> Self {
        let base = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(".config"))
            .unwrap_or_else(|_| PathBuf::from("."));
        Self::new(base.join(DATA_DIR_NAME))
    }

    /// Directory holding the data files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path used for a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        let safe_key: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", safe_key))
    }
}

impl PersistenceBackend for FileBackend {
    fn get(&self, key: &str) -> PageResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes).map(Some).map_err(|e| {
                PageError::corrupt(format!("'{}' is not valid UTF-8: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PageError::persistence(
                key,
                format!("failed to read '{}': {}", path.display(), e),
            )),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PageResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            PageError::persistence(
                key,
                format!("failed to create '{}': {}", self.dir.display(), e),
            )
        })?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .and_then(|_| std::fs::rename(&tmp, &path))
            .map_err(|e| {
                PageError::persistence(
                    key,
                    format!("failed to write '{}': {}", path.display(), e),
                )
            })
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
