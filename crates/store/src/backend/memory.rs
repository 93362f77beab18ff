//! In-memory persistence backend

use pagemgr_core::{PageError, PageResult, PersistenceBackend};
use std::collections::HashMap;

/// Key/value store held entirely in memory
///
/// Counts writes and can be told to fail reads or writes, which lets tests
/// observe exactly when the page store persists.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds `value` under `key`
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut backend = Self::new();
        backend.entries.insert(key.into(), value.into());
        backend
    }

    /// Raw stored value for a key
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Make every subsequent read fail
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent write fail
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl PersistenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> PageResult<Option<String>> {
        if self.fail_reads {
            return Err(PageError::persistence(key, "read refused"));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PageResult<()> {
        if self.fail_writes {
            return Err(PageError::persistence(key, "write refused"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("pages").unwrap(), None);

        backend.set("pages", "[]").unwrap();
        assert_eq!(backend.get("pages").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn test_failure_switches() {
        let mut backend = MemoryBackend::with_entry("pages", "[]");
        backend.set_fail_writes(true);
        let err = backend.set("pages", "[1]").unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(backend.raw("pages"), Some("[]"));
        assert_eq!(backend.write_count(), 0);

        backend.set_fail_reads(true);
        assert!(backend.get("pages").is_err());
    }
}
