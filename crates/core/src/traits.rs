//! Core traits for Page Manager
//!
//! The page store never talks to a concrete storage medium. It reads and
//! writes through [`PersistenceBackend`], a synchronous key to string store
//! in the shape of browser local storage.

use crate::error::PageResult;

// ============================================================================
// PersistenceBackend Trait
// ============================================================================

/// Synchronous key/value string store used for durability across sessions
///
/// # Example
///
/// ```rust,ignore
/// use pagemgr_core::{PersistenceBackend, PageResult};
/// use std::collections::HashMap;
///
/// #[derive(Default)]
/// struct Scratch(HashMap<String, String>);
///
/// impl PersistenceBackend for Scratch {
///     fn get(&self, key: &str) -> PageResult<Option<String>> {
///         Ok(self.0.get(key).cloned())
///     }
///
///     fn set(&mut self, key: &str, value: &str) -> PageResult<()> {
///         self.0.insert(key.to_string(), value.to_string());
///         Ok(())
///     }
/// }
/// ```
pub trait PersistenceBackend {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn get(&self, key: &str) -> PageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> PageResult<()>;

    /// Human-readable description of where data lives (for logging)
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<B: PersistenceBackend + ?Sized> PersistenceBackend for Box<B> {
    fn get(&self, key: &str) -> PageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> PageResult<()> {
        (**self).set(key, value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Scratch(HashMap<String, String>);

    impl PersistenceBackend for Scratch {
        fn get(&self, key: &str) -> PageResult<Option<String>> {
            Ok(self.0.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> PageResult<()> {
            self.0.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_boxed_backend_delegates() {
        let mut backend: Box<dyn PersistenceBackend> = Box::new(Scratch::default());
        assert_eq!(backend.get("pages").unwrap(), None);

        backend.set("pages", "[]").unwrap();
        assert_eq!(backend.get("pages").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_describe_defaults_to_type_name() {
        let backend = Scratch::default();
        assert!(backend.describe().contains("Scratch"));
    }
}
