//! Core types used throughout Page Manager

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Page Identifier
// ============================================================================

/// Opaque, stable identifier of a page
///
/// Stored as a plain string so that collections written by earlier sessions
/// (which use short numeric strings such as `"1"`) load unchanged. Fresh ids
/// are derived from the wall clock in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an id from the current time that `is_taken` does not reject
    ///
    /// Starts at the current unix time in milliseconds and steps forward one
    /// millisecond at a time, so two pages created within the same
    /// millisecond still get distinct ids.
    pub fn generate(is_taken: impl Fn(&PageId) -> bool) -> Self {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let candidate = PageId(stamp.to_string());
            if !is_taken(&candidate) {
                return candidate;
            }
            stamp += 1;
        }
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
