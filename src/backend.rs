//! Storage backends the shipment store can persist into.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store only needs "read a string by key" and "replace a string by key".
//! In the browser that is `localStorage` (implemented in the client crate);
//! tests and the storage-unavailable fallback use [`MemoryBackend`].

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::collections::HashMap;

use crate::error::StoreError;

/// Synchronous string key-value medium.
pub trait StorageBackend {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] when the medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] when the medium rejects the write
    /// (e.g. quota exceeded).
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process backend. Nothing survives a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with one raw entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries, writes: 0 }
    }

    /// Number of successful writes since construction.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
