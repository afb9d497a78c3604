//! In-memory implementation of the StateStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;

use credledger_core::StateKey;

use crate::error::Result;
use crate::traits::StateStore;

/// In-memory state store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    entries: RwLock<HashMap<StateKey, Bytes>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently bound.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the store holds no bindings at all.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn put(&self, key: &StateKey, value: Bytes) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.clone(), value);
        Ok(())
    }

    async fn get(&self, key: &StateKey) -> Result<Option<Bytes>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }
}
