//! StateStore trait: the abstract interface to the replicated ledger state.
//!
//! The hosting runtime exposes exactly two primitives against the flat
//! namespace: `put` and `get`. This trait models that surface so the
//! chaincode can stay backend-agnostic. Implementations include SQLite
//! (primary) and in-memory (for tests).

use async_trait::async_trait;
use bytes::Bytes;
use credledger_core::StateKey;

use crate::error::Result;

/// The StateStore trait: async interface to the flat key/value state.
///
/// # Design Notes
///
/// - **Overwrite semantics**: `put` on an existing key unconditionally
///   replaces the prior value. There is no merge and no versioning.
/// - **No deletes**: a field is created on first `put`, mutated on later
///   `put`s, and never removed. The trait has no delete operation.
/// - **Absent vs. empty**: `get` returns `None` for a key never written;
///   an empty value stored under a key reads back as `Some` of empty
///   bytes. Callers at the query surface collapse the two.
/// - **No retries**: any backend failure is terminal for the invocation
///   that triggered it.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Bind `key` to `value`, overwriting any previous binding.
    async fn put(&self, key: &StateKey, value: Bytes) -> Result<()>;

    /// Fetch the value currently bound to `key`.
    async fn get(&self, key: &StateKey) -> Result<Option<Bytes>>;
}
