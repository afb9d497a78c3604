//! # credledger State
//!
//! State backend abstraction for credledger. Provides a trait-based
//! interface to the flat key/value ledger namespace with SQLite and
//! in-memory implementations.
//!
//! ## Overview
//!
//! The hosting runtime gives the chaincode exactly two primitives against
//! replicated state: `put(key, value)` and `get(key)`. The [`StateStore`]
//! trait models that surface, keeping the chaincode backend-agnostic. The
//! primary implementation is [`SqliteStore`], with [`MemoryStore`] for
//! testing.
//!
//! ## Key Types
//!
//! - [`StateStore`] - The async trait for state access
//! - [`SqliteStore`] - SQLite-based persistent state
//! - [`MemoryStore`] - In-memory state for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use credledger_state::{SqliteStore, StateStore};
//! use credledger_core::StateKey;
//! use bytes::Bytes;
//!
//! async fn example() {
//!     // Open a SQLite database
//!     let store = SqliteStore::open("state.db").unwrap();
//!
//!     // Or use an in-memory database for testing
//!     let store = SqliteStore::open_memory().unwrap();
//!
//!     let key = StateKey::new("full_name").unwrap();
//!     store.put(&key, Bytes::from_static(b"Jane Doe")).await.unwrap();
//!     let value = store.get(&key).await.unwrap();
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Overwrite semantics**: `put` on an existing key replaces the value
//! - **No deletes**: the namespace only ever grows
//! - **No retries**: a backend failure is terminal for its invocation

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StateError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::StateStore;
