//! # credledger
//!
//! A minimal credential-record chaincode: a deploy/invoke/query lifecycle
//! over a flat key/value ledger namespace.
//!
//! ## Overview
//!
//! The hosting runtime deploys this code against replicated state and
//! routes transactions to three entry points:
//!
//! - **initialize** - seeds the subject's identity profile (three fixed keys)
//! - **invoke** - `"init"` re-seeds; `"write"` records six key/value pairs
//!   describing one degree certificate
//! - **query** - `"read"` returns the raw bytes bound to a key
//!
//! Unknown function names are rejected on both paths. All state access
//! goes through the [`StateStore`](credledger_state::StateStore) trait;
//! SQLite is the primary backend, with an in-memory store for tests.
//!
//! ## Key Concepts
//!
//! - **Flat namespace**: keys are caller-chosen, schemaless, overwrite on
//!   reuse, and never deleted.
//! - **Record vault**: the collision-free alternative surface. Whole
//!   records are CBOR blobs under `<prefix>:<record_id>`, so a second
//!   degree cannot overwrite the first.
//! - **No rollback**: a put failure mid-invocation aborts the remainder
//!   but leaves earlier puts committed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use credledger::{Chaincode, LedgerConfig};
//! use credledger_state::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("state.db").unwrap();
//!     let chaincode = Chaincode::new(store, LedgerConfig::default());
//!
//!     // Deploy-time seeding
//!     let args: Vec<String> = ["123-45-6789", "Jane Doe", "1990-01-01"]
//!         .iter()
//!         .map(|s| s.to_string())
//!         .collect();
//!     chaincode.initialize(&args).await.unwrap();
//!
//!     // Later: read a field back
//!     let name = chaincode
//!         .query("read", &["full_name".to_string()])
//!         .await
//!         .unwrap();
//!     assert_eq!(&name[..], b"Jane Doe");
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `credledger::core` - Core primitives (StateKey, records, requests)
//! - `credledger::state` - State backend abstraction and SQLite

pub mod chaincode;
pub mod error;
pub mod vault;

// Re-export component crates
pub use credledger_core as core;
pub use credledger_state as state;

// Re-export main types for convenience
pub use chaincode::{Chaincode, LedgerConfig};
pub use error::{ChaincodeError, Result};

// Re-export commonly used core types
pub use credledger_core::{
    CredentialRecord, IdentityProfile, RecordId, StateKey, DATE_OF_BIRTH_KEY, FULL_NAME_KEY,
    SSN_KEY,
};
