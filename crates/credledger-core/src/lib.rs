//! # credledger Core
//!
//! Pure primitives for credledger: state keys, typed requests, and
//! credential records.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! the shapes that cross the chaincode boundary.
//!
//! ## Key Types
//!
//! - [`StateKey`] - A non-empty key in the flat ledger namespace
//! - [`RecordId`] - Identifier for a vault-stored credential record
//! - [`InvokeFunction`] / [`QueryFunction`] - Exhaustive dispatch enums
//! - [`WriteRequest`] - The validated six-pair write payload
//! - [`IdentityProfile`] / [`CredentialRecord`] - Typed record shapes
//!
//! ## Encoding
//!
//! Vault records are encoded as CBOR. See [`record`].

pub mod error;
pub mod record;
pub mod request;
pub mod types;

pub use error::{CoreError, RequestError};
pub use record::{
    CredentialRecord, IdentityProfile, DATE_OF_BIRTH_KEY, FULL_NAME_KEY, SSN_KEY,
};
pub use request::{
    read_key, FieldWrite, InvokeFunction, QueryFunction, WriteRequest, INIT_ARITY, READ_ARITY,
    WRITE_ARITY,
};
pub use types::{RecordId, StateKey};
