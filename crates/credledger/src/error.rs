//! Error types for the chaincode.

use credledger_core::{CoreError, RequestError, StateKey};
use credledger_state::StateError;
use thiserror::Error;

/// Errors that can occur during chaincode operations.
///
/// Every error returns immediately to the caller. There is no retry, no
/// rollback of puts already committed in the same invocation, and no
/// partial-success signaling.
#[derive(Debug, Error)]
pub enum ChaincodeError {
    /// The incoming call failed boundary validation. Display keeps the
    /// wire texture ("received unknown function ...", argument counts).
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Record encoding or identifier failure.
    #[error("record error: {0}")]
    Core(#[from] CoreError),

    /// A backend put failed; propagated as-is.
    #[error("state write failed: {0}")]
    Write(#[source] StateError),

    /// A backend get failed. Display is the exact client-visible shape.
    #[error(r#"{{"Error":"Failed to get state for {key}"}}"#)]
    Lookup {
        key: StateKey,
        #[source]
        source: StateError,
    },
}

/// Result type for chaincode operations.
pub type Result<T> = std::result::Result<T, ChaincodeError>;
