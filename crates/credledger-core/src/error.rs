//! Error types for the credledger core.

use thiserror::Error;

/// Errors from record encoding and identifier handling.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("empty state key")]
    EmptyKey,

    #[error("invalid record id: {0}")]
    InvalidRecordId(String),

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}

/// Boundary validation errors for incoming invocations and queries.
///
/// The hosting runtime delivers every call as a function name plus a
/// positional argument array; these are the ways that shape can be wrong.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Wrong number of positional arguments for the called function.
    #[error("incorrect number of arguments: expecting {expected}, got {got}")]
    ArgumentCount { expected: usize, got: usize },

    /// A key argument was the empty string.
    #[error("empty key in argument position {position}")]
    EmptyKey { position: usize },

    /// Unrecognized function name on the invoke path.
    #[error("received unknown function invocation: {0}")]
    UnknownInvocation(String),

    /// Unrecognized function name on the query path.
    #[error("received unknown function query: {0}")]
    UnknownQuery(String),
}
