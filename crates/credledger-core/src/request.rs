//! Typed forms of the wire-level (function, args) call contract.
//!
//! The hosting runtime hands every transaction to the chaincode as a
//! function name plus a positional argument array. These types validate
//! that shape at the boundary so the handlers can dispatch on exhaustive
//! enums instead of runtime string compares.

use std::str::FromStr;

use bytes::Bytes;

use crate::error::RequestError;
use crate::types::StateKey;

/// Positional arguments the initializer carries.
pub const INIT_ARITY: usize = 3;
/// Positional arguments a write carries: six key/value pairs.
pub const WRITE_ARITY: usize = 12;
/// Positional arguments a read carries.
pub const READ_ARITY: usize = 1;

/// Functions reachable through the invoke path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeFunction {
    /// Seed the identity profile (same behavior as deployment).
    Init,
    /// Persist one credential record as six key/value pairs.
    Write,
}

impl FromStr for InvokeFunction {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Self::Init),
            "write" => Ok(Self::Write),
            other => Err(RequestError::UnknownInvocation(other.to_string())),
        }
    }
}

/// Functions reachable through the query path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFunction {
    /// Return the raw bytes bound to a key.
    Read,
}

impl FromStr for QueryFunction {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Self::Read),
            other => Err(RequestError::UnknownQuery(other.to_string())),
        }
    }
}

/// One validated key/value binding from a write request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWrite {
    pub key: StateKey,
    pub value: Bytes,
}

/// A boundary-validated write: exactly six ordered key/value pairs.
///
/// Keys come from the even argument positions, values from the odd ones,
/// in the fixed order certification type, institution, degree, date
/// start, date end, other details. Only arity and non-empty keys are
/// checked here; value format and date parsing stay out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    fields: Vec<FieldWrite>,
}

impl WriteRequest {
    /// Parse the twelve positional write arguments.
    pub fn from_args(args: &[String]) -> Result<Self, RequestError> {
        if args.len() != WRITE_ARITY {
            return Err(RequestError::ArgumentCount {
                expected: WRITE_ARITY,
                got: args.len(),
            });
        }

        let mut fields = Vec::with_capacity(WRITE_ARITY / 2);
        for (index, pair) in args.chunks_exact(2).enumerate() {
            let position = index * 2;
            let key = StateKey::new(pair[0].as_str())
                .map_err(|_| RequestError::EmptyKey { position })?;
            fields.push(FieldWrite {
                key,
                value: Bytes::copy_from_slice(pair[1].as_bytes()),
            });
        }

        Ok(Self { fields })
    }

    /// The bindings in write order.
    pub fn fields(&self) -> &[FieldWrite] {
        &self.fields
    }

    /// Consume the request, returning the bindings in write order.
    pub fn into_fields(self) -> Vec<FieldWrite> {
        self.fields
    }
}

/// Validate the single read argument and return the key to look up.
pub fn read_key(args: &[String]) -> Result<StateKey, RequestError> {
    if args.len() != READ_ARITY {
        return Err(RequestError::ArgumentCount {
            expected: READ_ARITY,
            got: args.len(),
        });
    }
    StateKey::new(args[0].as_str()).map_err(|_| RequestError::EmptyKey { position: 0 })
}
