//! Typed credential records and their canonical encoding.
//!
//! Two shapes live here: the identity profile seeded once at deployment,
//! and the degree certificate the write path captures. Records stored in
//! the vault are encoded as CBOR blobs.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, RequestError};
use crate::request::INIT_ARITY;
use crate::types::StateKey;

/// Fixed key for the subject's social security number.
pub const SSN_KEY: &str = "social_security_number";
/// Fixed key for the subject's full name.
pub const FULL_NAME_KEY: &str = "full_name";
/// Fixed key for the subject's date of birth.
pub const DATE_OF_BIRTH_KEY: &str = "date_of_birth";

/// The identity fields seeded exactly once at deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProfile {
    pub social_security_number: String,
    pub full_name: String,
    /// Opaque string; no date parsing is performed.
    pub date_of_birth: String,
}

impl IdentityProfile {
    /// Parse the three positional deployment arguments.
    pub fn from_args(args: &[String]) -> Result<Self, RequestError> {
        if args.len() != INIT_ARITY {
            return Err(RequestError::ArgumentCount {
                expected: INIT_ARITY,
                got: args.len(),
            });
        }
        Ok(Self {
            social_security_number: args[0].clone(),
            full_name: args[1].clone(),
            date_of_birth: args[2].clone(),
        })
    }

    /// The three fixed-key bindings this profile persists, in write order.
    pub fn bindings(&self) -> Vec<(StateKey, Bytes)> {
        vec![
            (
                StateKey(SSN_KEY.to_string()),
                Bytes::copy_from_slice(self.social_security_number.as_bytes()),
            ),
            (
                StateKey(FULL_NAME_KEY.to_string()),
                Bytes::copy_from_slice(self.full_name.as_bytes()),
            ),
            (
                StateKey(DATE_OF_BIRTH_KEY.to_string()),
                Bytes::copy_from_slice(self.date_of_birth.as_bytes()),
            ),
        ]
    }
}

/// A degree certificate.
///
/// Captures the six details the write path tracks. `other_details` is
/// comma-delimited free text (specialization, honors, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub certification_type: String,
    pub institution: String,
    pub degree: String,
    pub date_start: String,
    pub date_end: String,
    pub other_details: String,
}

impl CredentialRecord {
    /// Encode to the CBOR blob stored in the record vault.
    pub fn to_bytes(&self) -> Result<Bytes, CoreError> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf)
            .map_err(|e| CoreError::EncodingError(e.to_string()))?;
        Ok(Bytes::from(buf))
    }

    /// Decode from a stored vault blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        ciborium::from_reader(bytes).map_err(|e| CoreError::DecodingError(e.to_string()))
    }

    /// Iterate the comma-delimited entries of `other_details`.
    pub fn other_detail_entries(&self) -> impl Iterator<Item = &str> {
        self.other_details
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
    }
}
