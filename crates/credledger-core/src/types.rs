//! Strong type definitions for the credledger namespace.
//!
//! Identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// A key in the flat ledger namespace.
///
/// Keys are arbitrary caller-chosen strings; the only structural rule is
/// that they are non-empty. The namespace has no schema and no secondary
/// structure, so two writers reusing the same key overwrite each other.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(pub(crate) String);

impl StateKey {
    /// Create a key, rejecting the empty string.
    pub fn new(key: impl Into<String>) -> Result<Self, CoreError> {
        let key = key.into();
        if key.is_empty() {
            return Err(CoreError::EmptyKey);
        }
        Ok(Self(key))
    }

    /// Compose a namespaced key as `<namespace>:<name>`.
    ///
    /// Both parts must be non-empty, which makes the composed key non-empty.
    pub fn scoped(namespace: &str, name: &str) -> Result<Self, CoreError> {
        if namespace.is_empty() || name.is_empty() {
            return Err(CoreError::EmptyKey);
        }
        Ok(Self(format!("{namespace}:{name}")))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateKey({})", self.0)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier for a credential record in the record vault.
///
/// 16 random bytes, rendered as hex. Generated ids make independently
/// written records individually addressable instead of colliding on the
/// six shared field names of the flat namespace.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub [u8; 16]);

impl RecordId {
    /// Generate a fresh random record id.
    pub fn generate() -> Self {
        Self(rand::random())
    }

    /// Create a RecordId from raw bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s).map_err(|e| CoreError::InvalidRecordId(e.to_string()))?;
        if bytes.len() != 16 {
            return Err(CoreError::InvalidRecordId(format!(
                "expected 16 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.to_hex())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for RecordId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
