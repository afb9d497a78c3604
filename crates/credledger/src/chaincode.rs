//! The chaincode: deploy/invoke/query lifecycle over a state backend.
//!
//! The hosting runtime deploys this code, registers it with a peer, and
//! routes each transaction here as a (function, args) pair. All state
//! access goes through the [`StateStore`] the instance was built with.

use std::sync::Arc;

use bytes::Bytes;
use credledger_core::{
    read_key, IdentityProfile, InvokeFunction, QueryFunction, StateKey, WriteRequest,
    DATE_OF_BIRTH_KEY, FULL_NAME_KEY, SSN_KEY,
};
use credledger_state::StateStore;

use crate::error::{ChaincodeError, Result};

/// Configuration for the chaincode.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Namespace prefix for vault-stored credential records.
    pub record_prefix: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            record_prefix: "credential".to_string(),
        }
    }
}

/// The chaincode: entry points for the deploy/invoke/query lifecycle.
///
/// Each invocation is a single synchronous call handled to completion.
/// The host serializes invocations against each other, so no locking is
/// layered on top of the backend's own.
pub struct Chaincode<S: StateStore> {
    /// The state backend.
    pub(crate) store: Arc<S>,
    /// Configuration.
    pub(crate) config: LedgerConfig,
}

impl<S: StateStore> Chaincode<S> {
    /// Create a new chaincode instance.
    pub fn new(store: S, config: LedgerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Entry Points
    // ─────────────────────────────────────────────────────────────────────────

    /// Deployment entry point: seed the identity profile.
    ///
    /// The host calls this exactly once when the peer deploys its
    /// instance. Same behavior as `invoke("init", args)`.
    pub async fn initialize(&self, args: &[String]) -> Result<Bytes> {
        self.init(args).await
    }

    /// Invoke entry point: transactions that update the ledger.
    pub async fn invoke(&self, function: &str, args: &[String]) -> Result<Bytes> {
        tracing::debug!(function, "invoke running");

        let function = match function.parse::<InvokeFunction>() {
            Ok(function) => function,
            Err(err) => {
                tracing::warn!(function, "invoke did not find function");
                return Err(err.into());
            }
        };

        match function {
            InvokeFunction::Init => self.init(args).await,
            InvokeFunction::Write => self.write(args).await,
        }
    }

    /// Query entry point: reads that do not update the ledger.
    pub async fn query(&self, function: &str, args: &[String]) -> Result<Bytes> {
        tracing::debug!(function, "query running");

        let function = match function.parse::<QueryFunction>() {
            Ok(function) => function,
            Err(err) => {
                tracing::warn!(function, "query did not find function");
                return Err(err.into());
            }
        };

        match function {
            QueryFunction::Read => self.read(args).await,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Handlers
    // ─────────────────────────────────────────────────────────────────────────

    /// Seed the three fixed identity keys.
    ///
    /// Puts run in order; the first failure aborts the rest. Earlier puts
    /// in the same call stay committed (accepted partial-write risk).
    async fn init(&self, args: &[String]) -> Result<Bytes> {
        let profile = IdentityProfile::from_args(args)?;

        for (key, value) in profile.bindings() {
            self.store
                .put(&key, value)
                .await
                .map_err(ChaincodeError::Write)?;
        }

        Ok(Bytes::new())
    }

    /// Persist one credential record as six key/value pairs.
    ///
    /// Same ordering and failure policy as `init`. A later write reusing
    /// a key silently overwrites its value; the record vault is the
    /// collision-free alternative.
    async fn write(&self, args: &[String]) -> Result<Bytes> {
        let request = WriteRequest::from_args(args)?;

        for field in request.into_fields() {
            self.store
                .put(&field.key, field.value)
                .await
                .map_err(ChaincodeError::Write)?;
        }

        Ok(Bytes::new())
    }

    /// Return the raw bytes bound to a key.
    ///
    /// A key never written is not an error: the caller sees empty bytes,
    /// since the flat namespace does not distinguish empty from absent.
    async fn read(&self, args: &[String]) -> Result<Bytes> {
        let key = read_key(args)?;

        match self.store.get(&key).await {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Ok(Bytes::new()),
            Err(source) => Err(ChaincodeError::Lookup { key, source }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Typed Read-back
    // ─────────────────────────────────────────────────────────────────────────

    /// Read the seeded identity profile back into its typed form.
    ///
    /// Returns `None` if any of the three fixed keys was never written.
    pub async fn identity(&self) -> Result<Option<IdentityProfile>> {
        let ssn = self.read_fixed(SSN_KEY).await?;
        let full_name = self.read_fixed(FULL_NAME_KEY).await?;
        let date_of_birth = self.read_fixed(DATE_OF_BIRTH_KEY).await?;

        Ok(match (ssn, full_name, date_of_birth) {
            (Some(social_security_number), Some(full_name), Some(date_of_birth)) => {
                Some(IdentityProfile {
                    social_security_number,
                    full_name,
                    date_of_birth,
                })
            }
            _ => None,
        })
    }

    async fn read_fixed(&self, key: &str) -> Result<Option<String>> {
        let key = StateKey::new(key)?;
        match self.store.get(&key).await {
            Ok(value) => Ok(value.map(|v| String::from_utf8_lossy(&v).into_owned())),
            Err(source) => Err(ChaincodeError::Lookup { key, source }),
        }
    }
}
