//! The record vault: collision-free storage for whole credential records.
//!
//! The flat write surface has only six field names and no per-record
//! discriminator, so a second record silently overwrites the first. The
//! vault resolves that: each record is stored as a single CBOR blob under
//! `<prefix>:<record_id>`, making records individually addressable. One
//! put per record also closes the multi-put partial-write gap at this
//! surface.

use credledger_core::{CredentialRecord, RecordId, StateKey};
use credledger_state::StateStore;

use crate::chaincode::Chaincode;
use crate::error::{ChaincodeError, Result};

impl<S: StateStore> Chaincode<S> {
    /// Store a new credential record under a freshly generated id.
    pub async fn create_record(&self, record: &CredentialRecord) -> Result<RecordId> {
        let id = RecordId::generate();
        self.put_record(&id, record).await?;
        Ok(id)
    }

    /// Store or replace the record bound to `id`.
    pub async fn put_record(&self, id: &RecordId, record: &CredentialRecord) -> Result<()> {
        let key = self.record_key(id)?;
        let blob = record.to_bytes()?;
        self.store
            .put(&key, blob)
            .await
            .map_err(ChaincodeError::Write)
    }

    /// Fetch the record bound to `id`, if any.
    pub async fn get_record(&self, id: &RecordId) -> Result<Option<CredentialRecord>> {
        let key = self.record_key(id)?;
        match self.store.get(&key).await {
            Ok(Some(blob)) => Ok(Some(CredentialRecord::from_bytes(&blob)?)),
            Ok(None) => Ok(None),
            Err(source) => Err(ChaincodeError::Lookup { key, source }),
        }
    }

    fn record_key(&self, id: &RecordId) -> Result<StateKey> {
        Ok(StateKey::scoped(&self.config.record_prefix, &id.to_hex())?)
    }
}
