//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use credledger::{Chaincode, LedgerConfig};
use credledger_core::CredentialRecord;
use credledger_state::MemoryStore;

/// A test fixture with a chaincode over an in-memory store.
pub struct TestFixture {
    pub chaincode: Chaincode<MemoryStore>,
}

impl TestFixture {
    /// Create a fixture with default configuration.
    pub fn new() -> Self {
        Self {
            chaincode: Chaincode::new(MemoryStore::new(), LedgerConfig::default()),
        }
    }

    /// Create a fixture with a specific configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            chaincode: Chaincode::new(MemoryStore::new(), config),
        }
    }

    /// Seed the canonical identity profile.
    pub async fn seed_identity(&self) {
        self.chaincode
            .initialize(&identity_args())
            .await
            .expect("seed identity");
    }

    /// Read a key through the query path, returning the raw bytes.
    pub async fn read(&self, key: &str) -> Vec<u8> {
        self.chaincode
            .query("read", &[key.to_string()])
            .await
            .expect("read")
            .to_vec()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The canonical three deployment arguments.
pub fn identity_args() -> Vec<String> {
    ["123-45-6789", "Jane Doe", "1990-01-01"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// The canonical twelve write arguments (a BSc degree).
pub fn degree_write_args() -> Vec<String> {
    [
        "degree",
        "BSc",
        "MIT",
        "MIT",
        "CS",
        "CS",
        "2010",
        "2010-09-01",
        "2014",
        "2014-06-01",
        "other",
        "Cum Laude",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The typed form of the canonical degree record.
pub fn degree_record() -> CredentialRecord {
    CredentialRecord {
        certification_type: "degree".to_string(),
        institution: "MIT".to_string(),
        degree: "BSc".to_string(),
        date_start: "2010-09-01".to_string(),
        date_end: "2014-06-01".to_string(),
        other_details: "Cum Laude".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_seeds_identity() {
        let fixture = TestFixture::new();
        fixture.seed_identity().await;

        assert_eq!(fixture.read("full_name").await, b"Jane Doe");
    }

    #[tokio::test]
    async fn test_fixture_write_and_read() {
        let fixture = TestFixture::new();
        fixture
            .chaincode
            .invoke("write", &degree_write_args())
            .await
            .unwrap();

        assert_eq!(fixture.read("degree").await, b"BSc");
        assert_eq!(fixture.read("other").await, b"Cum Laude");
    }

    #[tokio::test]
    async fn test_fixture_vault_roundtrip() {
        let fixture = TestFixture::new();
        let record = degree_record();

        let id = fixture.chaincode.create_record(&record).await.unwrap();
        let fetched = fixture.chaincode.get_record(&id).await.unwrap().unwrap();
        assert_eq!(fetched, record);
    }
}
