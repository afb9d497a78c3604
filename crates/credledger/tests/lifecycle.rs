//! End-to-end lifecycle tests for the chaincode.
//!
//! Every scenario runs against the public entry points (initialize /
//! invoke / query), the way the hosting runtime drives the code. The
//! backend-failure scenarios use a fault-injecting store to pin down the
//! documented error surface and the accepted partial-write behavior.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use credledger::{Chaincode, ChaincodeError, LedgerConfig};
use credledger_core::{RequestError, StateKey};
use credledger_state::{MemoryStore, SqliteStore, StateError, StateStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn identity_args() -> Vec<String> {
    strings(&["123-45-6789", "Jane Doe", "1990-01-01"])
}

fn degree_args() -> Vec<String> {
    strings(&[
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
    ])
}

fn memory_chaincode() -> Chaincode<MemoryStore> {
    init_tracing();
    Chaincode::new(MemoryStore::new(), LedgerConfig::default())
}

/// A store that fails after a fixed number of successful puts, and
/// optionally on every get. Used to observe the no-rollback policy.
struct FaultyStore {
    inner: MemoryStore,
    puts_allowed: AtomicUsize,
    fail_gets: bool,
}

impl FaultyStore {
    fn failing_puts_after(successes: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            puts_allowed: AtomicUsize::new(successes),
            fail_gets: false,
        }
    }

    fn failing_gets() -> Self {
        Self {
            inner: MemoryStore::new(),
            puts_allowed: AtomicUsize::new(usize::MAX),
            fail_gets: true,
        }
    }
}

#[async_trait]
impl StateStore for FaultyStore {
    async fn put(&self, key: &StateKey, value: Bytes) -> credledger_state::Result<()> {
        let remaining = self.puts_allowed.load(Ordering::SeqCst);
        if remaining == 0 {
            return Err(StateError::Backend("injected put failure".to_string()));
        }
        self.puts_allowed.store(remaining - 1, Ordering::SeqCst);
        self.inner.put(key, value).await
    }

    async fn get(&self, key: &StateKey) -> credledger_state::Result<Option<Bytes>> {
        if self.fail_gets {
            return Err(StateError::Backend("injected get failure".to_string()));
        }
        self.inner.get(key).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Initializer
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn initialize_seeds_the_three_identity_keys() -> Result<()> {
    let cc = memory_chaincode();

    let out = cc.initialize(&identity_args()).await?;
    assert!(out.is_empty());

    let ssn = cc.query("read", &strings(&["social_security_number"])).await?;
    assert_eq!(&ssn[..], b"123-45-6789");

    let name = cc.query("read", &strings(&["full_name"])).await?;
    assert_eq!(&name[..], b"Jane Doe");

    let dob = cc.query("read", &strings(&["date_of_birth"])).await?;
    assert_eq!(&dob[..], b"1990-01-01");

    Ok(())
}

#[tokio::test]
async fn initialize_rejects_wrong_arity_and_persists_nothing() -> Result<()> {
    let cc = memory_chaincode();

    let err = cc
        .initialize(&strings(&["123-45-6789", "Jane Doe"]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ChaincodeError::Request(RequestError::ArgumentCount {
            expected: 3,
            got: 2
        })
    ));

    assert!(cc.store().is_empty());
    Ok(())
}

#[tokio::test]
async fn invoke_init_behaves_like_initialize() -> Result<()> {
    let cc = memory_chaincode();

    cc.invoke("init", &identity_args()).await?;

    let name = cc.query("read", &strings(&["full_name"])).await?;
    assert_eq!(&name[..], b"Jane Doe");
    Ok(())
}

#[tokio::test]
async fn identity_reads_back_typed_profile() -> Result<()> {
    let cc = memory_chaincode();

    assert!(cc.identity().await?.is_none());

    cc.initialize(&identity_args()).await?;

    let profile = cc.identity().await?.expect("profile seeded");
    assert_eq!(profile.full_name, "Jane Doe");
    assert_eq!(profile.social_security_number, "123-45-6789");
    assert_eq!(profile.date_of_birth, "1990-01-01");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Record Writer
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn write_persists_six_pairs_in_argument_order() -> Result<()> {
    let cc = memory_chaincode();
    let args = degree_args();

    let out = cc.invoke("write", &args).await?;
    assert!(out.is_empty());

    // Keys come from even positions, values from odd positions.
    for pair in args.chunks_exact(2) {
        let value = cc.query("read", &[pair[0].clone()]).await?;
        assert_eq!(&value[..], pair[1].as_bytes());
    }

    let degree = cc.query("read", &strings(&["degree"])).await?;
    assert_eq!(&degree[..], b"BSc");
    let other = cc.query("read", &strings(&["other"])).await?;
    assert_eq!(&other[..], b"Cum Laude");
    Ok(())
}

#[tokio::test]
async fn write_rejects_eleven_args_and_persists_nothing() -> Result<()> {
    let cc = memory_chaincode();

    let mut args = degree_args();
    args.pop();
    let err = cc.invoke("write", &args).await.unwrap_err();
    assert!(matches!(
        err,
        ChaincodeError::Request(RequestError::ArgumentCount {
            expected: 12,
            got: 11
        })
    ));

    assert!(cc.store().is_empty());
    Ok(())
}

#[tokio::test]
async fn write_reusing_a_key_overwrites_the_value() -> Result<()> {
    let cc = memory_chaincode();

    cc.invoke("write", &degree_args()).await?;

    let mut second = degree_args();
    second[1] = "MSc".to_string();
    cc.invoke("write", &second).await?;

    // No versioning: the round-trip returns the second value.
    let degree = cc.query("read", &strings(&["degree"])).await?;
    assert_eq!(&degree[..], b"MSc");
    Ok(())
}

#[tokio::test]
async fn write_failure_mid_sequence_keeps_earlier_puts() -> Result<()> {
    init_tracing();
    let cc = Chaincode::new(FaultyStore::failing_puts_after(2), LedgerConfig::default());

    let err = cc.invoke("write", &degree_args()).await.unwrap_err();
    assert!(matches!(err, ChaincodeError::Write(StateError::Backend(_))));

    // The first two pairs committed before the failure; no rollback.
    let degree = cc.query("read", &strings(&["degree"])).await?;
    assert_eq!(&degree[..], b"BSc");
    let institution = cc.query("read", &strings(&["MIT"])).await?;
    assert_eq!(&institution[..], b"MIT");

    // Pairs after the failure never landed.
    let cs = cc.query("read", &strings(&["CS"])).await?;
    assert!(cs.is_empty());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Record Reader
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn read_of_unwritten_key_returns_empty_bytes() -> Result<()> {
    let cc = memory_chaincode();

    let value = cc.query("read", &strings(&["never_written"])).await?;
    assert!(value.is_empty());
    Ok(())
}

#[tokio::test]
async fn read_rejects_wrong_arity() -> Result<()> {
    let cc = memory_chaincode();

    let err = cc
        .query("read", &strings(&["full_name", "degree"]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ChaincodeError::Request(RequestError::ArgumentCount {
            expected: 1,
            got: 2
        })
    ));
    Ok(())
}

#[tokio::test]
async fn failed_get_surfaces_the_structured_lookup_error() {
    init_tracing();
    let cc = Chaincode::new(FaultyStore::failing_gets(), LedgerConfig::default());

    let err = cc
        .query("read", &strings(&["full_name"]))
        .await
        .unwrap_err();

    // Exact client-visible shape, key embedded.
    let message = err.to_string();
    assert_eq!(message, r#"{"Error":"Failed to get state for full_name"}"#);

    // And it is well-formed JSON with the expected field.
    let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();
    assert_eq!(parsed["Error"], "Failed to get state for full_name");
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatcher
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_invoke_function_is_rejected_with_name() -> Result<()> {
    let cc = memory_chaincode();

    let err = cc.invoke("delete", &strings(&["degree"])).await.unwrap_err();
    match err {
        ChaincodeError::Request(RequestError::UnknownInvocation(name)) => {
            assert_eq!(name, "delete")
        }
        other => panic!("unexpected error: {other}"),
    }

    // "read" is a query function, not an invoke function.
    let err = cc.invoke("read", &strings(&["degree"])).await.unwrap_err();
    assert!(matches!(
        err,
        ChaincodeError::Request(RequestError::UnknownInvocation(_))
    ));
    Ok(())
}

#[tokio::test]
async fn unknown_query_function_is_rejected_with_name() -> Result<()> {
    let cc = memory_chaincode();

    let err = cc.query("write", &degree_args()).await.unwrap_err();
    match err {
        ChaincodeError::Request(RequestError::UnknownQuery(name)) => assert_eq!(name, "write"),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn rejected_dispatch_has_no_side_effects() -> Result<()> {
    let cc = memory_chaincode();

    let _ = cc.invoke("delete", &degree_args()).await;
    let _ = cc.query("drop", &strings(&["degree"])).await;

    assert!(cc.store().is_empty());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// SQLite backend parity
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn sqlite_backend_runs_the_full_lifecycle() -> Result<()> {
    init_tracing();
    let cc = Chaincode::new(SqliteStore::open_memory()?, LedgerConfig::default());

    cc.initialize(&identity_args()).await?;
    cc.invoke("write", &degree_args()).await?;

    let name = cc.query("read", &strings(&["full_name"])).await?;
    assert_eq!(&name[..], b"Jane Doe");
    let degree = cc.query("read", &strings(&["degree"])).await?;
    assert_eq!(&degree[..], b"BSc");
    let missing = cc.query("read", &strings(&["never_written"])).await?;
    assert!(missing.is_empty());
    Ok(())
}

#[tokio::test]
async fn sqlite_state_survives_redeploy() -> Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state.db");

    {
        let cc = Chaincode::new(SqliteStore::open(&path)?, LedgerConfig::default());
        cc.initialize(&identity_args()).await?;
    }

    // A fresh instance over the same file sees the committed state.
    let cc = Chaincode::new(SqliteStore::open(&path)?, LedgerConfig::default());
    let name = cc.query("read", &strings(&["full_name"])).await?;
    assert_eq!(&name[..], b"Jane Doe");
    Ok(())
}
