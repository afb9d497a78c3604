//! # credledger Testkit
//!
//! Testing utilities for credledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a chaincode over an in-memory store plus the canonical
//!   argument vectors the lifecycle scenarios use
//! - **Generators**: proptest strategies for property-based testing of
//!   the write surface
//!
//! ## Test Fixtures
//!
//! Quickly set up a scenario:
//!
//! ```rust,no_run
//! use credledger_testkit::fixtures::TestFixture;
//!
//! async fn example() {
//!     let fixture = TestFixture::new();
//!     fixture.seed_identity().await;
//!     assert_eq!(fixture.read("full_name").await, b"Jane Doe");
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use credledger_testkit::generators::write_args;
//!
//! proptest! {
//!     #[test]
//!     fn writes_roundtrip(args in write_args()) {
//!         // drive the chaincode with `args`
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{degree_record, degree_write_args, identity_args, TestFixture};
pub use generators::{key_string, value_string, wrong_arity_args, write_args};
