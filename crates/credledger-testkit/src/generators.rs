//! Proptest generators for property-based testing.

use proptest::prelude::*;

use credledger_core::WRITE_ARITY;

/// Generate a non-empty state key string.
pub fn key_string() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_:-]{0,31}".prop_map(String::from)
}

/// Generate an arbitrary (possibly empty) value string.
pub fn value_string() -> impl Strategy<Value = String> {
    ".{0,64}".prop_map(String::from)
}

/// Generate a well-formed twelve-argument write vector.
///
/// Keys are distinct so each of the six pairs binds its own key.
pub fn write_args() -> impl Strategy<Value = Vec<String>> {
    (
        prop::collection::hash_set(key_string(), WRITE_ARITY / 2),
        prop::collection::vec(value_string(), WRITE_ARITY / 2),
    )
        .prop_map(|(keys, values)| {
            keys.into_iter()
                .zip(values)
                .flat_map(|(key, value)| [key, value])
                .collect()
        })
}

/// Generate an argument vector whose length is anything but the write arity.
pub fn wrong_arity_args() -> impl Strategy<Value = Vec<String>> {
    (0usize..24)
        .prop_filter("length must differ from the write arity", |n| {
            *n != WRITE_ARITY
        })
        .prop_flat_map(|n| prop::collection::vec(value_string(), n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestFixture;
    use credledger::ChaincodeError;
    use credledger_core::RequestError;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("tokio runtime")
    }

    proptest! {
        #[test]
        fn well_formed_write_persists_every_pair(args in write_args()) {
            runtime().block_on(async {
                let fixture = TestFixture::new();
                fixture.chaincode.invoke("write", &args).await.unwrap();

                for pair in args.chunks_exact(2) {
                    let value = fixture.read(&pair[0]).await;
                    assert_eq!(value, pair[1].as_bytes());
                }
            });
        }

        #[test]
        fn wrong_arity_write_fails_and_persists_nothing(args in wrong_arity_args()) {
            runtime().block_on(async {
                let fixture = TestFixture::new();
                let err = fixture.chaincode.invoke("write", &args).await.unwrap_err();
                assert!(matches!(
                    err,
                    ChaincodeError::Request(RequestError::ArgumentCount { .. })
                ));
                assert!(fixture.chaincode.store().is_empty());
            });
        }
    }
}
