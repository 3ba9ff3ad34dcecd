//! Property tests for the dispatcher's routing behavior.

use proptest::prelude::*;

use qasa_kms::prelude::*;

fn tag_strategy() -> impl Strategy<Value = String> {
    // Tags are opaque, but ':' is reserved as the identifier separator and
    // rejected by KeyType::new, so the strategy never produces it.
    "[a-z0-9-]{1,16}"
}

proptest! {
    /// With an empty registry, every operation fails with ProviderNotFound
    /// no matter which tag it routes by.
    #[test]
    fn prop_empty_registry_rejects_any_tag(tag in tag_strategy(), payload in "[a-f0-9]{1,32}") {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let kms = Kms::new();
        let key_type = KeyType::new(tag);
        let key_id = KeyId::new(key_type.clone(), payload);
        let seed = Seed::new(vec![0u8; 32]);

        let create = rt.block_on(kms.create_key_from_seed(&key_type, &seed));
        prop_assert!(
            matches!(&create, Err(KmsError::ProviderNotFound { .. })),
            "expected ProviderNotFound from create, got {:?}",
            create
        );

        let public_key = rt.block_on(kms.public_key(&key_id));
        prop_assert!(
            matches!(&public_key, Err(KmsError::ProviderNotFound { .. })),
            "expected ProviderNotFound from public_key, got {:?}",
            public_key
        );

        let sign = rt.block_on(kms.sign(&key_id, b"data", &SignOptions::new()));
        prop_assert!(
            matches!(&sign, Err(KmsError::ProviderNotFound { .. })),
            "expected ProviderNotFound from sign, got {:?}",
            sign
        );

        let verify = rt.block_on(kms.verify(b"data", "00", &key_id));
        prop_assert!(
            matches!(&verify, Err(KmsError::ProviderNotFound { .. })),
            "expected ProviderNotFound from verify, got {:?}",
            verify
        );

        let list = rt.block_on(kms.list(&key_type));
        prop_assert!(
            matches!(&list, Err(KmsError::ProviderNotFound { .. })),
            "expected ProviderNotFound from list, got {:?}",
            list
        );
    }

    /// Key identifiers round-trip through their string rendering, including
    /// payloads that embed the separator character.
    #[test]
    fn prop_key_id_string_round_trip(
        tag in tag_strategy(),
        payload in "[a-zA-Z0-9:/._-]{1,48}",
    ) {
        let key_id = KeyId::new(KeyType::new(tag), payload);
        let parsed: KeyId = key_id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, key_id);
    }
}
