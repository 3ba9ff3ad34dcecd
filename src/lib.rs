/*!
 * QaSa Key Management Service
 *
 * This crate implements a key-management facade that routes key operations
 * (create, sign, verify, fetch public key, list) to one of several pluggable
 * key-provider back-ends, selected by a key-type tag.
 *
 * The facade is the composition root for key management and contains no
 * cryptographic logic itself. Signing, key derivation, and verification are
 * implemented by concrete providers satisfying the [`KeyProvider`] contract,
 * which can be backed by a local software keystore, a PKCS#11 HSM, a remote
 * KMS, or anything else.
 *
 * # Example
 *
 * ```no_run
 * use qasa_kms::prelude::*;
 *
 * # struct MyEd25519Provider;
 * # #[async_trait::async_trait]
 * # impl KeyProvider for MyEd25519Provider {
 * #     async fn list(&self) -> KmsResult<Vec<KeyListEntry>> { unimplemented!() }
 * #     async fn public_key(&self, _: &KeyId) -> KmsResult<String> { unimplemented!() }
 * #     async fn sign(&self, _: &KeyId, _: &[u8], _: &SignOptions) -> KmsResult<Vec<u8>> { unimplemented!() }
 * #     async fn new_private_key_from_seed(&self, _: &Seed) -> KmsResult<KeyId> { unimplemented!() }
 * #     async fn verify(&self, _: &[u8], _: &str, _: &KeyId) -> KmsResult<bool> { unimplemented!() }
 * # }
 * # async fn demo() -> KmsResult<()> {
 * let mut kms = Kms::new();
 * kms.register_key_provider(KeyType::new("ed25519"), Box::new(MyEd25519Provider))?;
 *
 * let seed = Seed::new(vec![0u8; 32]);
 * let key_id = kms.create_key_from_seed(&KeyType::new("ed25519"), &seed).await?;
 * let signature = kms.sign(&key_id, b"hello", &SignOptions::new()).await?;
 * # let _ = signature;
 * # Ok(())
 * # }
 * ```
 */

/// Error taxonomy shared by the dispatcher and providers
pub mod error;

/// Key data model: type tags, identifiers, list entries, seed material
pub mod key;

/// KMS registry and dispatcher
pub mod kms;

/// Key provider capability contract
pub mod provider;

// Re-export main types for convenience
pub use error::{KmsError, KmsResult};
pub use key::KeyId;
pub use key::KeyListEntry;
pub use key::KeyType;
pub use key::Seed;
pub use kms::Kms;
pub use provider::KeyProvider;
pub use provider::SignOptions;

/// Provides the commonly used types in one import.
pub mod prelude {
    pub use crate::error::KmsError;
    pub use crate::error::KmsResult;
    pub use crate::key::KeyId;
    pub use crate::key::KeyListEntry;
    pub use crate::key::KeyType;
    pub use crate::key::Seed;
    pub use crate::kms::Kms;
    pub use crate::provider::KeyProvider;
    pub use crate::provider::SignOptions;
}
