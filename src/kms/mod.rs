/*!
 * KMS Registry and Dispatcher
 *
 * The composition root for key management. A [`Kms`] owns a mapping from
 * key-type tag to a single registered [`KeyProvider`] instance and forwards
 * every operation to the provider registered for the relevant key type.
 *
 * The dispatcher contains no cryptographic logic. It performs no retries,
 * caching, or backoff; a provider failure propagates to the caller
 * unchanged, and a missing registration fails with `ProviderNotFound`
 * immediately. Registration is expected to complete at startup, before any
 * concurrent use begins; a populated `Kms` is then effectively read-only
 * and can be shared behind an `Arc`.
 */

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{KmsError, KmsResult};
use crate::key::{KeyId, KeyListEntry, KeyType, Seed};
use crate::provider::{KeyProvider, SignOptions};


/// Key-management facade routing operations to registered providers
#[derive(Default)]
pub struct Kms {
    registry: HashMap<KeyType, Box<dyn KeyProvider>>,
}

impl Kms {
    /// Create a KMS with an empty provider registry
    pub fn new() -> Self {
        Kms {
            registry: HashMap::new(),
        }
    }

    /// Register a provider for a key type.
    ///
    /// Each key type accepts exactly one provider for the lifetime of the
    /// KMS instance; there is no deregistration. Re-registration is treated
    /// as a programming error, not reconfiguration.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateProvider` if the key type already has a registered
    /// provider. The existing registration is left intact.
    pub fn register_key_provider(
        &mut self,
        key_type: KeyType,
        provider: Box<dyn KeyProvider>,
    ) -> KmsResult<()> {
        match self.registry.entry(key_type) {
            Entry::Occupied(entry) => Err(KmsError::duplicate_provider(entry.key().as_str())),
            Entry::Vacant(entry) => {
                log::info!("Registered key provider for key type '{}'", entry.key());
                entry.insert(provider);
                Ok(())
            }
        }
    }

    /// The key types that currently have a registered provider
    pub fn registered_key_types(&self) -> impl Iterator<Item = &KeyType> {
        self.registry.keys()
    }

    /// Create a new key by deriving it from seed bytes.
    ///
    /// Delegates to the provider's `new_private_key_from_seed`; the returned
    /// identifier is handed back exactly as the provider produced it.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` if no provider is registered for
    /// `key_type`, or whatever the provider's derivation fails with.
    pub async fn create_key_from_seed(
        &self,
        key_type: &KeyType,
        seed: &Seed,
    ) -> KmsResult<KeyId> {
        self.provider_for(key_type)?
            .new_private_key_from_seed(seed)
            .await
    }

    /// Fetch the public key material for a key
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` if no provider is registered for the
    /// key's type tag, or whatever the provider fails with.
    pub async fn public_key(&self, key_id: &KeyId) -> KmsResult<String> {
        self.provider_for(key_id.key_type())?.public_key(key_id).await
    }

    /// Sign `data` with the named key
    ///
    /// `opts` is passed through to the provider untransformed; providers
    /// ignore option keys they do not recognize.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` if no provider is registered for the
    /// key's type tag, or whatever the provider fails with.
    pub async fn sign(
        &self,
        key_id: &KeyId,
        data: &[u8],
        opts: &SignOptions,
    ) -> KmsResult<Vec<u8>> {
        self.provider_for(key_id.key_type())?
            .sign(key_id, data, opts)
            .await
    }

    /// Verify a hex-encoded signature over `data`.
    ///
    /// `Ok(false)` means the signature is well-formed but does not match;
    /// errors are reserved for structural failures.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` if no provider is registered for the
    /// key's type tag, or whatever the provider fails with.
    pub async fn verify(
        &self,
        data: &[u8],
        signature_hex: &str,
        key_id: &KeyId,
    ) -> KmsResult<bool> {
        self.provider_for(key_id.key_type())?
            .verify(data, signature_hex, key_id)
            .await
    }

    /// List every key managed by the provider for `key_type`.
    ///
    /// Listing is type-scoped rather than identifier-scoped, so the key
    /// type is an explicit parameter here.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` if no provider is registered for
    /// `key_type`, or whatever the provider fails with.
    pub async fn list(&self, key_type: &KeyType) -> KmsResult<Vec<KeyListEntry>> {
        self.provider_for(key_type)?.list().await
    }

    fn provider_for(&self, key_type: &KeyType) -> KmsResult<&dyn KeyProvider> {
        log::debug!("Dispatching to key provider for key type '{}'", key_type);
        self.registry
            .get(key_type)
            .map(|provider| provider.as_ref())
            .ok_or_else(|| KmsError::provider_not_found(key_type.as_str()))
    }
}
