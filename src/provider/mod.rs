/*!
 * Key Provider Capability Contract
 *
 * Any key-type-specific backend plugs into the KMS by implementing
 * [`KeyProvider`]: list keys, fetch a public key, sign, verify, and derive a
 * new key from seed bytes. A provider can be a local software keystore, a
 * PKCS#11 HSM, a cloud KMS, or anything else that satisfies the contract.
 *
 * The dispatcher never interprets provider results; it awaits them and
 * passes them through. All cryptography, key storage, retries, and timeout
 * policy belong to the provider.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::KmsResult;
use crate::key::{KeyId, KeyListEntry, Seed};


/// Open configuration bag for signing operations.
///
/// Recognized keys are provider-specific (hash algorithm selection,
/// deterministic-nonce flags, and so on). Providers must ignore keys they do
/// not recognize rather than reject them, so that new options can be
/// introduced without breaking older backends.
///
/// # Example
///
/// ```
/// use qasa_kms::provider::SignOptions;
///
/// let opts = SignOptions::new()
///     .with("hash", "sha256")
///     .with("deterministic", true);
///
/// assert_eq!(opts.get_str("hash"), Some("sha256"));
/// assert_eq!(opts.get_bool("deterministic"), Some(true));
/// assert_eq!(opts.get_str("unknown"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignOptions(HashMap<String, Value>);

impl SignOptions {
    /// Create an empty options bag
    pub fn new() -> Self {
        SignOptions(HashMap::new())
    }

    /// Set an option, consuming and returning the bag for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a raw option value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up an option expected to be a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Look up an option expected to be a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Look up an option expected to be an unsigned integer
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Capability contract for a key-type-specific backend.
///
/// One implementation per supported key type. Implementations must be
/// `Send + Sync`; the dispatcher may be shared across tasks, and providers
/// may be called concurrently. How concurrent calls are serialized or
/// parallelized is entirely the provider's own policy.
///
/// Every method may suspend on backend I/O. The dispatcher imposes no
/// timeout or cancellation; providers implement whatever deadline semantics
/// their backend needs.
#[async_trait]
pub trait KeyProvider: Send + Sync {
    /// Return every key this provider currently manages.
    ///
    /// No pagination; ordering is unspecified unless a concrete provider
    /// documents one.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the backend is unreachable.
    async fn list(&self) -> KmsResult<Vec<KeyListEntry>>;

    /// Fetch public key material for a key, in a string encoding such as
    /// hex or PEM.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if the identifier is unknown to this provider.
    async fn public_key(&self, key_id: &KeyId) -> KmsResult<String>;

    /// Sign `data` with the named key, returning signature bytes.
    ///
    /// Unrecognized option keys in `opts` must be ignored.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` or `SigningError`.
    async fn sign(&self, key_id: &KeyId, data: &[u8], opts: &SignOptions) -> KmsResult<Vec<u8>>;

    /// Derive a new private key from seed bytes and return its identifier.
    ///
    /// The derivation is deterministic or provider-defined; the returned
    /// identifier's type tag must match this provider's own type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeed` if the seed length or format is unacceptable
    /// to the backend.
    async fn new_private_key_from_seed(&self, seed: &Seed) -> KmsResult<KeyId>;

    /// Verify a hex-encoded signature over `message`.
    ///
    /// A well-formed signature that does not match is `Ok(false)`, never an
    /// error. Errors are reserved for structural failures: an unknown key
    /// or a malformed signature encoding.
    async fn verify(&self, message: &[u8], signature_hex: &str, key_id: &KeyId)
        -> KmsResult<bool>;
}
