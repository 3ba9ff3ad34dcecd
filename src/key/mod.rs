/*!
 * Key Data Model
 *
 * The value types that cross the KMS boundary: key-type tags, key
 * identifiers, listing entries, and seed material for key derivation.
 *
 * These types are deliberately opaque to the dispatcher. A `KeyId` is never
 * inspected beyond the type tag used for routing; whatever a provider puts
 * in the identifier payload stays untouched.
 */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{KmsError, KmsResult};

#[cfg(test)]
mod tests;

/// Opaque discriminator identifying which provider a key belongs to
/// (e.g. `"secp256k1"`, `"ed25519"`, `"kms-aws"`).
///
/// Tags are case-sensitive and never normalized by the dispatcher. A key's
/// tag is stable for the lifetime of the key. The `':'` character is
/// reserved as the [`KeyId`] separator and must not appear in a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyType(String);

impl KeyType {
    /// Create a key type tag from any string-like value
    ///
    /// # Panics
    ///
    /// Panics if the tag contains `':'`. A tag embedding the identifier
    /// separator would not round-trip through a [`KeyId`]'s string form,
    /// so this is treated as a programming error at construction time.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        assert!(
            !tag.contains(':'),
            "key type tag '{}' must not contain ':'",
            tag
        );
        KeyType(tag)
    }

    /// The tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyType {
    fn from(tag: &str) -> Self {
        KeyType::new(tag)
    }
}

/// Identifier of a key managed by some provider.
///
/// Composed of a [`KeyType`] tag plus a provider-specific identifier string.
/// Immutable once issued; used to route every subsequent operation back to
/// the provider that created the key. The tag component must always match a
/// provider capable of interpreting the remainder of the identifier.
///
/// Identifiers render as `"<type>:<id>"` and parse back from that form, so
/// they can round-trip through configuration files and logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyId {
    key_type: KeyType,
    id: String,
}

impl KeyId {
    /// Create a key identifier from a type tag and a provider-specific id
    pub fn new(key_type: KeyType, id: impl Into<String>) -> Self {
        KeyId {
            key_type,
            id: id.into(),
        }
    }

    /// The type tag used for routing
    pub fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    /// The provider-specific identifier payload
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key_type, self.id)
    }
}

impl FromStr for KeyId {
    type Err = KmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, id) = s
            .split_once(':')
            .ok_or_else(|| KmsError::invalid_key_id(s, "missing ':' separator"))?;
        if tag.is_empty() {
            return Err(KmsError::invalid_key_id(s, "empty key type tag"));
        }
        if id.is_empty() {
            return Err(KmsError::invalid_key_id(s, "empty identifier"));
        }
        Ok(KeyId::new(KeyType::new(tag), id))
    }
}

/// One entry returned by listing the keys of a provider
///
/// * `alias` - human-readable label for the key
/// * `key` - public identifier or public key material (string encoding)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyListEntry {
    pub alias: String,
    pub key: String,
}

impl KeyListEntry {
    pub fn new(alias: impl Into<String>, key: impl Into<String>) -> Self {
        KeyListEntry {
            alias: alias.into(),
            key: key.into(),
        }
    }
}

/// Seed bytes for deterministic key derivation.
///
/// The buffer is zeroized when the seed is dropped, and the `Debug`
/// representation never prints the content, only the length.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed(Vec<u8>);

impl Seed {
    /// Wrap raw seed bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Seed(bytes)
    }

    /// Decode a seed from a hex string
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeed` if the string is not valid hex.
    pub fn from_hex(encoded: &str) -> KmsResult<Self> {
        let bytes = hex::decode(encoded)
            .map_err(|e| KmsError::invalid_seed("hex-encoded bytes", &e.to_string()))?;
        Ok(Seed(bytes))
    }

    /// The raw seed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Seed {
    fn from(bytes: &[u8]) -> Self {
        Seed(bytes.to_vec())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .field("len", &self.0.len())
            .finish()
    }
}
