/*!
 * Error Handling for the QaSa Key Management Service
 *
 * Provides the error taxonomy shared by the KMS dispatcher and key provider
 * implementations, with error codes and convenience constructors.
 *
 * Dispatcher-level errors (a missing or duplicated provider registration)
 * and provider-level errors (unknown key, bad seed, signing failure, backend
 * I/O) are distinct variants of a single enum, so that provider errors can
 * propagate through the dispatcher unchanged and callers can still tell
 * misconfiguration apart from operational failures.
 */

use thiserror::Error;

/// Error type for all key-management operations
#[derive(Debug, Error)]
pub enum KmsError {
    /// No provider is registered for the key type an operation routes by.
    /// Surfaced immediately to the caller, never retried.
    #[error("No key provider registered for key type '{key_type}'")]
    ProviderNotFound { key_type: String, error_code: u32 },

    /// A second registration was attempted for an already-registered key
    /// type. Fatal to the registration attempt; the existing registration
    /// is left intact.
    #[error("A key provider is already registered for key type '{key_type}'")]
    DuplicateProvider { key_type: String, error_code: u32 },

    /// The key identifier is unknown to the provider it routed to.
    #[error("Key '{key_id}' is not known to its provider")]
    KeyNotFound { key_id: String, error_code: u32 },

    /// A key identifier string could not be parsed.
    #[error("Invalid key identifier '{value}': {cause}")]
    InvalidKeyId {
        value: String,
        cause: String,
        error_code: u32,
    },

    /// Seed material was rejected by the provider's derivation.
    #[error("Invalid seed: expected {expected}, got {actual}")]
    InvalidSeed {
        expected: String,
        actual: String,
        error_code: u32,
    },

    /// A provider failed to produce a signature.
    #[error("Signing failed: {operation} - {cause}")]
    SigningError {
        operation: String,
        cause: String,
        error_code: u32,
    },

    /// A signature's encoding could not be decoded. A signature that decodes
    /// but does not match is a `false` verification result, not this error.
    #[error("Malformed signature encoding: {cause}")]
    MalformedSignature { cause: String, error_code: u32 },

    /// A provider's backend (keystore, HSM, remote KMS) failed or is
    /// unreachable.
    #[error("Key provider backend error: {operation} - {cause}")]
    BackendError {
        operation: String,
        cause: String,
        error_code: u32,
    },
}

/// Error code constants for different error categories
pub mod error_codes {
    // Dispatcher errors: 1000-1999
    pub const PROVIDER_NOT_FOUND: u32 = 1001;
    pub const DUPLICATE_PROVIDER: u32 = 1002;

    // Key errors: 2000-2999
    pub const KEY_NOT_FOUND: u32 = 2001;
    pub const INVALID_KEY_ID: u32 = 2002;
    pub const INVALID_SEED: u32 = 2003;

    // Signature errors: 3000-3999
    pub const SIGNING_FAILED: u32 = 3001;
    pub const MALFORMED_SIGNATURE: u32 = 3002;

    // Backend errors: 4000-4999
    pub const BACKEND_IO_FAILED: u32 = 4001;
    pub const BACKEND_UNREACHABLE: u32 = 4002;
}

impl KmsError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            KmsError::ProviderNotFound { error_code, .. } => *error_code,
            KmsError::DuplicateProvider { error_code, .. } => *error_code,
            KmsError::KeyNotFound { error_code, .. } => *error_code,
            KmsError::InvalidKeyId { error_code, .. } => *error_code,
            KmsError::InvalidSeed { error_code, .. } => *error_code,
            KmsError::SigningError { error_code, .. } => *error_code,
            KmsError::MalformedSignature { error_code, .. } => *error_code,
            KmsError::BackendError { error_code, .. } => *error_code,
        }
    }

    /// Get the error category/type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            KmsError::ProviderNotFound { .. } => "ProviderNotFound",
            KmsError::DuplicateProvider { .. } => "DuplicateProvider",
            KmsError::KeyNotFound { .. } => "KeyNotFound",
            KmsError::InvalidKeyId { .. } => "InvalidKeyId",
            KmsError::InvalidSeed { .. } => "InvalidSeed",
            KmsError::SigningError { .. } => "SigningError",
            KmsError::MalformedSignature { .. } => "MalformedSignature",
            KmsError::BackendError { .. } => "BackendError",
        }
    }

    /// Whether the error originates in the dispatcher itself rather than a
    /// provider. Dispatcher errors indicate misconfiguration (a missing or
    /// doubled registration), not an operational failure.
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            KmsError::ProviderNotFound { .. } | KmsError::DuplicateProvider { .. }
        )
    }
}

/// Convenience constructors for common error types
impl KmsError {
    pub fn provider_not_found(key_type: &str) -> Self {
        KmsError::ProviderNotFound {
            key_type: key_type.to_string(),
            error_code: error_codes::PROVIDER_NOT_FOUND,
        }
    }

    pub fn duplicate_provider(key_type: &str) -> Self {
        KmsError::DuplicateProvider {
            key_type: key_type.to_string(),
            error_code: error_codes::DUPLICATE_PROVIDER,
        }
    }

    pub fn key_not_found(key_id: &str) -> Self {
        KmsError::KeyNotFound {
            key_id: key_id.to_string(),
            error_code: error_codes::KEY_NOT_FOUND,
        }
    }

    pub fn invalid_key_id(value: &str, cause: &str) -> Self {
        KmsError::InvalidKeyId {
            value: value.to_string(),
            cause: cause.to_string(),
            error_code: error_codes::INVALID_KEY_ID,
        }
    }

    pub fn invalid_seed(expected: &str, actual: &str) -> Self {
        KmsError::InvalidSeed {
            expected: expected.to_string(),
            actual: actual.to_string(),
            error_code: error_codes::INVALID_SEED,
        }
    }

    pub fn signing_error(operation: &str, cause: &str) -> Self {
        KmsError::SigningError {
            operation: operation.to_string(),
            cause: cause.to_string(),
            error_code: error_codes::SIGNING_FAILED,
        }
    }

    pub fn malformed_signature(cause: &str) -> Self {
        KmsError::MalformedSignature {
            cause: cause.to_string(),
            error_code: error_codes::MALFORMED_SIGNATURE,
        }
    }

    pub fn backend_error(operation: &str, cause: &str) -> Self {
        KmsError::BackendError {
            operation: operation.to_string(),
            cause: cause.to_string(),
            error_code: error_codes::BACKEND_IO_FAILED,
        }
    }
}

// From implementations for automatic error conversion in providers
impl From<std::io::Error> for KmsError {
    fn from(err: std::io::Error) -> Self {
        KmsError::backend_error("io", &err.to_string())
    }
}

impl From<hex::FromHexError> for KmsError {
    fn from(err: hex::FromHexError) -> Self {
        KmsError::malformed_signature(&err.to_string())
    }
}

/// Result type alias for key-management operations
pub type KmsResult<T> = Result<T, KmsError>;
