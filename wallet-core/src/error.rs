// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    /// Seed missing or outside the length range the HD primitive accepts.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Position, quantity or selection argument the caller got wrong.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Hardened child requested from a key without private material.
    #[error("Invalid derivation: {0}")]
    InvalidDerivation(String),

    /// A codec was fed data that breaks its own precondition. Always a bug.
    #[error("Encoding invariant violated: {0}")]
    EncodingInvariant(String),

    #[error("Decoding Error: {0}")]
    Decoding(String),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}

impl WalletError {
    /// Shorthand used by the path builder and generators.
    pub(crate) fn parameter(name: &str, reason: impl std::fmt::Display) -> Self {
        WalletError::InvalidParameter(format!("{}: {}", name, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_message_names_argument() {
        let err = WalletError::parameter("num_addresses", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: num_addresses: must be at least 1"
        );
    }

    #[test]
    fn test_crypto_error_converts() {
        let err: WalletError = CryptoError::InvalidKeyFormat("bad point".into()).into();
        assert!(matches!(err, WalletError::Crypto(_)));
    }
}
