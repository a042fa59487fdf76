//! Error handling for the blockchain
//!
//! All failures are local, synchronous caller-input errors; none are
//! transient, so there is no retry machinery anywhere in the crate.

use std::fmt;

/// Result type alias for blockchain operations
pub type Result<T> = std::result::Result<T, BlockchainError>;

/// Error types for chain and wallet operations
#[derive(Debug, Clone)]
pub enum BlockchainError {
    /// Transaction value is not coercible to a decimal number
    InvalidAmount(String),
    /// Key material has the wrong length or is not valid hex
    MalformedKey(String),
    /// Key bytes decoded but do not form a usable private key
    InvalidKey(String),
    /// Signature bytes could not be decoded
    InvalidSignatureEncoding(String),
    /// The system random source failed during key generation (fatal)
    RandomSource(String),
    /// Cryptographic or system-clock errors
    Crypto(String),
    /// Canonical encoding / serialization errors
    Serialization(String),
    /// Configuration errors
    Config(String),
}

impl fmt::Display for BlockchainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockchainError::InvalidAmount(msg) => write!(f, "Invalid amount: {msg}"),
            BlockchainError::MalformedKey(msg) => write!(f, "Malformed key: {msg}"),
            BlockchainError::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            BlockchainError::InvalidSignatureEncoding(msg) => {
                write!(f, "Invalid signature encoding: {msg}")
            }
            BlockchainError::RandomSource(msg) => write!(f, "Random source failure: {msg}"),
            BlockchainError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            BlockchainError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            BlockchainError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for BlockchainError {}

impl From<serde_json::Error> for BlockchainError {
    fn from(err: serde_json::Error) -> Self {
        BlockchainError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = BlockchainError::InvalidAmount("abc".to_string());
        assert_eq!(err.to_string(), "Invalid amount: abc");

        let err = BlockchainError::MalformedKey("expected 65 bytes".to_string());
        assert!(err.to_string().contains("expected 65 bytes"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BlockchainError = json_err.into();
        assert!(matches!(err, BlockchainError::Serialization(_)));
    }
}
