use thiserror::Error;

use crate::SigningAlgorithm;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("unsupported signing algorithm tag {0}")]
    UnsupportedSigningAlgorithm(u32),
    #[error("unsupported hashing algorithm tag {0}")]
    UnsupportedHashingAlgorithm(u32),
    #[error("invalid {algorithm} public key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        algorithm: SigningAlgorithm,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {algorithm} public key: {reason}")]
    InvalidPublicKey {
        algorithm: SigningAlgorithm,
        reason: String,
    },
}

pub type CryptoResult<T> = Result<T, CryptoError>;
