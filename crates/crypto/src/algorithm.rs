use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CryptoError;

/// Signing algorithm tag carried next to every account public key.
///
/// Tag 1 is BLS over BLS12-381, which has no key codec here and is rejected
/// like any other unknown tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum SigningAlgorithm {
    EcdsaP256 = 2,
    EcdsaSecp256k1 = 3,
}

impl SigningAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::EcdsaP256 => "ECDSA_P256",
            SigningAlgorithm::EcdsaSecp256k1 => "ECDSA_secp256k1",
        }
    }

    /// Length of the raw public key encoding for this algorithm.
    pub fn public_key_len(&self) -> usize {
        match self {
            SigningAlgorithm::EcdsaP256 | SigningAlgorithm::EcdsaSecp256k1 => 64,
        }
    }
}

impl From<SigningAlgorithm> for u32 {
    fn from(algo: SigningAlgorithm) -> Self {
        algo as u32
    }
}

impl TryFrom<u32> for SigningAlgorithm {
    type Error = CryptoError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            2 => Ok(SigningAlgorithm::EcdsaP256),
            3 => Ok(SigningAlgorithm::EcdsaSecp256k1),
            other => Err(CryptoError::UnsupportedSigningAlgorithm(other)),
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hashing algorithm tag carried next to every account public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum HashingAlgorithm {
    Sha2_256 = 1,
    Sha2_384 = 2,
    Sha3_256 = 3,
    Sha3_384 = 4,
}

impl HashingAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashingAlgorithm::Sha2_256 => "SHA2_256",
            HashingAlgorithm::Sha2_384 => "SHA2_384",
            HashingAlgorithm::Sha3_256 => "SHA3_256",
            HashingAlgorithm::Sha3_384 => "SHA3_384",
        }
    }

    pub fn digest_len(&self) -> usize {
        match self {
            HashingAlgorithm::Sha2_256 | HashingAlgorithm::Sha3_256 => 32,
            HashingAlgorithm::Sha2_384 | HashingAlgorithm::Sha3_384 => 48,
        }
    }
}

impl From<HashingAlgorithm> for u32 {
    fn from(algo: HashingAlgorithm) -> Self {
        algo as u32
    }
}

impl TryFrom<u32> for HashingAlgorithm {
    type Error = CryptoError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(HashingAlgorithm::Sha2_256),
            2 => Ok(HashingAlgorithm::Sha2_384),
            3 => Ok(HashingAlgorithm::Sha3_256),
            4 => Ok(HashingAlgorithm::Sha3_384),
            other => Err(CryptoError::UnsupportedHashingAlgorithm(other)),
        }
    }
}

impl fmt::Display for HashingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
