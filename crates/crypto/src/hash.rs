//! Digest computation for the supported hashing algorithms.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256, Sha384};
use sha3::{Sha3_256, Sha3_384};

use crate::HashingAlgorithm;

/// Hasher used to derive canonical identifiers.
pub const DEFAULT_HASHER: HashingAlgorithm = HashingAlgorithm::Sha3_256;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Hash(Vec<u8>);

impl Hash {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.hex())
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl HashingAlgorithm {
    pub fn compute_hash(&self, data: &[u8]) -> Hash {
        let digest = match self {
            HashingAlgorithm::Sha2_256 => Sha256::digest(data).to_vec(),
            HashingAlgorithm::Sha2_384 => Sha384::digest(data).to_vec(),
            HashingAlgorithm::Sha3_256 => Sha3_256::digest(data).to_vec(),
            HashingAlgorithm::Sha3_384 => Sha3_384::digest(data).to_vec(),
        };
        Hash(digest)
    }
}
