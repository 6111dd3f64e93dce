use std::fmt;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Serialize, Serializer};

use crate::{error::CryptoResult, CryptoError, SigningAlgorithm};

const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// A decoded account public key, tagged by its signing algorithm.
#[derive(Clone, PartialEq, Eq)]
pub enum PublicKey {
    EcdsaP256(p256::PublicKey),
    EcdsaSecp256k1(secp256k1::PublicKey),
}

impl PublicKey {
    /// Decodes the raw key bytes stored on chain for `algorithm`.
    ///
    /// Both ECDSA curves store the 64 byte `X || Y` coordinates without the
    /// SEC1 prefix.
    pub fn decode(algorithm: SigningAlgorithm, bytes: &[u8]) -> CryptoResult<Self> {
        let expected = algorithm.public_key_len();
        if bytes.len() != expected {
            return Err(CryptoError::InvalidKeyLength {
                algorithm,
                expected,
                actual: bytes.len(),
            });
        }

        let sec1 = uncompressed_point(bytes);
        let invalid = |reason: String| CryptoError::InvalidPublicKey { algorithm, reason };
        match algorithm {
            SigningAlgorithm::EcdsaP256 => p256::PublicKey::from_sec1_bytes(&sec1)
                .map(PublicKey::EcdsaP256)
                .map_err(|err| invalid(err.to_string())),
            SigningAlgorithm::EcdsaSecp256k1 => secp256k1::PublicKey::from_slice(&sec1)
                .map(PublicKey::EcdsaSecp256k1)
                .map_err(|err| invalid(err.to_string())),
        }
    }

    /// Raw key bytes in the layout accepted by [`PublicKey::decode`].
    pub fn encode(&self) -> Vec<u8> {
        match self {
            PublicKey::EcdsaP256(key) => key.to_encoded_point(false).as_bytes()[1..].to_vec(),
            PublicKey::EcdsaSecp256k1(key) => key.serialize_uncompressed()[1..].to_vec(),
        }
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        match self {
            PublicKey::EcdsaP256(_) => SigningAlgorithm::EcdsaP256,
            PublicKey::EcdsaSecp256k1(_) => SigningAlgorithm::EcdsaSecp256k1,
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.encode())
    }
}

fn uncompressed_point(coordinates: &[u8]) -> Vec<u8> {
    let mut sec1 = Vec::with_capacity(coordinates.len() + 1);
    sec1.push(SEC1_UNCOMPRESSED_TAG);
    sec1.extend_from_slice(coordinates);
    sec1
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}, {})", self.algorithm(), self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl From<p256::PublicKey> for PublicKey {
    fn from(key: p256::PublicKey) -> Self {
        PublicKey::EcdsaP256(key)
    }
}

impl From<secp256k1::PublicKey> for PublicKey {
    fn from(key: secp256k1::PublicKey) -> Self {
        PublicKey::EcdsaSecp256k1(key)
    }
}
