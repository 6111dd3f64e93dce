//! Algorithm tags, hashing, and public key codecs shared across flowlink.

mod algorithm;
mod error;
pub mod hash;
mod public_key;

pub use algorithm::{HashingAlgorithm, SigningAlgorithm};
pub use error::CryptoError;
pub use hash::{Hash, DEFAULT_HASHER};
pub use public_key::PublicKey;
