//! Canonical encoding used to derive stable identifiers.

use flowlink_crypto::{Hash, DEFAULT_HASHER};
use serde::{Serialize, Serializer};

/// Encodes `record` with fixed-width little-endian integers and
/// length-prefixed sequences. Field order follows the record definition.
///
/// Panics if the record cannot be encoded; callers only pass fixed record
/// shapes made of byte slices and integers.
pub fn canonical_bytes<T: Serialize>(record: &T) -> Vec<u8> {
    bincode::serialize(record).expect("canonical encoding must succeed")
}

/// Hashes the canonical encoding of `record` with the default hasher.
pub fn canonical_hash<T: Serialize>(record: &T) -> Hash {
    DEFAULT_HASHER.compute_hash(&canonical_bytes(record))
}

/// Renders byte fields as standard base64 in JSON output.
pub(crate) fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    use base64::Engine;
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
}

pub(crate) fn serialize_base64_seq<S: Serializer>(
    items: &[Vec<u8>],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use base64::Engine;
    serializer.collect_seq(
        items
            .iter()
            .map(|item| base64::engine::general_purpose::STANDARD.encode(item)),
    )
}
