//! JSON-Cadence encoding of [`Value`].

use thiserror::Error;

use super::Value;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed JSON-Cadence value")]
    Json(#[from] serde_json::Error),
    #[error("invalid UFix64 literal `{0}`")]
    InvalidFixedPoint(String),
}

pub fn decode(bytes: &[u8]) -> Result<Value, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode(value: &Value) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(value)?)
}
