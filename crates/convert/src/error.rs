use flowlink_core::value::CodecError;
use flowlink_crypto::CryptoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("protobuf message is empty")]
    EmptyMessage,
    #[error("protobuf message is missing required field `{0}`")]
    MissingField(&'static str),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error("account key {index}")]
    AccountKey {
        index: usize,
        #[source]
        source: Box<ConvertError>,
    },
    #[error("failed to decode event payload")]
    PayloadDecode(#[source] CodecError),
    #[error("failed to encode event payload")]
    PayloadEncode(#[source] CodecError),
    #[error("expected Event value, got {0}")]
    UnexpectedValue(&'static str),
    #[error("{field} value {value} does not fit in {target}")]
    OutOfRange {
        field: &'static str,
        value: i128,
        target: &'static str,
    },
    #[error("public key is {actual} but key declares {declared}")]
    AlgorithmMismatch {
        declared: flowlink_crypto::SigningAlgorithm,
        actual: flowlink_crypto::SigningAlgorithm,
    },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn wrapped_errors_are_reported_once_in_the_chain() {
        let err = ConvertError::AccountKey {
            index: 2,
            source: Box::new(ConvertError::Crypto(CryptoError::UnsupportedSigningAlgorithm(9))),
        };
        assert_eq!(err.to_string(), "account key 2");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("unsupported signing algorithm tag 9")
        );

        let chain: Vec<String> = std::iter::successors(Some(&err as &dyn std::error::Error), |&e| e.source())
            .map(ToString::to_string)
            .collect();
        assert_eq!(chain, ["account key 2", "unsupported signing algorithm tag 9"]);
    }
}
