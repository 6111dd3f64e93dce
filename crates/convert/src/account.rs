use flowlink_core::{Account, AccountKey, Address};
use flowlink_crypto::{HashingAlgorithm, PublicKey, SigningAlgorithm};
use flowlink_protobuf::entities;
use tracing::debug;

use crate::{ConvertError, ConvertResult};

pub fn message_to_account(m: Option<&entities::Account>) -> ConvertResult<Account> {
    let m = m.ok_or(ConvertError::EmptyMessage)?;

    let keys = m
        .keys
        .iter()
        .enumerate()
        .map(|(index, key)| {
            message_to_account_key(Some(key)).map_err(|err| account_key_error(index, err))
        })
        .collect::<ConvertResult<Vec<_>>>()?;

    Ok(Account {
        address: Address::from_slice(&m.address),
        balance: m.balance,
        code: m.code.clone(),
        keys,
    })
}

pub fn account_to_message(a: &Account) -> ConvertResult<entities::Account> {
    let keys = a
        .keys
        .iter()
        .enumerate()
        .map(|(index, key)| account_key_to_message(key).map_err(|err| account_key_error(index, err)))
        .collect::<ConvertResult<Vec<_>>>()?;

    Ok(entities::Account {
        address: a.address.to_vec(),
        balance: a.balance,
        code: a.code.clone(),
        keys,
    })
}

pub fn message_to_account_key(m: Option<&entities::AccountPublicKey>) -> ConvertResult<AccountKey> {
    let m = m.ok_or(ConvertError::EmptyMessage)?;

    let sign_algo = SigningAlgorithm::try_from(m.sign_algo)?;
    let hash_algo = HashingAlgorithm::try_from(m.hash_algo)?;
    let public_key = PublicKey::decode(sign_algo, &m.public_key)?;
    let weight = i32::try_from(m.weight).map_err(|_| ConvertError::OutOfRange {
        field: "weight",
        value: m.weight.into(),
        target: "i32",
    })?;

    Ok(AccountKey {
        public_key,
        sign_algo,
        hash_algo,
        weight,
    })
}

pub fn account_key_to_message(k: &AccountKey) -> ConvertResult<entities::AccountPublicKey> {
    let actual = k.public_key.algorithm();
    if actual != k.sign_algo {
        return Err(ConvertError::AlgorithmMismatch {
            declared: k.sign_algo,
            actual,
        });
    }

    let weight = u32::try_from(k.weight).map_err(|_| ConvertError::OutOfRange {
        field: "weight",
        value: k.weight.into(),
        target: "u32",
    })?;

    Ok(entities::AccountPublicKey {
        public_key: k.public_key.encode(),
        sign_algo: k.sign_algo.into(),
        hash_algo: k.hash_algo.into(),
        weight,
    })
}

fn account_key_error(index: usize, err: ConvertError) -> ConvertError {
    debug!(index, error = %err, "rejecting account key");
    ConvertError::AccountKey {
        index,
        source: Box::new(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowlink_crypto::CryptoError;

    fn p256_key(seed: u8, weight: i32) -> AccountKey {
        let secret = p256::SecretKey::from_slice(&[seed; 32]).expect("valid secret");
        AccountKey::new(secret.public_key().into(), HashingAlgorithm::Sha3_256, weight)
    }

    #[test]
    fn empty_messages_are_rejected() {
        assert!(matches!(
            message_to_account(None),
            Err(ConvertError::EmptyMessage)
        ));
        assert!(matches!(
            message_to_account_key(None),
            Err(ConvertError::EmptyMessage)
        ));
    }

    #[test]
    fn account_key_round_trip() {
        let key = p256_key(1, 1000);
        let message = account_key_to_message(&key).unwrap();
        assert_eq!(message.sign_algo, 2);
        assert_eq!(message.hash_algo, 3);
        assert_eq!(message.weight, 1000);
        assert_eq!(message_to_account_key(Some(&message)).unwrap(), key);
    }

    #[test]
    fn weight_above_i32_is_out_of_range() {
        let mut message = account_key_to_message(&p256_key(2, 1)).unwrap();
        message.weight = i32::MAX as u32;
        assert_eq!(
            message_to_account_key(Some(&message)).unwrap().weight,
            i32::MAX
        );

        message.weight = i32::MAX as u32 + 1;
        let err = message_to_account_key(Some(&message)).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::OutOfRange {
                field: "weight",
                target: "i32",
                ..
            }
        ));
    }

    #[test]
    fn negative_weight_cannot_be_encoded() {
        let err = account_key_to_message(&p256_key(3, -1)).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::OutOfRange { value: -1, .. }
        ));
    }

    #[test]
    fn declared_algorithm_must_match_key() {
        let mut key = p256_key(4, 1);
        key.sign_algo = SigningAlgorithm::EcdsaSecp256k1;
        assert!(matches!(
            account_key_to_message(&key),
            Err(ConvertError::AlgorithmMismatch {
                declared: SigningAlgorithm::EcdsaSecp256k1,
                actual: SigningAlgorithm::EcdsaP256,
            })
        ));
    }

    #[test]
    fn unknown_algorithm_tags_fail_to_decode() {
        let mut message = account_key_to_message(&p256_key(5, 1)).unwrap();
        message.hash_algo = 99;
        assert!(matches!(
            message_to_account_key(Some(&message)),
            Err(ConvertError::Crypto(CryptoError::UnsupportedHashingAlgorithm(99)))
        ));

        message.hash_algo = 3;
        message.sign_algo = 1;
        assert!(matches!(
            message_to_account_key(Some(&message)),
            Err(ConvertError::Crypto(CryptoError::UnsupportedSigningAlgorithm(1)))
        ));
    }

    #[test]
    fn key_bytes_must_match_declared_algorithm() {
        let mut message = account_key_to_message(&p256_key(6, 1)).unwrap();
        message.sign_algo = SigningAlgorithm::EcdsaSecp256k1.into();
        assert!(matches!(
            message_to_account_key(Some(&message)),
            Err(ConvertError::Crypto(CryptoError::InvalidPublicKey { .. }))
        ));

        message.public_key.pop();
        assert!(matches!(
            message_to_account_key(Some(&message)),
            Err(ConvertError::Crypto(CryptoError::InvalidKeyLength {
                expected: 64,
                actual: 63,
                ..
            }))
        ));
    }
}
