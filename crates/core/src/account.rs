use flowlink_crypto::{HashingAlgorithm, PublicKey, SigningAlgorithm};
use serde::Serialize;

use crate::{encoding::serialize_base64, Address};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub address: Address,
    pub balance: u64,
    #[serde(serialize_with = "serialize_base64")]
    pub code: Vec<u8>,
    /// A key's position is its index within the account.
    pub keys: Vec<AccountKey>,
}

impl Account {
    pub fn key(&self, index: usize) -> Option<&AccountKey> {
        self.keys.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountKey {
    pub public_key: PublicKey,
    pub sign_algo: SigningAlgorithm,
    pub hash_algo: HashingAlgorithm,
    pub weight: i32,
}

impl AccountKey {
    /// Builds a key whose signing algorithm matches `public_key`.
    pub fn new(public_key: PublicKey, hash_algo: HashingAlgorithm, weight: i32) -> Self {
        Self {
            sign_algo: public_key.algorithm(),
            public_key,
            hash_algo,
            weight,
        }
    }
}
