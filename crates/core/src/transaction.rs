use flowlink_crypto::Hash;
use serde::Serialize;

use crate::{
    encoding::{canonical_hash, serialize_base64, serialize_base64_seq},
    Address, Identifier,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(serialize_with = "serialize_base64")]
    pub script: Vec<u8>,
    /// JSON-Cadence encoded script arguments.
    #[serde(serialize_with = "serialize_base64_seq")]
    pub arguments: Vec<Vec<u8>>,
    pub reference_block_id: Identifier,
    pub gas_limit: u64,
    pub proposal_key: ProposalKey,
    pub payer: Address,
    pub authorizers: Vec<Address>,
    pub payload_signatures: Vec<TransactionSignature>,
    pub envelope_signatures: Vec<TransactionSignature>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProposalKey {
    pub address: Address,
    pub key_index: u32,
    pub sequence_number: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionSignature {
    pub address: Address,
    pub key_index: u32,
    #[serde(serialize_with = "serialize_base64")]
    pub signature: Vec<u8>,
}

#[derive(Serialize)]
struct CanonicalTransaction<'a> {
    script: &'a [u8],
    arguments: Vec<&'a [u8]>,
    reference_block_id: &'a [u8],
    gas_limit: u64,
    proposal_key: (&'a [u8], u32, u64),
    payer: &'a [u8],
    authorizers: Vec<&'a [u8]>,
    payload_signatures: Vec<(&'a [u8], u32, &'a [u8])>,
    envelope_signatures: Vec<(&'a [u8], u32, &'a [u8])>,
}

fn canonical_signatures(signatures: &[TransactionSignature]) -> Vec<(&[u8], u32, &[u8])> {
    signatures
        .iter()
        .map(|sig| (sig.address.as_bytes().as_slice(), sig.key_index, sig.signature.as_slice()))
        .collect()
}

impl Transaction {
    /// Hash of the canonical encoding of every transaction field, signatures
    /// included.
    pub fn id(&self) -> Identifier {
        Identifier::from_slice(self.hash().as_bytes())
    }

    fn hash(&self) -> Hash {
        canonical_hash(&CanonicalTransaction {
            script: &self.script,
            arguments: self.arguments.iter().map(Vec::as_slice).collect(),
            reference_block_id: self.reference_block_id.as_bytes(),
            gas_limit: self.gas_limit,
            proposal_key: (
                self.proposal_key.address.as_bytes().as_slice(),
                self.proposal_key.key_index,
                self.proposal_key.sequence_number,
            ),
            payer: self.payer.as_bytes(),
            authorizers: self
                .authorizers
                .iter()
                .map(|address| address.as_bytes().as_slice())
                .collect(),
            payload_signatures: canonical_signatures(&self.payload_signatures),
            envelope_signatures: canonical_signatures(&self.envelope_signatures),
        })
    }
}
