use flowlink_core::{Address, Identifier, ProposalKey, Transaction, TransactionSignature};
use flowlink_protobuf::entities::{self, transaction};

use crate::{ConvertError, ConvertResult};

pub fn message_to_transaction(m: Option<&entities::Transaction>) -> ConvertResult<Transaction> {
    let m = m.ok_or(ConvertError::EmptyMessage)?;
    let proposal_key = m
        .proposal_key
        .as_ref()
        .ok_or(ConvertError::MissingField("proposal_key"))?;

    Ok(Transaction {
        script: m.script.clone(),
        arguments: m.arguments.clone(),
        reference_block_id: Identifier::from_slice(&m.reference_block_id),
        gas_limit: m.gas_limit,
        proposal_key: ProposalKey {
            address: Address::from_slice(&proposal_key.address),
            key_index: proposal_key.key_id,
            sequence_number: proposal_key.sequence_number,
        },
        payer: Address::from_slice(&m.payer),
        authorizers: m
            .authorizers
            .iter()
            .map(|address| Address::from_slice(address))
            .collect(),
        payload_signatures: m.payload_signatures.iter().map(message_to_signature).collect(),
        envelope_signatures: m.envelope_signatures.iter().map(message_to_signature).collect(),
    })
}

pub fn transaction_to_message(t: &Transaction) -> entities::Transaction {
    entities::Transaction {
        script: t.script.clone(),
        arguments: t.arguments.clone(),
        reference_block_id: t.reference_block_id.to_vec(),
        gas_limit: t.gas_limit,
        proposal_key: Some(transaction::ProposalKey {
            address: t.proposal_key.address.to_vec(),
            key_id: t.proposal_key.key_index,
            sequence_number: t.proposal_key.sequence_number,
        }),
        payer: t.payer.to_vec(),
        authorizers: t.authorizers.iter().map(Address::to_vec).collect(),
        payload_signatures: t.payload_signatures.iter().map(signature_to_message).collect(),
        envelope_signatures: t.envelope_signatures.iter().map(signature_to_message).collect(),
    }
}

fn message_to_signature(m: &transaction::Signature) -> TransactionSignature {
    TransactionSignature {
        address: Address::from_slice(&m.address),
        key_index: m.key_id,
        signature: m.signature.clone(),
    }
}

fn signature_to_message(s: &TransactionSignature) -> transaction::Signature {
    transaction::Signature {
        address: s.address.to_vec(),
        key_id: s.key_index,
        signature: s.signature.clone(),
    }
}
