//! Entity messages mirroring `flow/entities/*.proto`.

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockHeader {
    #[prost(bytes = "vec", tag = "1")]
    pub id: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub parent_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub height: u64,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(bytes = "vec", tag = "1")]
    pub address: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub balance: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub code: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "4")]
    pub keys: ::prost::alloc::vec::Vec<AccountPublicKey>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountPublicKey {
    #[prost(bytes = "vec", tag = "1")]
    pub public_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint32, tag = "2")]
    pub sign_algo: u32,
    #[prost(uint32, tag = "3")]
    pub hash_algo: u32,
    #[prost(uint32, tag = "4")]
    pub weight: u32,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Event {
    #[prost(string, tag = "1")]
    pub r#type: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub transaction_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub index: u32,
    /// JSON-Cadence encoded event value.
    #[prost(bytes = "vec", tag = "4")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(bytes = "vec", tag = "1")]
    pub script: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub arguments: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", tag = "3")]
    pub reference_block_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "4")]
    pub gas_limit: u64,
    #[prost(message, optional, tag = "5")]
    pub proposal_key: ::core::option::Option<transaction::ProposalKey>,
    #[prost(bytes = "vec", tag = "6")]
    pub payer: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "7")]
    pub authorizers: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(message, repeated, tag = "8")]
    pub payload_signatures: ::prost::alloc::vec::Vec<transaction::Signature>,
    #[prost(message, repeated, tag = "9")]
    pub envelope_signatures: ::prost::alloc::vec::Vec<transaction::Signature>,
}

/// Nested message types of [`Transaction`].
pub mod transaction {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ProposalKey {
        #[prost(bytes = "vec", tag = "1")]
        pub address: ::prost::alloc::vec::Vec<u8>,
        #[prost(uint32, tag = "2")]
        pub key_id: u32,
        #[prost(uint64, tag = "3")]
        pub sequence_number: u64,
    }

    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Signature {
        #[prost(bytes = "vec", tag = "1")]
        pub address: ::prost::alloc::vec::Vec<u8>,
        #[prost(uint32, tag = "2")]
        pub key_id: u32,
        #[prost(bytes = "vec", tag = "3")]
        pub signature: ::prost::alloc::vec::Vec<u8>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn event_survives_the_wire() {
        let event = Event {
            r#type: "flow.AccountCreated".into(),
            transaction_id: vec![1; 32],
            index: 3,
            payload: br#"{"type":"Void"}"#.to_vec(),
        };

        let bytes = event.encode_to_vec();
        assert_eq!(Event::decode(bytes.as_slice()).unwrap(), event);
    }

    #[test]
    fn missing_proposal_key_decodes_as_none() {
        let tx = Transaction {
            script: b"transaction {}".to_vec(),
            ..Default::default()
        };
        let decoded = Transaction::decode(tx.encode_to_vec().as_slice()).unwrap();
        assert!(decoded.proposal_key.is_none());
    }
}
