use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{
    encoding::{canonical_bytes, canonical_hash},
    value::{Composite, Field, Value},
    Address, Identifier,
};

/// Public alias representing canonical event identifiers.
pub type EventId = String;

pub const EVENT_ACCOUNT_CREATED: &str = "flow.AccountCreated";
pub const EVENT_ACCOUNT_UPDATED: &str = "flow.AccountUpdated";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountEventError {
    #[error("expected event type {expected}, got {actual}")]
    WrongType {
        expected: &'static str,
        actual: String,
    },
    #[error("account event has no fields")]
    MissingAddress,
    #[error("expected Address as first event field, got {0}")]
    UnexpectedField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Qualified event type.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Transaction the event was emitted from.
    pub transaction_id: Identifier,
    /// Position in the transaction's emitted events, starting at 0.
    pub index: usize,
    pub value: Composite,
}

/// Fields that make an event occurrence unique.
#[derive(Serialize)]
struct IdentityRecord<'a> {
    transaction_id: &'a [u8],
    index: u64,
}

impl Event {
    /// Canonical encoding of the identity fields. Type and payload are not
    /// part of an event's identity.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        canonical_bytes(&self.identity_record())
    }

    /// Stable hex identifier derived from the transaction ID and index.
    pub fn id(&self) -> EventId {
        canonical_hash(&self.identity_record()).hex()
    }

    fn identity_record(&self) -> IdentityRecord<'_> {
        IdentityRecord {
            transaction_id: self.transaction_id.as_bytes(),
            index: self.index as u64,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.event_type, self.id())
    }
}

pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(event_type: impl Into<String>, transaction_id: Identifier) -> Self {
        let event_type = event_type.into();
        let event = Event {
            value: Composite::new(event_type.clone(), Vec::new()),
            event_type,
            transaction_id,
            index: 0,
        };

        Self { event }
    }

    pub fn index(mut self, index: usize) -> Self {
        self.event.index = index;
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.event.value.fields.push(Field::new(name, value));
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// An `flow.AccountCreated` event whose first field is the new address.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountCreatedEvent(Event);

impl AccountCreatedEvent {
    pub fn address(&self) -> Result<Address, AccountEventError> {
        match self.0.value.fields.first() {
            Some(Field {
                value: Value::Address(address),
                ..
            }) => Ok(*address),
            Some(field) => Err(AccountEventError::UnexpectedField(field.value.kind())),
            None => Err(AccountEventError::MissingAddress),
        }
    }

    pub fn event(&self) -> &Event {
        &self.0
    }
}

impl TryFrom<Event> for AccountCreatedEvent {
    type Error = AccountEventError;

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        if event.event_type != EVENT_ACCOUNT_CREATED {
            return Err(AccountEventError::WrongType {
                expected: EVENT_ACCOUNT_CREATED,
                actual: event.event_type,
            });
        }
        Ok(AccountCreatedEvent(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowlink_crypto::DEFAULT_HASHER;
    use proptest::prelude::*;

    fn tx(byte: u8) -> Identifier {
        Identifier::from_slice(&[byte; 32])
    }

    #[test]
    fn event_id_matches_canonical_hash() {
        let event = EventBuilder::new("A.0000000000000001.Token.Deposit", tx(1))
            .index(2)
            .field("amount", Value::UInt64(10))
            .build();

        let expected = DEFAULT_HASHER.compute_hash(&event.canonical_bytes()).hex();
        assert_eq!(event.id(), expected);
        assert_eq!(event.id().len(), 64);
    }

    #[test]
    fn canonical_bytes_cover_only_transaction_and_index() {
        let event = EventBuilder::new("flow.AccountCreated", tx(7)).index(1).build();
        let bytes = event.canonical_bytes();

        assert_eq!(bytes.len(), 8 + 32 + 8);
        assert_eq!(&bytes[..8], &32u64.to_le_bytes());
        assert_eq!(&bytes[8..40], &[7u8; 32]);
        assert_eq!(&bytes[40..], &1u64.to_le_bytes());
    }

    #[test]
    fn type_and_payload_do_not_affect_identity() {
        let a = EventBuilder::new("flow.AccountCreated", tx(3))
            .field("address", Value::Address(Address::from_slice(&[1])))
            .build();
        let b = EventBuilder::new("flow.AccountUpdated", tx(3))
            .field("address", Value::Address(Address::from_slice(&[2])))
            .build();

        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn display_includes_type_and_id() {
        let event = EventBuilder::new(EVENT_ACCOUNT_UPDATED, tx(4)).build();
        assert_eq!(event.to_string(), format!("flow.AccountUpdated: {}", event.id()));
    }

    #[test]
    fn account_created_exposes_address() {
        let address = Address::from_slice(&[0x01, 0xcf]);
        let event = EventBuilder::new(EVENT_ACCOUNT_CREATED, tx(5))
            .field("address", Value::Address(address))
            .build();

        let created = AccountCreatedEvent::try_from(event).expect("account created event");
        assert_eq!(created.address(), Ok(address));
    }

    #[test]
    fn account_created_rejects_other_shapes() {
        let wrong_type = EventBuilder::new(EVENT_ACCOUNT_UPDATED, tx(6)).build();
        assert!(matches!(
            AccountCreatedEvent::try_from(wrong_type),
            Err(AccountEventError::WrongType { .. })
        ));

        let empty = EventBuilder::new(EVENT_ACCOUNT_CREATED, tx(6)).build();
        let created = AccountCreatedEvent::try_from(empty).unwrap();
        assert_eq!(created.address(), Err(AccountEventError::MissingAddress));

        let not_address = EventBuilder::new(EVENT_ACCOUNT_CREATED, tx(6))
            .field("address", Value::String("0x01".into()))
            .build();
        let created = AccountCreatedEvent::try_from(not_address).unwrap();
        assert_eq!(
            created.address(),
            Err(AccountEventError::UnexpectedField("String"))
        );
    }

    proptest! {
        #[test]
        fn identity_is_a_pure_function(seed in any::<[u8; 32]>(), index in any::<u32>()) {
            let build = || EventBuilder::new("t", Identifier::new(seed)).index(index as usize).build();
            prop_assert_eq!(build().id(), build().id());
        }

        #[test]
        fn distinct_positions_yield_distinct_ids(
            seed in any::<[u8; 32]>(),
            a in any::<u32>(),
            b in any::<u32>(),
        ) {
            prop_assume!(a != b);
            let first = EventBuilder::new("t", Identifier::new(seed)).index(a as usize).build();
            let second = EventBuilder::new("t", Identifier::new(seed)).index(b as usize).build();
            prop_assert_ne!(first.id(), second.id());
        }
    }
}
