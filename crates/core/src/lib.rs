//! Core domain types, JSON-Cadence values, and canonical event identity.

pub mod account;
pub mod block;
pub mod encoding;
pub mod event;
pub mod identifier;
pub mod transaction;
pub mod value;

pub use account::{Account, AccountKey};
pub use block::BlockHeader;
pub use event::{
    AccountCreatedEvent, AccountEventError, Event, EventBuilder, EventId, EVENT_ACCOUNT_CREATED,
    EVENT_ACCOUNT_UPDATED,
};
pub use identifier::{Address, Identifier, ParseError, ADDRESS_LEN, IDENTIFIER_LEN};
pub use transaction::{ProposalKey, Transaction, TransactionSignature};
pub use value::{Composite, Field, Value};
