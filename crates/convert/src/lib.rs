//! Conversion between protobuf entity messages and domain values.
//!
//! Every function is pure. A `None` message stands for an absent protobuf
//! field and is rejected with [`ConvertError::EmptyMessage`].

mod account;
mod block;
mod error;
mod event;
mod transaction;

pub use account::{
    account_key_to_message, account_to_message, message_to_account, message_to_account_key,
};
pub use block::{block_header_to_message, message_to_block_header};
pub use error::{ConvertError, ConvertResult};
pub use event::{event_to_message, message_to_event};
pub use transaction::{message_to_transaction, transaction_to_message};
