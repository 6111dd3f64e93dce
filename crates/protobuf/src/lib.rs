//! Wire messages exchanged with access nodes.

pub mod entities;

pub use prost::Message;
