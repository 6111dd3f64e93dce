use serde::Serialize;

use crate::Identifier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BlockHeader {
    pub id: Identifier,
    pub parent_id: Identifier,
    pub height: u64,
}
