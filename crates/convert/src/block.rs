use flowlink_core::{BlockHeader, Identifier};
use flowlink_protobuf::entities;

pub fn message_to_block_header(m: &entities::BlockHeader) -> BlockHeader {
    BlockHeader {
        id: Identifier::from_slice(&m.id),
        parent_id: Identifier::from_slice(&m.parent_id),
        height: m.height,
    }
}

pub fn block_header_to_message(b: &BlockHeader) -> entities::BlockHeader {
    entities::BlockHeader {
        id: b.id.to_vec(),
        parent_id: b.parent_id.to_vec(),
        height: b.height,
    }
}
