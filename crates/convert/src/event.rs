use flowlink_core::{value::json, Event, Identifier, Value};
use flowlink_protobuf::entities;
use tracing::debug;

use crate::{ConvertError, ConvertResult};

pub fn message_to_event(m: Option<&entities::Event>) -> ConvertResult<Event> {
    let m = m.ok_or(ConvertError::EmptyMessage)?;

    let value = json::decode(&m.payload).map_err(|err| {
        debug!(event_type = %m.r#type, error = %err, "event payload failed to decode");
        ConvertError::PayloadDecode(err)
    })?;
    let value = value
        .into_event()
        .map_err(|other| ConvertError::UnexpectedValue(other.kind()))?;

    Ok(Event {
        event_type: m.r#type.clone(),
        transaction_id: Identifier::from_slice(&m.transaction_id),
        index: m.index as usize,
        value,
    })
}

pub fn event_to_message(e: &Event) -> ConvertResult<entities::Event> {
    let index = u32::try_from(e.index).map_err(|_| ConvertError::OutOfRange {
        field: "index",
        value: e.index as i128,
        target: "u32",
    })?;
    let payload =
        json::encode(&Value::Event(e.value.clone())).map_err(ConvertError::PayloadEncode)?;

    Ok(entities::Event {
        r#type: e.event_type.clone(),
        transaction_id: e.transaction_id.to_vec(),
        index,
        payload,
    })
}
