//! Extension-host message acknowledgement.
//!
//! # Responsibility
//! - Answer the background listener's generic status ping.
//!
//! # Invariants
//! - Every received message is acknowledged with `status = "ok"`; there is
//!   no further behavioral contract.
//! - Only message metadata is logged, never message content.

use log::info;
use serde::Serialize;
use serde_json::Value;

/// Acknowledgement returned for any host message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostAck {
    pub status: &'static str,
}

/// Acknowledges a message from the extension host.
pub fn acknowledge(message: &Value) -> HostAck {
    info!(
        "event=host_message module=host status=ok kind={}",
        value_kind(message)
    );
    HostAck { status: "ok" }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::acknowledge;
    use serde_json::json;

    #[test]
    fn any_message_is_acknowledged_with_ok() {
        assert_eq!(acknowledge(&json!({"ping": true})).status, "ok");
        assert_eq!(acknowledge(&json!(null)).status, "ok");
        assert_eq!(acknowledge(&json!([1, 2, 3])).status, "ok");
    }

    #[test]
    fn ack_serializes_to_status_envelope() {
        let ack = acknowledge(&json!("ping"));
        let wire = serde_json::to_value(ack).unwrap();
        assert_eq!(wire, json!({"status": "ok"}));
    }
}
