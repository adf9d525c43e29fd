//! Unwrapping of the EventBridge envelope around CloudTrail records.

use serde_json::Value;
use tracing::info;

/// Envelope field EventBridge stores the CloudTrail record under.
pub const DETAIL_FIELD: &str = "detail";

/// Returns the audit event carried by `payload`.
///
/// Events routed through EventBridge carry the CloudTrail record in `detail`;
/// direct invocations pass the record itself. Anything without the envelope
/// field, including non-object payloads, is returned unchanged.
#[must_use]
pub fn extract_audit_event(payload: &Value) -> &Value {
    match payload.get(DETAIL_FIELD) {
        Some(detail) => {
            let source = payload.get("source").and_then(Value::as_str);
            let detail_type = payload.get("detail-type").and_then(Value::as_str);
            let event_id = payload.get("id").and_then(Value::as_str);
            info!(source, detail_type, event_id, "Unwrapped EventBridge envelope");
            detail
        }
        None => payload,
    }
}
