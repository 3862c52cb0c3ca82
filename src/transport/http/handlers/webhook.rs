use crate::app::RelayResponse;
use crate::transport::http::types::{AppState, RelayBody};
use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value as JsonValue;

/// Any body is accepted; anything that isn't JSON is relayed as `null`.
fn event_from_body(body: &[u8]) -> JsonValue {
    serde_json::from_slice(body).unwrap_or(JsonValue::Null)
}

#[utoipa::path(
    post,
    path = "/webhook",
    request_body(
        content = String,
        description = "Webhook payload (accepted, not inspected)",
        content_type = "application/json"
    ),
    responses(
        (
            status = 200,
            description = "Target endpoint was called; `status` carries its HTTP status",
            body = RelayBody
        ),
        (status = 500, description = "Target not configured or the GET failed", body = RelayBody)
    )
)]
pub async fn webhook_handler(State(state): State<AppState>, body: Bytes) -> RelayResponse {
    let event = event_from_body(&body);
    state.relay.handle(&event).await
}
