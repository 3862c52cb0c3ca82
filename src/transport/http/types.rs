use crate::app::RelayService;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
}

impl AppState {
    pub fn new(relay: RelayService) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Documented shape of the relay's reply (the `body` of the envelope, decoded).
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RelayBody {
    pub message: String,
    /// Present on success: the URL that was called.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Present on success: the upstream HTTP status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}
