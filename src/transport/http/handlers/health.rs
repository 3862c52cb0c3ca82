use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (
            status = 200,
            description = "Process is up; reports whether a target endpoint is configured",
            body = ApiResponse
        )
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(serde_json::json!({
                "status": "ok",
                "target_configured": state.relay.target().is_some(),
            })),
            error: None,
        }),
    )
}
