use crate::transport::http::handlers::{health, webhook};
use crate::transport::http::types::{ApiResponse, RelayBody};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(health::healthcheck_handler, webhook::webhook_handler),
    components(schemas(ApiResponse, RelayBody))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/webhook", post(webhook::webhook_handler))
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
