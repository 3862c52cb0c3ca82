//! The webhook relay.
//!
//! On every trigger the relay issues one `GET` to the configured target endpoint and
//! wraps the outcome in a `{statusCode, body}` envelope. The trigger payload itself is
//! never inspected. Nothing is retried: a transport failure is reported as a 500.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info};

use crate::error::RelayError;
use crate::infra::config::RelayConfig;

pub const SUCCESS_MESSAGE: &str = "GET request completed successfully!";
pub const FAILURE_PREFIX: &str = "GET request failed: ";

/// Serverless-style response envelope. `body` is itself a JSON document, serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub status_code: u16,
    pub body: String,
}

impl RelayResponse {
    /// 200 carrying the target URL and the upstream status.
    pub fn ok(target: &str, upstream_status: u16) -> Self {
        Self::with_body(
            StatusCode::OK,
            json!({
                "message": SUCCESS_MESSAGE,
                "target": target,
                "status": upstream_status,
            }),
        )
    }

    /// 500 carrying a human-readable message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": message.into() }),
        )
    }

    fn with_body(status: StatusCode, body: JsonValue) -> Self {
        Self {
            status_code: status.as_u16(),
            body: body.to_string(),
        }
    }

    /// Parses `body` back into JSON.
    pub fn body_json(&self) -> serde_json::Result<JsonValue> {
        serde_json::from_str(&self.body)
    }

    pub fn is_success(&self) -> bool {
        self.status_code == StatusCode::OK.as_u16()
    }
}

impl From<&RelayError> for RelayResponse {
    fn from(err: &RelayError) -> Self {
        match err {
            RelayError::MissingTarget => RelayResponse::error(err.to_string()),
            RelayError::ClientBuild(_) | RelayError::Transport(_) => {
                RelayResponse::error(format!("{FAILURE_PREFIX}{err}"))
            }
        }
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// Outcome of a successful upstream call.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

/// Relays triggers to the configured target endpoint.
#[derive(Debug, Clone)]
pub struct RelayService {
    client: reqwest::Client,
    config: RelayConfig,
}

impl RelayService {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(RelayError::ClientBuild)?;

        Ok(Self { client, config })
    }

    pub fn target(&self) -> Option<&str> {
        self.config.target_endpoint_url.as_deref()
    }

    /// Handles one trigger. `event` is accepted for the host's sake and otherwise ignored.
    pub async fn handle(&self, _event: &JsonValue) -> RelayResponse {
        let Some(target) = self.target() else {
            error!("TARGET_ENDPOINT_URL is not set; refusing to relay");
            return RelayResponse::from(&RelayError::MissingTarget);
        };

        info!(url = %target, "Received trigger, calling GET");

        match self.call(target).await {
            Ok(reply) => {
                info!(url = %target, status = reply.status, "GET call succeeded");
                debug!(body = %reply.body, "Upstream response");
                RelayResponse::ok(target, reply.status)
            }
            Err(e) => {
                error!(url = %target, error = %e, "GET call failed");
                RelayResponse::from(&e)
            }
        }
    }

    /// Issues the `GET` and reads the body as text. Any HTTP status counts as a reply.
    pub async fn call(&self, target: &str) -> Result<UpstreamReply, RelayError> {
        let response = self.client.get(target).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(UpstreamReply { status, body })
    }
}

/// One-shot entry point: config from the environment, then [`RelayService::handle`].
pub async fn handler(event: &JsonValue) -> RelayResponse {
    match RelayService::new(RelayConfig::from_env()) {
        Ok(service) => service.handle(event).await,
        Err(e) => {
            error!(error = %e, "could not build relay client");
            RelayResponse::from(&e)
        }
    }
}
