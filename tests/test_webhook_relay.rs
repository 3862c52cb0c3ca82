//! End-to-end relay test:
//! 1) Stand up a fake target endpoint (wiremock).
//! 2) Start the axum router on an ephemeral port.
//! 3) Fire webhooks at `/webhook` and check the relayed status + JSON body.

use serde_json::{json, Value};
use std::time::Duration;
use trigger_relay::{transport, RelayConfig, RelayService};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

async fn spawn_relay(config: RelayConfig) -> Result<String, Box<dyn std::error::Error>> {
    let relay = RelayService::new(config)?;
    let router = transport::http::create_router(transport::http::AppState::new(relay));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://{}", addr))
}

fn relay_config(target: Option<String>) -> RelayConfig {
    RelayConfig {
        target_endpoint_url: target,
        timeout: Duration::from_secs(2),
        user_agent: "trigger-relay-it".to_string(),
    }
}

#[tokio::test]
async fn test_webhook_calls_target() -> Result<(), Box<dyn std::error::Error>> {
    let target = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/hooks/redeploy"))
        .and(matchers::header("user-agent", "trigger-relay-it"))
        .respond_with(ResponseTemplate::new(200).set_body_string("redeploy scheduled"))
        .expect(1)
        .mount(&target)
        .await;

    let target_url = format!("{}/hooks/redeploy", target.uri());
    let base = spawn_relay(relay_config(Some(target_url.clone()))).await?;

    // Docker Hub style push payload; the relay ignores it.
    let resp = reqwest::Client::new()
        .post(format!("{}/webhook", base))
        .json(&json!({
            "push_data": { "tag": "latest", "pusher": "ci" },
            "repository": { "repo_name": "acme/api" }
        }))
        .send()
        .await?;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "GET request completed successfully!");
    assert_eq!(body["target"], target_url.as_str());
    assert_eq!(body["status"], 200);
    Ok(())
}

#[tokio::test]
async fn test_webhook_without_target_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_relay(relay_config(None)).await?;

    let resp = reqwest::Client::new()
        .post(format!("{}/webhook", base))
        .body("not json at all")
        .send()
        .await?;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = resp.json().await?;
    assert_eq!(
        body,
        json!({ "message": "Environment variable TARGET_ENDPOINT_URL is not configured." })
    );
    Ok(())
}

#[tokio::test]
async fn test_webhook_unreachable_target_is_500() -> Result<(), Box<dyn std::error::Error>> {
    // Bind then drop to get a port nothing listens on.
    let dead = std::net::TcpListener::bind("127.0.0.1:0")?;
    let dead_addr = dead.local_addr()?;
    drop(dead);

    let base = spawn_relay(relay_config(Some(format!("http://{}/", dead_addr)))).await?;

    let resp = reqwest::Client::new()
        .post(format!("{}/webhook", base))
        .send()
        .await?;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = resp.json().await?;
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.starts_with("GET request failed: "), "{message}");
    let reason = message.to_lowercase();
    assert!(reason.contains("connect") || reason.contains("refused"), "{message}");
    assert!(body.get("target").is_none());
    Ok(())
}

#[tokio::test]
async fn test_health_reports_target() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_relay(RelayConfig::with_target("http://example.invalid/")).await?;

    let body: Value = reqwest::get(format!("{}/health", base)).await?.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["target_configured"], true);

    let spec: Value = reqwest::get(format!("{}/api-docs/openapi.json", base))
        .await?
        .json()
        .await?;
    assert!(spec["paths"]["/webhook"]["post"].is_object());
    Ok(())
}
