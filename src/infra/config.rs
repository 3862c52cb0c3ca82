//! Centralized configuration (environment variables + defaults).
//!
//! Every loader has a `from_lookup` twin that takes the variable source as a closure,
//! so tests never have to mutate the process environment.

use std::net::SocketAddr;
use std::time::Duration;

pub const DB_URI: &str = "DB_URI";
pub const MONGO_URI: &str = "MONGO_URI";
pub const DB_APP_NAME: &str = "DB_APP_NAME";
pub const DB_SERVER_SELECTION_TIMEOUT_MS: &str = "DB_SERVER_SELECTION_TIMEOUT_MS";
pub const TARGET_ENDPOINT_URL: &str = "TARGET_ENDPOINT_URL";
pub const RELAY_TIMEOUT_SECS: &str = "RELAY_TIMEOUT_SECS";
pub const RELAY_BIND_ADDR: &str = "RELAY_BIND_ADDR";

const DEFAULT_APP_NAME: &str = "trigger-relay";
const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Loads `.env` into the process environment (missing file is fine).
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Empty and whitespace-only values are treated as unset.
fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_u64_or<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, default, "ignoring unparsable setting");
                default
            }
        },
        None => default,
    }
}

/// Settings for the document-database connector.
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Connection string; `DB_URI` wins over the legacy `MONGO_URI`.
    pub uri: Option<String>,
    /// Driver `appName`, the one option the connector sets on top of the URI.
    pub app_name: String,
    pub server_selection_timeout: Duration,
}

impl ConnectorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let uri = non_empty(&lookup, DB_URI).or_else(|| non_empty(&lookup, MONGO_URI));
        let app_name =
            non_empty(&lookup, DB_APP_NAME).unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let timeout_ms = parse_u64_or(
            &lookup,
            DB_SERVER_SELECTION_TIMEOUT_MS,
            DEFAULT_SERVER_SELECTION_TIMEOUT_MS,
        );

        Self {
            uri,
            app_name,
            server_selection_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

/// Settings for the webhook relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub target_endpoint_url: Option<String>,
    /// Upper bound on the outbound GET, standing in for the host platform's timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            target_endpoint_url: non_empty(&lookup, TARGET_ENDPOINT_URL),
            timeout: Duration::from_secs(parse_u64_or(
                &lookup,
                RELAY_TIMEOUT_SECS,
                DEFAULT_RELAY_TIMEOUT_SECS,
            )),
            user_agent: default_user_agent(),
        }
    }

    /// Config pointing at a fixed target; handy for tests and embedding.
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target_endpoint_url: Some(target.into()),
            ..Self::from_lookup(|_| None)
        }
    }
}

fn default_user_agent() -> String {
    format!("trigger-relay/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for the HTTP host.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = non_empty(&lookup, RELAY_BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw.parse::<SocketAddr>().map_err(|e| {
            anyhow::anyhow!("{} must be a socket address ({}): {}", RELAY_BIND_ADDR, raw, e)
        })?;
        Ok(Self { bind_addr })
    }
}
