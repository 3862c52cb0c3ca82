//! Error types for the connector and the relay.
//!
//! Neither error ever leaves its module boundary: the connector turns them into
//! log lines and the relay turns them into 500 responses.

use thiserror::Error;

/// Failures while opening the document-database connection.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Neither `DB_URI` nor `MONGO_URI` is set.
    #[error("no connection URI configured (set DB_URI)")]
    MissingUri,

    /// The connection string could not be parsed into driver options.
    #[error("invalid connection URI: {0}")]
    InvalidUri(#[source] mongodb::error::Error),

    /// The driver could not reach a server.
    #[error("database unreachable: {0}")]
    Unreachable(#[source] mongodb::error::Error),
}

/// Failures while relaying the trigger to the target endpoint.
#[derive(Debug, Error)]
pub enum RelayError {
    /// `TARGET_ENDPOINT_URL` is not set.
    #[error("Environment variable TARGET_ENDPOINT_URL is not configured.")]
    MissingTarget,

    /// The outbound HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection, timeout, or body-read failure on the outbound GET.
    #[error("{}", error_chain(.0))]
    Transport(#[from] reqwest::Error),
}

/// Renders an error and all of its sources as `outer: inner: root`.
///
/// reqwest's top-level message ("error sending request for url ...") hides the
/// actual cause (refused, DNS, timeout) one or two levels down.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}
