pub mod app;
pub mod error;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{handler, RelayResponse, RelayService};
pub use error::{ConnectError, RelayError};
pub use infra::config::{ConnectorConfig, RelayConfig, ServerConfig};
pub use infra::mongo::{database_connection, database_connection_with, try_connect};
