//! Tracing setup shared by every entry point.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,trigger_relay=debug,tower_http=debug";

/// Installs a fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}
