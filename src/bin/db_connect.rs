// src/bin/db_connect.rs
//
// Process-start hook: opens the document-database connection once and logs the outcome.
// Exits 0 whether or not the database is reachable; see `--strict` for a probe that fails.

use trigger_relay::infra::{config, telemetry};
use trigger_relay::ConnectorConfig;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin db_connect -- [--strict]\n\
         \n\
         Requires env vars:\n\
           DB_URI (or MONGO_URI)\n\
         Optional:\n\
           DB_APP_NAME, DB_SERVER_SELECTION_TIMEOUT_MS\n\
         \n\
         --strict  exit non-zero when the connection fails\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    telemetry::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let strict = args.iter().any(|a| a == "--strict");

    let cfg = ConnectorConfig::from_env();
    if strict {
        trigger_relay::try_connect(&cfg).await?;
        tracing::info!("MongoDB connected successfully");
        return Ok(());
    }

    trigger_relay::database_connection_with(&cfg).await;
    Ok(())
}
