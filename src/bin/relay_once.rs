// src/bin/relay_once.rs
//
// Serverless-style invocation: reads the trigger event from stdin (optional), runs the
// relay once, and prints the `{statusCode, body}` envelope to stdout.

use std::io::{IsTerminal, Read};

use trigger_relay::infra::{config, telemetry};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: echo '<event json>' | cargo run --bin relay_once\n\
         \n\
         Requires env vars:\n\
           TARGET_ENDPOINT_URL\n\
         Optional:\n\
           RELAY_TIMEOUT_SECS (default 30), RUST_LOG\n"
    );
    std::process::exit(2);
}

fn read_event() -> anyhow::Result<serde_json::Value> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(serde_json::Value::Null);
    }
    let mut raw = String::new();
    stdin.lock().read_to_string(&mut raw)?;
    // The payload is never inspected; garbage is as good as nothing.
    Ok(serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    telemetry::init_tracing();

    if std::env::args().skip(1).any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let event = read_event()?;
    let response = trigger_relay::handler(&event).await;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
