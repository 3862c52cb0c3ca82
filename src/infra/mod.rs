pub mod config;
pub mod mongo;
pub mod telemetry;
