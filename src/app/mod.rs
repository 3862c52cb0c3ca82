pub mod relay_service;

pub use relay_service::{handler, RelayResponse, RelayService};
