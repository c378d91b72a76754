pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod query;
pub mod server;
pub mod signals;
pub mod store;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `level`. `format` selects the JSON
/// formatter when it is "json", the plain formatter otherwise.
///
/// Note: This function can only be called once per process.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let json = format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_target(true)))
        .with((!json).then(|| fmt::layer().with_target(true)))
        .init();
}
