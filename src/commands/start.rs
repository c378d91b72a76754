use anyhow::Result;
use climate_api::{config, init_tracing, server};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// This will:
/// 1. Load configuration
/// 2. Initialize tracing with the configured level and format
/// 3. Start the server (blocks until shutdown)
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting Climate API...".green());

    let cfg = config::load_config(config_path)?;

    init_tracing(&cfg.server.log_level, &cfg.server.log_format);
    info!("Loaded configuration from {}", config_path.display());

    server::start_server(cfg).await?;

    Ok(())
}
