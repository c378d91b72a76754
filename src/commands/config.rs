use anyhow::Result;
use climate_api::config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration after defaults, file and environment
/// are merged
pub fn show(config_path: &Path) -> Result<()> {
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("# Effective configuration ({})", config_path.display());
    println!();
    println!("{}", toml::to_string_pretty(&cfg)?);

    Ok(())
}
