use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite URL of the observation store (e.g. "sqlite:Resources/hawaii.sqlite")
    pub url: String,

    /// How long a connection waits on a locked database before failing
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_seconds: u64,
}

impl DatabaseConfig {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

/// Paths the router registers outside `/api/`
const RESERVED_PATHS: &[&str] = &["/", "/health", "/ready"];

fn default_busy_timeout() -> u64 {
    5
}

/// Load configuration from builtin defaults, the TOML file at `path` (optional)
/// and `CLIMATE_API__*` environment variables, in that order of precedence.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000)?
        .set_default("server.log_level", "info")?
        .set_default("server.log_format", "text")?
        .set_default("database.url", "sqlite:Resources/hawaii.sqlite")?
        .set_default("database.busy_timeout_seconds", default_busy_timeout())?
        .set_default("metrics.enabled", true)?
        .set_default("metrics.endpoint", "/metrics")?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("CLIMATE_API").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.parse::<IpAddr>().is_err() {
        anyhow::bail!("Server host '{}' is not a valid IP address", cfg.server.host);
    }

    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be non-zero");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}': expected 'text' or 'json'", other),
    }

    if !cfg.database.url.starts_with("sqlite:") {
        anyhow::bail!("Database url must be a sqlite: URL, got '{}'", cfg.database.url);
    }

    if cfg.metrics.enabled {
        if !cfg.metrics.endpoint.starts_with('/') {
            anyhow::bail!("Metrics endpoint '{}' must start with '/'", cfg.metrics.endpoint);
        }
        let endpoint = cfg.metrics.endpoint.as_str();
        if endpoint.starts_with("/api/") || RESERVED_PATHS.contains(&endpoint) {
            anyhow::bail!(
                "Metrics endpoint '{}' collides with the API routes",
                cfg.metrics.endpoint
            );
        }
    }

    Ok(())
}
