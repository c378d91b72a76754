use anyhow::Result;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    query::QueryService,
    signals::setup_signal_handlers,
    store::StoreConnector,
};

/// Where the Prometheus scrape endpoint is mounted, and what it renders
#[derive(Clone)]
pub struct MetricsRoute {
    pub endpoint: String,
    pub handle: Arc<PrometheusHandle>,
}

/// Start the HTTP server
///
/// This function:
/// 1. Installs the metrics recorder (if enabled)
/// 2. Builds the store connector injected into the handlers
/// 3. Sets up signal handlers for graceful shutdown
/// 4. Binds to the configured address
/// 5. Serves requests until a shutdown signal arrives
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_route = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(MetricsRoute {
            endpoint: config.metrics.endpoint.clone(),
            handle: Arc::new(metrics::init_metrics()?),
        })
    } else {
        None
    };

    let connector = StoreConnector::from_config(&config.database)?;

    // A missing store is reported per request, not fatal at startup
    if let Err(e) = connector.ping().await {
        warn!("Observation store at {} is not reachable: {}", config.database.url, e);
    }

    let app_state = AppState::new(QueryService::new(connector));

    // Setup signal handlers (SIGTERM, SIGINT)
    let (shutdown_tx, signal_handle) = setup_signal_handlers();
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(app_state, metrics_route);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting Climate API on {}", addr);
    info!(
        "Configuration: store {}, metrics {}",
        config.database.url,
        if config.metrics.enabled { config.metrics.endpoint.as_str() } else { "disabled" }
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(app_state: AppState, metrics_route: Option<MetricsRoute>) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::index::homepage))
        .route(
            "/api/v1.0/precipitation",
            get(handlers::climate::precipitation),
        )
        .route("/api/v1.0/stations", get(handlers::climate::stations))
        .route("/api/v1.0/tobs", get(handlers::climate::tobs))
        .route(
            "/api/v1.0/:start_date",
            get(handlers::climate::temperatures_from),
        )
        .route(
            "/api/v1.0/:start_date/",
            get(handlers::climate::temperatures_from),
        )
        .route(
            "/api/v1.0/:start_date/:end_date",
            get(handlers::climate::temperatures_range),
        )
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(app_state);

    let routes = match metrics_route {
        Some(MetricsRoute { endpoint, handle }) => routes.merge(
            Router::new()
                .route(&endpoint, get(handlers::metrics_handler::metrics))
                .with_state(handle),
        ),
        None => routes,
    };

    routes.layer(TraceLayer::new_for_http())
}
