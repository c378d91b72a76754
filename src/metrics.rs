use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the global Prometheus recorder
///
/// Fails if a recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "climate_api_queries_total",
        "Total number of store queries executed"
    );
    describe_histogram!(
        "climate_api_query_duration_seconds",
        "Query duration in seconds, connection open to close"
    );
    describe_counter!(
        "climate_api_rows_returned_total",
        "Total number of records returned"
    );
    describe_counter!(
        "climate_api_query_errors_total",
        "Total number of failed store queries"
    );
    describe_gauge!(
        "climate_api_info",
        "Service version information"
    );

    gauge!("climate_api_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a successful query
pub fn record_query(operation: &'static str, rows: usize, duration: Duration) {
    counter!("climate_api_queries_total", "operation" => operation).increment(1);
    counter!("climate_api_rows_returned_total", "operation" => operation).increment(rows as u64);
    histogram!("climate_api_query_duration_seconds", "operation" => operation)
        .record(duration.as_secs_f64());
}

/// Record a failed query
pub fn record_error(operation: &'static str, duration: Duration) {
    counter!("climate_api_queries_total", "operation" => operation).increment(1);
    counter!("climate_api_query_errors_total", "operation" => operation).increment(1);
    histogram!("climate_api_query_duration_seconds", "operation" => operation)
        .record(duration.as_secs_f64());
}
