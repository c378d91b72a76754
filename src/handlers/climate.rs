//! `/api/v1.0/*` handlers
//!
//! Each handler runs one [`QueryService`] operation and returns its records as
//! a JSON array. Store failures become HTTP 500 through [`AppError`].

use axum::extract::{Path, State};
use axum::Json;
use std::future::Future;
use std::time::Instant;
use tracing::error;

use crate::error::AppError;
use crate::metrics;
use crate::models::{Precipitation, Station, TemperatureObservation, TemperatureSummary};
use crate::query::QueryService;

/// Shared state for the API routes
#[derive(Clone)]
pub struct AppState {
    pub queries: QueryService,
}

impl AppState {
    pub fn new(queries: QueryService) -> Self {
        Self { queries }
    }
}

/// GET /api/v1.0/precipitation
pub async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<Precipitation>>, AppError> {
    respond("list_precipitation", state.queries.list_precipitation()).await
}

/// GET /api/v1.0/stations
pub async fn stations(State(state): State<AppState>) -> Result<Json<Vec<Station>>, AppError> {
    respond("list_stations", state.queries.list_stations()).await
}

/// GET /api/v1.0/tobs
pub async fn tobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureObservation>>, AppError> {
    respond("recent_temperatures", state.queries.recent_temperatures()).await
}

/// GET /api/v1.0/{start_date}/
pub async fn temperatures_from(
    State(state): State<AppState>,
    Path(start_date): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, AppError> {
    respond("temperatures_from", state.queries.temperatures_from(&start_date)).await
}

/// GET /api/v1.0/{start_date}/{end_date}
pub async fn temperatures_range(
    State(state): State<AppState>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, AppError> {
    respond(
        "temperatures_range",
        state.queries.temperatures_range(&start_date, &end_date),
    )
    .await
}

async fn respond<T, F>(operation: &'static str, query: F) -> Result<Json<Vec<T>>, AppError>
where
    F: Future<Output = Result<Vec<T>, sqlx::Error>>,
{
    let start = Instant::now();

    match query.await {
        Ok(records) => {
            metrics::record_query(operation, records.len(), start.elapsed());
            Ok(Json(records))
        }
        Err(err) => {
            metrics::record_error(operation, start.elapsed());
            error!(operation, error = %err, "Store query failed");
            Err(AppError::Store(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::TestStore;
    use crate::store::StoreConnector;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::time::Duration;

    #[tokio::test]
    async fn test_stations_handler() {
        let store = TestStore::new().await;
        store.add_station("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0).await;
        let state = AppState::new(QueryService::new(store.connector()));

        let Json(records) = stations(State(state)).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].station, "USC00519397");
    }

    #[tokio::test]
    async fn test_range_handler_passes_both_bounds() {
        let store = TestStore::new().await;
        store.add_observation("USC00519397", "2017-01-01", Some(0.0), Some(62.0)).await;
        store.add_observation("USC00519397", "2017-01-02", Some(0.0), Some(66.0)).await;
        store.add_observation("USC00519397", "2017-01-03", Some(0.0), Some(70.0)).await;
        let state = AppState::new(QueryService::new(store.connector()));

        let Json(records) = temperatures_range(
            State(state),
            Path(("2017-01-02".to_string(), "2017-01-02".to_string())),
        )
        .await
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].maximum, Some(66.0));
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("absent.sqlite").display());
        let connector = StoreConnector::new(&url, Duration::from_secs(1)).unwrap();
        let state = AppState::new(QueryService::new(connector));

        let err = precipitation(State(state)).await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
