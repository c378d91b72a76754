//! The read-only queries behind the API routes
//!
//! Each operation opens a store connection, runs exactly one statement, closes
//! the connection and maps the rows into records. Store errors are returned
//! unmodified; there is no retry and no partial result.

use sqlx::Connection;
use tracing::debug;

use crate::models::{Observation, Precipitation, Station, TemperatureObservation, TemperatureSummary};
use crate::store::StoreConnector;

/// First day of the dataset
pub const DATASET_FIRST_DATE: &str = "2010-01-01";
/// Last day of the dataset
pub const DATASET_LAST_DATE: &str = "2017-08-23";

/// Inclusive window served by [`QueryService::recent_temperatures`]
pub const RECENT_WINDOW_START: &str = "2016-08-23";
pub const RECENT_WINDOW_END: &str = "2017-08-23";

#[derive(Debug, Clone)]
pub struct QueryService {
    connector: StoreConnector,
}

impl QueryService {
    pub fn new(connector: StoreConnector) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &StoreConnector {
        &self.connector
    }

    /// Every observation's precipitation, newest first
    pub async fn list_precipitation(&self) -> Result<Vec<Precipitation>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM measurement ORDER BY date DESC",
            Observation::COLUMNS
        );

        let mut conn = self.connector.connect().await?;
        let rows = sqlx::query_as::<_, Observation>(&sql)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        debug!(operation = "list_precipitation", rows = rows.len(), "Query completed");
        Ok(rows.into_iter().map(Precipitation::from).collect())
    }

    /// Every station, in the store's row order
    pub async fn list_stations(&self) -> Result<Vec<Station>, sqlx::Error> {
        let sql = format!("SELECT {} FROM station", Station::COLUMNS);

        let mut conn = self.connector.connect().await?;
        let rows = sqlx::query_as::<_, Station>(&sql)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        debug!(operation = "list_stations", rows = rows.len(), "Query completed");
        Ok(rows)
    }

    /// Temperature observations between [`RECENT_WINDOW_START`] and
    /// [`RECENT_WINDOW_END`] inclusive, newest first
    pub async fn recent_temperatures(&self) -> Result<Vec<TemperatureObservation>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM measurement WHERE date >= ? AND date <= ? ORDER BY date DESC",
            Observation::COLUMNS
        );

        let mut conn = self.connector.connect().await?;
        let rows = sqlx::query_as::<_, Observation>(&sql)
            .bind(RECENT_WINDOW_START)
            .bind(RECENT_WINDOW_END)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        debug!(operation = "recent_temperatures", rows = rows.len(), "Query completed");
        Ok(rows.into_iter().map(TemperatureObservation::from).collect())
    }

    /// Daily min/avg/max temperature for every date on or after `start_date`
    ///
    /// `start_date` is not validated; it is compared as a string by the store.
    pub async fn temperatures_from(&self, start_date: &str) -> Result<Vec<TemperatureSummary>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM measurement WHERE date >= ? GROUP BY date ORDER BY date",
            TemperatureSummary::COLUMNS
        );

        let mut conn = self.connector.connect().await?;
        let rows = sqlx::query_as::<_, TemperatureSummary>(&sql)
            .bind(start_date)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        debug!(operation = "temperatures_from", start_date, rows = rows.len(), "Query completed");
        Ok(rows)
    }

    /// Daily min/avg/max temperature for dates in `[start_date, end_date]`
    pub async fn temperatures_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<TemperatureSummary>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM measurement WHERE date >= ? AND date <= ? GROUP BY date ORDER BY date",
            TemperatureSummary::COLUMNS
        );

        let mut conn = self.connector.connect().await?;
        let rows = sqlx::query_as::<_, TemperatureSummary>(&sql)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        debug!(
            operation = "temperatures_range",
            start_date,
            end_date,
            rows = rows.len(),
            "Query completed"
        );
        Ok(rows)
    }
}
