//! Connection factory for the observation store
//!
//! Every query operation opens its own read-only SQLite connection through a
//! [`StoreConnector`] and closes it before returning. There is no pool and no
//! process-wide handle: the connector is built once at startup and passed to
//! whoever needs a connection.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;

/// Opens one store connection per call
#[derive(Debug, Clone)]
pub struct StoreConnector {
    options: SqliteConnectOptions,
}

impl StoreConnector {
    /// Build a connector for `database_url` (e.g. "sqlite:Resources/hawaii.sqlite")
    ///
    /// Only the URL is parsed here; the file is not touched until the first
    /// [`connect`](Self::connect). Connections are read-only and never create
    /// a missing database.
    pub fn new(database_url: &str, busy_timeout: Duration) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .read_only(true)
            .create_if_missing(false)
            .busy_timeout(busy_timeout);

        Ok(Self { options })
    }

    pub fn from_config(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        Self::new(&config.url, config.busy_timeout())
    }

    /// Open a fresh connection to the store
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }

    /// Open and immediately close a connection
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.connect().await?;
        conn.ping().await?;
        conn.close().await
    }
}

/// Throw-away SQLite stores for tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use tempfile::TempDir;

    /// A database file with the `measurement` and `station` tables, deleted on drop
    pub struct TestStore {
        _dir: TempDir,
        pub url: String,
    }

    impl TestStore {
        pub async fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("hawaii.sqlite");
            let url = format!("sqlite://{}", path.display());

            let mut conn = SqliteConnectOptions::new()
                .filename(&path)
                .create_if_missing(true)
                .connect()
                .await
                .unwrap();

            sqlx::query(
                "CREATE TABLE measurement (
                    id INTEGER PRIMARY KEY,
                    station TEXT,
                    date TEXT,
                    prcp FLOAT,
                    tobs FLOAT
                )",
            )
            .execute(&mut conn)
            .await
            .unwrap();

            sqlx::query(
                "CREATE TABLE station (
                    id INTEGER PRIMARY KEY,
                    station TEXT,
                    name TEXT,
                    latitude FLOAT,
                    longitude FLOAT,
                    elevation FLOAT
                )",
            )
            .execute(&mut conn)
            .await
            .unwrap();

            conn.close().await.unwrap();

            Self { _dir: dir, url }
        }

        pub fn connector(&self) -> StoreConnector {
            StoreConnector::new(&self.url, Duration::from_secs(5)).unwrap()
        }

        async fn writer(&self) -> SqliteConnection {
            SqliteConnectOptions::from_str(&self.url).unwrap().connect().await.unwrap()
        }

        pub async fn add_observation(&self, station: &str, date: &str, prcp: Option<f64>, tobs: Option<f64>) {
            let mut conn = self.writer().await;
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
                .bind(station)
                .bind(date)
                .bind(prcp)
                .bind(tobs)
                .execute(&mut conn)
                .await
                .unwrap();
            conn.close().await.unwrap();
        }

        pub async fn add_station(&self, station: &str, name: &str, latitude: f64, longitude: f64, elevation: f64) {
            let mut conn = self.writer().await;
            sqlx::query(
                "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(station)
            .bind(name)
            .bind(latitude)
            .bind(longitude)
            .bind(elevation)
            .execute(&mut conn)
            .await
            .unwrap();
            conn.close().await.unwrap();
        }
    }
}
