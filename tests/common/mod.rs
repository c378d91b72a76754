//! Shared fixtures for router tests

use climate_api::handlers::AppState;
use climate_api::query::QueryService;
use climate_api::store::StoreConnector;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// An on-disk copy of the observation schema, removed on drop
pub struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub async fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hawaii.sqlite");

        let mut conn = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();

        for ddl in [
            "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT)",
            "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT)",
        ] {
            sqlx::query(ddl).execute(&mut conn).await.unwrap();
        }
        conn.close().await.unwrap();

        Self { _dir: dir, path }
    }

    /// A small slice of the Hawaii dataset
    pub async fn hawaii() -> Self {
        let fixture = Self::empty().await;
        let mut conn = fixture.writer().await;

        for (station, name, lat, lon, elev) in [
            ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
            ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
            ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
        ] {
            sqlx::query("INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)")
                .bind(station)
                .bind(name)
                .bind(lat)
                .bind(lon)
                .bind(elev)
                .execute(&mut conn)
                .await
                .unwrap();
        }

        for (station, date, prcp, tobs) in [
            ("USC00519397", "2010-01-01", Some(0.08), Some(65.0)),
            ("USC00513117", "2016-08-22", Some(0.40), Some(80.0)),
            ("USC00519397", "2016-08-23", Some(0.00), Some(81.0)),
            ("USC00513117", "2016-08-23", Some(0.15), Some(76.0)),
            ("USC00519281", "2016-08-23", None, Some(77.0)),
            ("USC00519397", "2017-01-01", Some(0.00), Some(62.0)),
            ("USC00519281", "2017-01-01", Some(0.29), Some(72.0)),
            ("USC00519397", "2017-08-23", Some(0.00), Some(81.0)),
        ] {
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
                .bind(station)
                .bind(date)
                .bind(prcp)
                .bind(tobs)
                .execute(&mut conn)
                .await
                .unwrap();
        }

        conn.close().await.unwrap();
        fixture
    }

    async fn writer(&self) -> SqliteConnection {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .connect()
            .await
            .unwrap()
    }

    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }

    pub fn state(&self) -> AppState {
        state_for(&self.url())
    }
}

pub fn state_for(url: &str) -> AppState {
    let connector = StoreConnector::new(url, Duration::from_secs(1)).unwrap();
    AppState::new(QueryService::new(connector))
}
