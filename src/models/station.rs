use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// A physical measurement site from the `station` table
///
/// Serialises as `{"Station ID", "Name", "Latitude", "Longitude", "Elevation"}`.
/// The station id is required; a row without one fails the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    #[serde(rename = "Station ID")]
    pub station: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Elevation")]
    pub elevation: Option<f64>,
}

impl Station {
    pub const COLUMNS: &'static str = "station, name, latitude, longitude, elevation";
}

impl<'r> FromRow<'r, SqliteRow> for Station {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            station: row.try_get("station")?,
            name: row.try_get("name")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            elevation: row.try_get("elevation")?,
        })
    }
}
