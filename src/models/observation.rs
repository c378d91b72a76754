use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// One station's daily reading from the `measurement` table
///
/// `station` and `date` are required: a row with either column NULL fails to
/// decode, and the whole query fails with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station: String,
    /// `YYYY-MM-DD`, compared lexicographically by the store
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

impl Observation {
    pub const COLUMNS: &'static str = "station, date, prcp, tobs";
}

impl<'r> FromRow<'r, SqliteRow> for Observation {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            station: row.try_get("station")?,
            date: row.try_get("date")?,
            prcp: row.try_get("prcp")?,
            tobs: row.try_get("tobs")?,
        })
    }
}

/// Precipitation record: `{"key": date, "value": prcp, "station": id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Precipitation {
    pub key: String,
    pub value: Option<f64>,
    pub station: String,
}

impl From<Observation> for Precipitation {
    fn from(obs: Observation) -> Self {
        Self {
            key: obs.date,
            value: obs.prcp,
            station: obs.station,
        }
    }
}

/// Temperature observation record: `{"Date", "TOB", "Station"}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureObservation {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "TOB")]
    pub tob: Option<f64>,
    #[serde(rename = "Station")]
    pub station: String,
}

impl From<Observation> for TemperatureObservation {
    fn from(obs: Observation) -> Self {
        Self {
            date: obs.date,
            tob: obs.tobs,
            station: obs.station,
        }
    }
}

/// Per-date temperature aggregate: `{"Date", "Minimum", "Average", "Maximum"}`
///
/// All three aggregates are `None` when every reading for the date is null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Minimum")]
    pub minimum: Option<f64>,
    #[serde(rename = "Average")]
    pub average: Option<f64>,
    #[serde(rename = "Maximum")]
    pub maximum: Option<f64>,
}

impl TemperatureSummary {
    pub const COLUMNS: &'static str =
        "date, MIN(tobs) AS min_tobs, AVG(tobs) AS avg_tobs, MAX(tobs) AS max_tobs";
}

impl<'r> FromRow<'r, SqliteRow> for TemperatureSummary {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            date: row.try_get("date")?,
            minimum: row.try_get("min_tobs")?,
            average: row.try_get("avg_tobs")?,
            maximum: row.try_get("max_tobs")?,
        })
    }
}
