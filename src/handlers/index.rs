use axum::response::Html;

use crate::query::{DATASET_FIRST_DATE, DATASET_LAST_DATE};

/// GET / - list the available routes
pub async fn homepage() -> Html<String> {
    Html(format!(
        "Welcome!<br/><br/>\
         Note: dates only range from {DATASET_FIRST_DATE} to {DATASET_LAST_DATE}<br/><br/><br/>\
         Available Routes:<br/><br/>\
         /api/v1.0/precipitation<br/>\
         Returns a list of dates and amounts of precipitation.<br/><br/>\
         /api/v1.0/stations<br/>\
         Returns a list of stations.<br/><br/>\
         /api/v1.0/tobs<br/>\
         Returns a list of temperature observations from the previous year.<br/><br/>\
         /api/v1.0/yyyy-mm-dd/<br/>\
         Returns a minimum, average, and maximum temperature for a given start date (yyyy-mm-dd).<br/><br/>\
         /api/v1.0/yyyy-mm-dd/yyyy-mm-dd<br/>\
         Returns a minimum, average, and maximum temperature for given date range (yyyy-mm-dd)."
    ))
}
