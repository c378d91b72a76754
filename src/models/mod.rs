//! Record types for the observation store
//!
//! Rows are decoded through hand-written `FromRow` impls over fixed column
//! lists; the JSON records serialise their fields in declaration order.

pub mod observation;
pub mod station;

pub use observation::{Observation, Precipitation, TemperatureObservation, TemperatureSummary};
pub use station::Station;
