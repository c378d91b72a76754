pub mod climate;
pub mod health;
pub mod index;
pub mod metrics_handler;

pub use climate::AppState;
