//! Command implementations for the CLI
//!
//! - start: Start the API server
//! - test: Test configuration validity and store connectivity
//! - config: Configuration display

pub mod config;
pub mod start;
