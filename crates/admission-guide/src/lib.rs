pub mod config;
pub mod error;
pub mod guide;
pub mod telemetry;
