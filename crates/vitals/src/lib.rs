//! Application wiring for the Vitals wellness dashboard.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod version;
