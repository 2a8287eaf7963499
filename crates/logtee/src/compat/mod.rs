//! Compatibility bridges for the `log` and `tracing` facades

mod log_bridge;
mod tracing_bridge;

pub use log_bridge::{LogFacade, install_log_facade};
pub use tracing_bridge::TracingLayer;
