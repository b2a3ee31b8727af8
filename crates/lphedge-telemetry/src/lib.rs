//! Structured logging for the LP hedge engine.
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_logging`] once at startup.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogFormat};
