//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber. Log lines go to stderr so the
//! interactive transcript on stdout stays clean.

mod logging;

pub use logging::{TelemetryError, init_logging};
