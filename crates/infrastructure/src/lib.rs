//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the in-memory task list, JSON file storage, configuration
//! loading and logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, LoggingConfig, StorageConfig};
pub use persistence::JsonTaskStorage;
pub use telemetry::{TelemetryError, init_logging};
