//! Application configuration
//!
//! Split into focused sub-modules:
//! - `storage`: task file location and autosave
//! - `logging`: log level and output format
//!
//! Sources are layered: built-in defaults, then an optional TOML file, then
//! `FICIN_*` environment variables (nested keys use `__`, e.g.
//! `FICIN_STORAGE__DATA_FILE`).

mod logging;
mod storage;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ficin";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "FICIN";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

fn default_assistant_name() -> String {
    "Ficin".to_string()
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name used in the welcome banner
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Task file settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, a config file and the environment
    ///
    /// With `path` set the file must exist; otherwise `ficin.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, env_source())
    }

    fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = path.map_or_else(
            || config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
            |p| config::File::from(p).required(true),
        );

        let defaults = Self::default();
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("assistant_name", defaults.assistant_name)?
            .set_default("storage.data_file", defaults.storage.data_file)?
            .set_default("storage.autosave", defaults.storage.autosave)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format.as_str())?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., FICIN_LOGGING__LEVEL)
            .add_source(env);

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(data_file = %config.storage.data_file, "Configuration loaded");
        Ok(config)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
