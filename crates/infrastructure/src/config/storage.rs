//! Task file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::default_true;

/// Where and when the task list is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the JSON task file
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Save after every command that changes the list (default: true)
    #[serde(default = "default_true")]
    pub autosave: bool,
}

fn default_data_file() -> String {
    "data/tasks.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            autosave: true,
        }
    }
}

impl StorageConfig {
    /// The task file as a path
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_file)
    }
}
