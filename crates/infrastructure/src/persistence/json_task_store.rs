//! JSON file task storage
//!
//! Implements the `TaskStoragePort` as a single JSON array on disk.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use application::{error::ApplicationError, ports::TaskStoragePort};
use domain::Task;
use tracing::{debug, instrument};

use super::error::{map_io_error, map_json_error};

/// Task storage backed by a JSON file
///
/// Writes go to a sibling temporary file that is renamed over the target,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct JsonTaskStorage {
    path: PathBuf,
}

impl JsonTaskStorage {
    /// Create a storage for the file at `path`
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TaskStoragePort for JsonTaskStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<Task>, ApplicationError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No task file yet, starting empty");
                return Ok(Vec::new());
            },
            Err(e) => return Err(map_io_error(&self.path, &e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&contents).map_err(|e| map_json_error(&self.path, &e))?;
        debug!(count = tasks.len(), "Loaded task file");
        Ok(tasks)
    }

    #[instrument(skip(self, tasks), fields(path = %self.path.display(), count = tasks.len()))]
    fn save(&self, tasks: &[Task]) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, &e))?;
        }

        let json =
            serde_json::to_string_pretty(tasks).map_err(|e| map_json_error(&self.path, &e))?;

        let temp = self.temp_path();
        let mut file = fs::File::create(&temp).map_err(|e| map_io_error(&temp, &e))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| map_io_error(&temp, &e))?;
        fs::rename(&temp, &self.path).map_err(|e| map_io_error(&self.path, &e))?;

        debug!("Saved task file");
        Ok(())
    }
}
