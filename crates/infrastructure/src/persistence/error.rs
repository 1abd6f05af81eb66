//! Shared error mapping for the file persistence layer

use std::path::Path;

use application::error::ApplicationError;

/// Map an I/O error on `path` to an application-layer error
pub fn map_io_error(path: &Path, e: &std::io::Error) -> ApplicationError {
    ApplicationError::Storage(format!("{}: {e}", path.display()))
}

/// Map a JSON error on `path` to an application-layer error
pub fn map_json_error(path: &Path, e: &serde_json::Error) -> ApplicationError {
    ApplicationError::Storage(format!("{}: malformed task file: {e}", path.display()))
}
