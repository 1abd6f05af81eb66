//! Persistence layer - file-backed task storage

mod error;
mod json_task_store;

pub use json_task_store::JsonTaskStorage;
