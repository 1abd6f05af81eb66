//! Application services - Use case implementations

pub mod response_formatter;
mod task_service;

pub use task_service::{ExecutionResult, TaskService};
