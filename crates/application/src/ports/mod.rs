//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod task_list_port;
mod task_storage_port;

pub use task_list_port::TaskListPort;
#[cfg(test)]
pub use task_list_port::MockTaskListPort;
pub use task_storage_port::TaskStoragePort;
#[cfg(test)]
pub use task_storage_port::MockTaskStoragePort;
