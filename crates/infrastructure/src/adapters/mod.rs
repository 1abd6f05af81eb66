//! Adapters implementing application ports

mod in_memory_task_list;

pub use in_memory_task_list::InMemoryTaskList;
