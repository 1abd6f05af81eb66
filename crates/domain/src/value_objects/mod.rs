//! Value Objects - Immutable, identity-less domain primitives

mod task_index;

pub use task_index::TaskIndex;
