//! Domain entities - Objects with identity and lifecycle

mod task;

pub use task::{Task, TaskKind};
