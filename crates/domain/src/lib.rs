//! Domain layer for ficin
//!
//! Contains the task entity, the typed command intents produced by the
//! command parser, value objects, and the domain error taxonomy.
//! This layer performs no I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use commands::{CommandKeyword, TaskCommand};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
