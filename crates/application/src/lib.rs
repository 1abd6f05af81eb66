//! Application layer - Use cases and orchestration
//!
//! Interprets input lines into typed commands, defines the ports the task
//! list and its storage are reached through, and executes commands.

pub mod command_parser;
pub mod date_parser;
pub mod error;
pub mod ports;
pub mod services;

pub use command_parser::{CommandParser, TaskFactory};
pub use date_parser::{parse_date_time, parse_date_time_on};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
