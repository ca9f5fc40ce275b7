//! External command execution.

pub mod command;
pub mod mock;

pub use command::{command_line, CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
