//! Command implementations.

pub mod dispatcher;
pub mod execute;
pub mod list;
pub mod plan;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
