//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait. [`CommandDispatcher`]
//! loads the configuration once, resolves the interpreter and routes the
//! subcommand to its implementation.

pub mod check;
pub mod dispatcher;
pub mod menu;
pub mod notebooks;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
