//! Command dispatcher for the interactive session.
//!
//! Input lines are parsed into a [`Command`], run by the [`CommandHandler`]
//! against a directory passed in by the caller, and the reply is printed by
//! the [`repl`] loop.

mod command;
mod handlers;
pub mod repl;

pub use command::{Command, HELP_TEXT};
pub use handlers::CommandHandler;
