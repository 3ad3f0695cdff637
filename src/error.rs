//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by contact directory and record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number, birthday or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record already has a birthday and it cannot be overwritten
    #[error("Contact '{0}' already has a birthday")]
    BirthdayAlreadySet(String),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors that can occur while loading or saving the contact directory.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors surfaced to the user by the command dispatcher.
///
/// The `Display` output of each variant is the message printed in the REPL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number or shape of arguments; carries the usage line
    #[error("Invalid command format. Usage: {0}")]
    InvalidArguments(&'static str),

    /// The command word is not recognised
    #[error("Invalid command.")]
    UnknownCommand,

    /// A phone edit or removal matched nothing
    #[error("Phone not found.")]
    PhoneNotFound,

    /// No contact is stored under the given name
    #[error("Contact not found.")]
    ContactNotFound,

    /// A domain value failed validation
    #[error("{0}.")]
    Validation(ValidationError),

    /// The contact already has a birthday
    #[error("Only one birthday can be added.")]
    BirthdayAlreadySet,
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::Validation(e) => CommandError::Validation(e),
            BookError::BirthdayAlreadySet(_) => CommandError::BirthdayAlreadySet,
            BookError::ContactNotFound(_) => CommandError::ContactNotFound,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Validation(err)
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
