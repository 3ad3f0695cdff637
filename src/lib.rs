//! Contact Book - a command-line contact manager.
//!
//! Stores names, phone numbers and birthdays, keeps them in a JSON file
//! between runs, and reports whose birthday is coming up.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the directory that holds them
//! - **scheduler**: Upcoming birthday computation with weekend roll-forward
//! - **matching**: Fuzzy name and phone lookup
//! - **repositories**: Loading and saving the directory
//! - **commands**: Command parsing, handlers and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod scheduler;

pub use commands::{Command, CommandHandler};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use matching::{ContactMatcher, MatchResult, MatchType};
pub use models::{ContactDirectory, ContactRecord};
pub use repositories::{DirectoryRepository, JsonFileRepository};
pub use scheduler::{upcoming_birthdays, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
