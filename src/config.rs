//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::scheduler::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file (default: "addressbook.json")
    pub contacts_file: PathBuf,

    /// Default lookahead for the `birthdays` command in days (default: 7)
    pub birthday_window_days: u32,

    /// Maximum number of `search` results (default: 5)
    pub search_max_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub search_min_confidence: u8,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Data file path (default: addressbook.json)
    /// - `BIRTHDAY_WINDOW_DAYS`: Default upcoming birthday window (default: 7)
    /// - `SEARCH_MAX_RESULTS`: Max search results (default: 5)
    /// - `SEARCH_MIN_CONFIDENCE`: Min fuzzy match confidence (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.contacts_file,
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        let search_max_results =
            Self::parse_env_usize("SEARCH_MAX_RESULTS", defaults.search_max_results)?;
        let search_min_confidence =
            Self::parse_env_u8("SEARCH_MIN_CONFIDENCE", defaults.search_min_confidence)?;

        if search_min_confidence > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_MIN_CONFIDENCE".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            contacts_file,
            birthday_window_days,
            search_max_results,
            search_min_confidence,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from("addressbook.json"),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            search_max_results: 5,
            search_min_confidence: 30,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "CONTACTS_FILE",
        "BIRTHDAY_WINDOW_DAYS",
        "SEARCH_MAX_RESULTS",
        "SEARCH_MIN_CONFIDENCE",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        /// Start from a clean slate for every variable the config reads.
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.contacts_file, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.search_max_results, 5);
        assert_eq!(config.search_min_confidence, 30);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_FILE", "/tmp/contacts.json");
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("SEARCH_MAX_RESULTS", "10");

        let config = Config::from_env().unwrap();
        assert_eq!(config.contacts_file, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.search_max_results, 10);
        assert_eq!(config.search_min_confidence, 30);
    }

    #[test]
    #[serial]
    fn test_config_empty_contacts_file() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_FILE", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CONTACTS_FILE"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_window() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "-3");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_confidence_threshold() {
        let mut guard = EnvGuard::new();
        guard.set("SEARCH_MIN_CONFIDENCE", "150");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "SEARCH_MIN_CONFIDENCE")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");
        guard.set("TEST_U32_INVALID", "not-a-number");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT", 10).unwrap(), 10);
        assert!(Config::parse_env_u32("TEST_U32_INVALID", 10).is_err());
    }
}
