//! Contact Book - Main entry point
//!
//! Loads the saved contacts, runs the interactive session on stdin/stdout,
//! and saves the contacts again when the session ends.

use anyhow::{Context, Result};
use contact_book::commands::repl;
use contact_book::{CommandHandler, Config, DirectoryRepository, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so the session on stdout stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Using contacts file: {}",
        config.contacts_file.display()
    );

    let repository = JsonFileRepository::new(config.contacts_file.clone());
    let mut directory = repository.load().map_err(|e| {
        error!("Failed to load contacts: {}", e);
        e
    })?;

    let handler = CommandHandler::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let session = repl::run(stdin.lock(), &mut stdout, &mut directory, &handler, || {
        chrono::Local::now().date_naive()
    });
    if let Err(e) = &session {
        error!("Session ended with an I/O error: {}", e);
    }

    // Saved even when the session failed, so edits made so far survive
    repository.save(&directory).map_err(|e| {
        error!("Failed to save contacts: {}", e);
        e
    })?;
    session.context("Failed to run session")?;

    info!("Contact book shutdown complete");
    Ok(())
}
