//! Command handlers.
//!
//! Each handler runs one command against the directory and returns the text
//! to print. Domain failures come back as `CommandError`, whose `Display` is
//! the user-facing message.

use super::command::{Command, HELP_TEXT};
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::matching::ContactMatcher;
use crate::models::{ContactDirectory, ContactRecord};
use crate::scheduler::upcoming_birthdays;
use chrono::NaiveDate;

/// Executes parsed commands against a contact directory.
#[derive(Debug, Clone)]
pub struct CommandHandler {
    matcher: ContactMatcher,
    default_window_days: u32,
    max_search_results: usize,
}

impl CommandHandler {
    pub fn new(default_window_days: u32, max_search_results: usize, min_confidence: u8) -> Self {
        Self {
            matcher: ContactMatcher::new(min_confidence),
            default_window_days,
            max_search_results,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.birthday_window_days,
            config.search_max_results,
            config.search_min_confidence,
        )
    }

    /// Run `command`, using `today` as the reference date for birthday reports.
    pub fn execute(
        &self,
        command: Command,
        directory: &mut ContactDirectory,
        today: NaiveDate,
    ) -> CommandResult<String> {
        tracing::debug!(command = ?command, "Executing command");

        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Add { name, phone } => add_contact(directory, &name, &phone),
            Command::Change { name, old, new } => change_phone(directory, &name, &old, &new),
            Command::RemovePhone { name, phone } => remove_phone(directory, &name, &phone),
            Command::Show { name } => Ok(find(directory, &name)?.to_string()),
            Command::Delete { name } => {
                let removed = directory.delete(&name)?;
                Ok(format!("Contact '{}' deleted.", removed.name()))
            }
            Command::All => Ok(show_all(directory)),
            Command::AddBirthday { name, birthday } => {
                find_mut(directory, &name)?.add_birthday(&birthday)?;
                Ok("Birthday added.".to_string())
            }
            Command::ShowBirthday { name } => {
                let record = find(directory, &name)?;
                Ok(match record.birthday() {
                    Some(birthday) => format!("{}: {}", record.name(), birthday),
                    None => format!("No birthday set for {}.", record.name()),
                })
            }
            Command::AllBirthdays => Ok(all_birthdays(directory)),
            Command::Birthdays { days } => {
                let window = days.unwrap_or(self.default_window_days);
                Ok(birthdays(directory, today, window))
            }
            Command::Search { query } => Ok(self.search(directory, &query)),
            Command::Exit => Ok("Good bye!".to_string()),
        }
    }

    fn search(&self, directory: &ContactDirectory, query: &str) -> String {
        let results = self
            .matcher
            .find_matches(query, directory, self.max_search_results);
        if results.is_empty() {
            return "No matches found.".to_string();
        }
        results
            .iter()
            .filter_map(|result| directory.find(result.name.as_str()))
            .map(phones_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn find<'a>(directory: &'a ContactDirectory, name: &str) -> CommandResult<&'a ContactRecord> {
    directory.find(name).ok_or(CommandError::ContactNotFound)
}

fn find_mut<'a>(
    directory: &'a mut ContactDirectory,
    name: &str,
) -> CommandResult<&'a mut ContactRecord> {
    directory.find_mut(name).ok_or(CommandError::ContactNotFound)
}

/// Create the contact if needed, then append the phone.
///
/// The phone is validated before a new record is inserted so a bad number
/// never leaves an empty contact behind.
fn add_contact(directory: &mut ContactDirectory, name: &str, phone: &str) -> CommandResult<String> {
    if let Some(record) = directory.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = ContactRecord::with_name(name)?;
    record.add_phone(phone)?;
    directory.add_record(record);
    Ok("Contact added.".to_string())
}

fn change_phone(
    directory: &mut ContactDirectory,
    name: &str,
    old: &str,
    new: &str,
) -> CommandResult<String> {
    let edited = find_mut(directory, name)?.edit_phone(old, new)?;
    if edited == 0 {
        return Err(CommandError::PhoneNotFound);
    }
    Ok("Contact updated.".to_string())
}

fn remove_phone(directory: &mut ContactDirectory, name: &str, phone: &str) -> CommandResult<String> {
    let removed = find_mut(directory, name)?.remove_phone(phone);
    if removed == 0 {
        return Err(CommandError::PhoneNotFound);
    }
    Ok("Phone removed.".to_string())
}

fn phones_line(record: &ContactRecord) -> String {
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    format!("{}: {}", record.name(), phones.join("; "))
}

fn show_all(directory: &ContactDirectory) -> String {
    if directory.is_empty() {
        return "No contacts found.".to_string();
    }
    directory
        .all()
        .map(|(_, record)| phones_line(record))
        .collect::<Vec<_>>()
        .join("\n")
}

fn all_birthdays(directory: &ContactDirectory) -> String {
    let lines: Vec<String> = directory
        .all()
        .filter_map(|(name, record)| record.birthday().map(|b| format!("{}: {}", name, b)))
        .collect();
    if lines.is_empty() {
        return "No birthdays found.".to_string();
    }
    lines.join("\n")
}

fn birthdays(directory: &ContactDirectory, today: NaiveDate, window_days: u32) -> String {
    let upcoming = upcoming_birthdays(directory, today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
