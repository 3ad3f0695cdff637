//! Parsing of REPL input lines into typed commands.

use crate::error::{CommandError, CommandResult};

/// A parsed user command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    Show { name: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    AllBirthdays,
    Birthdays { days: Option<u32> },
    Search { query: String },
    Exit,
}

pub const ADD_USAGE: &str = "add <name> <phone>";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
pub const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";
pub const SHOW_USAGE: &str = "show <name>";
pub const DELETE_USAGE: &str = "delete <name>";
pub const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";
pub const BIRTHDAYS_USAGE: &str = "birthdays [days]";
pub const SEARCH_USAGE: &str = "search <name or phone>";

/// One line per command, printed by `help`.
pub const HELP_TEXT: &str = "\
Available commands:
  hello
  add <name> <phone>
  change <name> <old phone> <new phone>
  remove-phone <name> <phone>
  show <name>            (alias: phone)
  delete <name>
  all
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  all-birthdays
  birthdays [days]
  search <name or phone>
  close | exit";

impl Command {
    /// Parse one input line.
    ///
    /// The first whitespace-separated token, case-insensitive, selects the
    /// command; the rest are its arguments. Surplus arguments are ignored.
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let word = match tokens.next() {
            Some(word) => word.to_lowercase(),
            None => return Ok(None),
        };
        let args: Vec<&str> = tokens.collect();

        let command = match word.as_str() {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => {
                let [name, phone] = take::<2>(&args, ADD_USAGE)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old, new] = take::<3>(&args, CHANGE_USAGE)?;
                Command::Change { name, old, new }
            }
            "remove-phone" => {
                let [name, phone] = take::<2>(&args, REMOVE_PHONE_USAGE)?;
                Command::RemovePhone { name, phone }
            }
            "show" | "phone" => {
                let [name] = take::<1>(&args, SHOW_USAGE)?;
                Command::Show { name }
            }
            "delete" => {
                let [name] = take::<1>(&args, DELETE_USAGE)?;
                Command::Delete { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] = take::<2>(&args, ADD_BIRTHDAY_USAGE)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take::<1>(&args, SHOW_BIRTHDAY_USAGE)?;
                Command::ShowBirthday { name }
            }
            "all-birthdays" => Command::AllBirthdays,
            "birthdays" => {
                let days = match args.first() {
                    Some(days) => Some(
                        days.parse::<u32>()
                            .map_err(|_| CommandError::InvalidArguments(BIRTHDAYS_USAGE))?,
                    ),
                    None => None,
                };
                Command::Birthdays { days }
            }
            "search" => {
                if args.is_empty() {
                    return Err(CommandError::InvalidArguments(SEARCH_USAGE));
                }
                Command::Search {
                    query: args.join(" "),
                }
            }
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::UnknownCommand),
        };

        Ok(Some(command))
    }
}

/// Take the first `N` arguments, failing with `usage` if there are fewer.
fn take<const N: usize>(args: &[&str], usage: &'static str) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::InvalidArguments(usage));
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
