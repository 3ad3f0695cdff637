//! Read-eval-print loop.

use super::command::Command;
use super::handlers::CommandHandler;
use crate::models::ContactDirectory;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Read commands from `input` until `exit`/`close` or end of input.
///
/// Every reply, including error messages, is written to `output`. Bytes that
/// are not valid UTF-8 are replaced rather than rejected. Only I/O failures on
/// the streams themselves end the loop with an error. `today` is asked for the
/// current date each time a command runs.
pub fn run<R, W, F>(
    mut input: R,
    output: &mut W,
    directory: &mut ContactDirectory,
    handler: &CommandHandler,
    today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("Input closed");
            writeln!(output)?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        let exit = command == Command::Exit;
        match handler.execute(command, directory, today()) {
            Ok(reply) => writeln!(output, "{}", reply)?,
            Err(e) => {
                tracing::debug!(error = ?e, "Command failed");
                writeln!(output, "{}", e)?;
            }
        }

        if exit {
            return Ok(());
        }
    }
}
