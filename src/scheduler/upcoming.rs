//! Upcoming birthday computation.
//!
//! For each contact with a birthday, the next occurrence on or after `today`
//! is found. Contacts whose occurrence lies within the lookahead window are
//! reported, with weekend occurrences moved to the following Monday.

use crate::domain::{BirthdayDate, ContactName};
use crate::models::ContactDirectory;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Lookahead used when the caller does not specify one.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Format of reported congratulation dates.
pub const UPCOMING_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact whose birthday falls inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: ContactName,

    /// Date the birthday is observed on, after weekend roll-forward.
    #[serde(serialize_with = "serialize_upcoming_date")]
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The observed date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.date.format(UPCOMING_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_upcoming_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(UPCOMING_DATE_FORMAT))
}

/// Report every contact whose birthday is at most `window_days` days away.
///
/// Results follow directory order. A window of zero reports only birthdays
/// falling on `today` (still shifted to Monday when `today` is a weekend).
pub fn upcoming_birthdays(
    directory: &ContactDirectory,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    directory
        .all()
        .filter_map(|(name, record)| {
            let birthday = record.birthday()?;
            let occurrence = next_occurrence(birthday, today)?;
            let days_until = (occurrence - today).num_days();
            if days_until > i64::from(window_days) {
                return None;
            }
            Some(UpcomingBirthday {
                name: name.clone(),
                date: roll_forward_to_weekday(occurrence),
            })
        })
        .collect()
}

/// First observance of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.in_year(today.year())?;
    if this_year < today {
        birthday.in_year(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday to the next Monday; other days are unchanged.
pub fn roll_forward_to_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
