//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$")
        .expect("Failed to compile birthday regex")
});

/// Text format used to display and persist birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday parsed from `day.month.year` text.
///
/// Construction checks both the textual shape and that the date exists in
/// the calendar, so `31.04.2020` and `29.02.2023` are rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::parse("15.03.1990").unwrap();
/// assert_eq!((birthday.day(), birthday.month(), birthday.year()), (15, 3, 1990));
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `day.month.year` text.
    ///
    /// Day and month may be one or two digits; the year must be four digits
    /// and no earlier than year 1.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on malformed text or a date
    /// that does not exist.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(text.to_string());

        let caps = BIRTHDAY_REGEX.captures(text).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;
        if year < 1 {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Wrap an existing calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The date this birthday is observed on in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day()).or_else(|| {
            if self.month() == 2 && self.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
