//! Birthday scheduling.
//!
//! Computes which contacts have a birthday coming up within a lookahead
//! window, observed on the next business day when it lands on a weekend.

pub mod upcoming;

pub use upcoming::{
    next_occurrence, roll_forward_to_weekday, upcoming_birthdays, UpcomingBirthday,
    DEFAULT_WINDOW_DAYS, UPCOMING_DATE_FORMAT,
};
