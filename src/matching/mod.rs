//! Fuzzy matching utilities for contact lookup.
//!
//! Matches contacts by name (fuzzy) or phone number (exact or partial).

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType};
