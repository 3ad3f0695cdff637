//! Contact lookup for the `search` command.
//!
//! - Exact matching on phone numbers (digit-only queries)
//! - Fuzzy name matching with substring and edit-distance scoring
//! - Confidence scoring (0-100 scale)

use crate::domain::ContactName;
use crate::models::{ContactDirectory, ContactRecord};

/// A match result containing a contact name and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The matched contact
    pub name: ContactName,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher over a directory.
#[derive(Debug, Clone)]
pub struct ContactMatcher {
    min_confidence: u8,
}

impl ContactMatcher {
    /// Create a matcher that drops fuzzy results scoring below `min_confidence`.
    pub fn new(min_confidence: u8) -> Self {
        Self { min_confidence }
    }

    /// Find contacts matching `query`, best first.
    ///
    /// A query made only of digits is compared against phone numbers; any
    /// other query is matched against names. Ties are broken by name.
    pub fn find_matches(
        &self,
        query: &str,
        directory: &ContactDirectory,
        max_results: usize,
    ) -> Vec<MatchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let phone_query = query.chars().all(|c| c.is_ascii_digit());

        let mut results: Vec<MatchResult> = directory
            .all()
            .filter_map(|(name, record)| {
                if phone_query {
                    Self::match_phone(query, record).map(|confidence| MatchResult {
                        name: name.clone(),
                        confidence,
                        match_type: MatchType::ExactPhone,
                    })
                } else {
                    Self::fuzzy_match_name(query, name.as_str())
                        .filter(|confidence| *confidence >= self.min_confidence)
                        .map(|confidence| MatchResult {
                            name: name.clone(),
                            confidence,
                            match_type: MatchType::FuzzyName,
                        })
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        results.truncate(max_results);
        results
    }

    /// Only a full phone match counts; it always scores 100.
    fn match_phone(query: &str, record: &ContactRecord) -> Option<u8> {
        record.find_phone(query).map(|_| 100)
    }

    fn fuzzy_match_name(query: &str, contact_name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(contact_name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);
        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Score a name match from 0-95 (100 is reserved for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let a: Vec<char> = s1.chars().collect();
        let b: Vec<char> = s2.chars().collect();

        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        // Single rolling row.
        let mut row: Vec<usize> = (0..=b.len()).collect();
        for (i, ca) in a.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, cb) in b.iter().enumerate() {
                let cost = usize::from(ca != cb);
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }
        row[b.len()]
    }

    /// Lowercase and collapse whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ContactMatcher {
    fn default() -> Self {
        Self::new(30)
    }
}
