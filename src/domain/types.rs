//! Strongly-typed value objects used by the filter engine.
//!
//! Filter inputs are parsed into these wrappers at the form boundary so the
//! engine itself only ever sees well-formed needles and date bounds.
use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string was empty.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is not a recognised date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses an ISO-like date string.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps. Only the calendar date is kept.
pub fn parse_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT).map(|dt| dt.date()))
        .map_err(|_| TypeConstraintError::InvalidDate(trimmed.to_string()))
}

/// Case-insensitive substring needle.
///
/// The raw text is kept for echoing back to the UI, the lower-cased copy is
/// what gets matched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    /// Rejects empty input. Whitespace is significant and kept as typed.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let needle = raw.to_lowercase();
        Ok(Self { raw, needle })
    }

    /// Borrow the text as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` when `haystack` contains the term, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl TryFrom<String> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Closed calendar range, inclusive at both ends.
///
/// An inverted range (`start > end`) is representable and contains nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_date_accepts_iso_variants() {
        assert_eq!(parse_date("2023-01-01").unwrap(), date(2023, 1, 1));
        assert_eq!(parse_date(" 2023-02-03 ").unwrap(), date(2023, 2, 3));
        assert_eq!(
            parse_date("2023-03-04T10:20:30Z").unwrap(),
            date(2023, 3, 4)
        );
        assert_eq!(
            parse_date("2023-03-04T23:00:00+02:00").unwrap(),
            date(2023, 3, 4)
        );
        assert_eq!(parse_date("2023-05-06T07:08:09").unwrap(), date(2023, 5, 6));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date(""), Err(TypeConstraintError::EmptyString));
        assert!(matches!(
            parse_date("yesterday"),
            Err(TypeConstraintError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date("2023-13-01"),
            Err(TypeConstraintError::InvalidDate(_))
        ));
    }

    #[test]
    fn search_term_is_case_insensitive() {
        let term = SearchTerm::new("LEE").unwrap();
        assert!(term.matches("Ann Lee"));
        assert!(!term.matches("Ann Le"));
        assert_eq!(term.as_str(), "LEE");
        assert_eq!(SearchTerm::new(""), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn date_range_is_inclusive() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 31));
        assert!(range.contains(date(2023, 1, 1)));
        assert!(range.contains(date(2023, 1, 31)));
        assert!(!range.contains(date(2023, 2, 1)));
        assert!(!range.contains(date(2022, 12, 31)));

        let inverted = DateRange::new(date(2023, 2, 1), date(2023, 1, 1));
        assert!(!inverted.contains(date(2023, 1, 15)));
    }
}
