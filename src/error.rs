// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! Each layer has its own error enum so callers can match on exactly what
//! they can act on:
//!
//! - [`CalendarError`] — date arithmetic and computus inputs.
//! - [`LabelError`] — a dated-week label that cannot be parsed. Never fatal
//!   to a resolution; the resolver skips the label.
//! - [`StoreError`] — the storage collaborator failed.
//! - [`ResolveError`] — what [`Resolver`](crate::Resolver) hands back.

use chrono::NaiveDate;

/// Errors from calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year is outside the supported proleptic Gregorian range.
    #[error("year {year} is out of range (must be between {min} and {max})")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// A date could not be built or parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Errors from parsing a dated-week period label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// The label does not have the "Week following Sun. between ..." shape.
    #[error("not a dated week label: {0:?}")]
    Pattern(String),

    /// The embedded month name is not in the month table.
    #[error("unknown month {0:?}")]
    UnknownMonth(String),

    /// A day number is zero or does not fit the month table.
    #[error("invalid day in label {0:?}")]
    InvalidDay(String),
}

/// Errors reported by a [`PositionStore`](crate::PositionStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not answer the query.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by date resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No rule in the chain claimed the date.
    #[error("could not resolve {0} to a lectionary position")]
    Unresolvable(NaiveDate),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A storage read failed and no later rule claimed the date.
    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("range start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("range spans {days} days (limit is {max})")]
    RangeTooLarge { days: i64, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_out_of_range_display() {
        let err = CalendarError::YearOutOfRange {
            year: 1500,
            min: 1583,
            max: 9999,
        };
        assert_eq!(
            err.to_string(),
            "year 1500 is out of range (must be between 1583 and 9999)"
        );
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err: ResolveError = StoreError::Unavailable("db locked".into()).into();
        assert_eq!(err.to_string(), "storage unavailable: db locked");
    }

    #[test]
    fn test_unresolvable_names_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(
            ResolveError::Unresolvable(date).to_string(),
            "could not resolve 2025-03-02 to a lectionary position"
        );
    }
}
