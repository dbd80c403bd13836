// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil-calendar helpers shared by every layer of the engine.
//!
//! Everything here is a pure function over [`NaiveDate`]. Inputs that carry a
//! time of day or an offset are normalised through [`CalendarDate`], which
//! keeps the date as seen on the caller's own wall clock; no timezone policy
//! is applied.

use crate::error::CalendarError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

/// English weekday names, indexed by days from Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// English month names, indexed by `month0`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// ── Normalisation ─────────────────────────────────────────────────────────

/// Anything that can be reduced to a time-free calendar date.
///
/// This is the single entry point through which the resolver accepts dates,
/// so the time-of-day component never reaches a comparison.
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use lectio::CalendarDate;
///
/// let evening = Utc.with_ymd_and_hms(2025, 4, 20, 23, 59, 59).unwrap();
/// assert_eq!(
///     evening.calendar_date(),
///     NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
/// );
/// ```
pub trait CalendarDate {
    /// The calendar date at midnight, with no time component.
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        (**self).calendar_date()
    }
}

// ── Naming ────────────────────────────────────────────────────────────────

/// Weekday name of `date` ("Sunday" … "Saturday").
#[inline]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Month-and-day label used as a day identifier, e.g. `"December 21"`.
pub fn month_day_label(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.day())
}

/// English ordinal of `n`: `1st`, `2nd`, `3rd`, `4th`, … `11th`, `12th`,
/// `13th`, … `21st`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

// ── Arithmetic ────────────────────────────────────────────────────────────

/// Signed number of days from `start` to `end` (positive when `end` is later).
#[inline]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Number of calendar days in `[start, end]`, counting both ends.
#[inline]
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    days_between(start, end) + 1
}

/// `date` shifted by `days` (negative moves backwards).
///
/// Callers stay inside the supported year range, far from chrono's limits.
#[inline]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + TimeDelta::days(days)
}

/// Whether two values fall on the same calendar day.
#[inline]
pub fn is_same_day(a: impl CalendarDate, b: impl CalendarDate) -> bool {
    a.calendar_date() == b.calendar_date()
}

/// Build a date, letting a day past the end of the month roll into the next
/// month (`Feb 29` of a common year is `Mar 1`).
pub fn rolling_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    if day == 0 {
        return Err(CalendarError::InvalidDate(format!(
            "{year:04}-{month:02}-00"
        )));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(chrono::Days::new(u64::from(day - 1))))
        .ok_or_else(|| CalendarError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// Build a strict calendar date.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CalendarError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

// ── ISO text ──────────────────────────────────────────────────────────────

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(text.trim(), ISO_DATE_FORMAT)
        .map_err(|e| CalendarError::InvalidDate(format!("{text:?}: {e}")))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
