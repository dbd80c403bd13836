// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Liturgical year and two-year cycle of a date.
//!
//! A liturgical year begins on Advent Sunday and is named by the calendar
//! year in which that Sunday falls: 2025-01-15 belongs to liturgical year
//! 2024, 2025-11-30 (Advent Sunday) starts 2025. Consecutive liturgical years
//! alternate between [`YearCycle::One`] and [`YearCycle::Two`].

use crate::civil::CalendarDate;
use crate::config::CycleReference;
use crate::error::CalendarError;
use crate::feasts::advent_sunday;
use crate::position::YearCycle;
use chrono::Datelike;

/// Liturgical year containing `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use lectio::cycle::liturgical_year;
///
/// let before = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
/// let advent = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
/// assert_eq!(liturgical_year(before).unwrap(), 2024);
/// assert_eq!(liturgical_year(advent).unwrap(), 2025);
/// ```
pub fn liturgical_year(date: impl CalendarDate) -> Result<i32, CalendarError> {
    let date = date.calendar_date();
    let year = date.year();
    if date < advent_sunday(year)? {
        Ok(year - 1)
    } else {
        Ok(year)
    }
}

/// Reading cycle of `date` relative to `reference`.
///
/// Parity uses the Euclidean remainder, so years before the reference
/// alternate the same way as years after it.
pub fn year_cycle(
    date: impl CalendarDate,
    reference: CycleReference,
) -> Result<YearCycle, CalendarError> {
    let year = liturgical_year(date)?;
    Ok(cycle_of_year(year, reference))
}

/// Cycle of liturgical year `year` relative to `reference`.
#[inline]
pub fn cycle_of_year(year: i32, reference: CycleReference) -> YearCycle {
    if (year - reference.year).rem_euclid(2) == 0 {
        reference.cycle
    } else {
        reference.cycle.other()
    }
}
