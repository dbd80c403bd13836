// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Computus: the date of Easter Sunday
//!
//! Implements the *anonymous Gregorian algorithm* as published by J.-M. Oudin
//! (1940): a fixed sequence of integer divisions on the year, with no
//! iteration and no tables. Every moveable feast in this crate is an offset
//! from the date returned here.
//!
//! ## Valid range
//! Proleptic Gregorian years [`MIN_YEAR`]`..=`[`MAX_YEAR`]. The Gregorian
//! reform took effect in October 1582, so 1583 is the first full year.
//!
//! ## References
//! * Oudin, J.-M. (1940), *Bulletin Astronomique*, 12, 391–410.
//! * Seidelmann (ed.), *Explanatory Supplement to the Astronomical Almanac*
//!   (1992), §12.22.

use crate::error::CalendarError;
use chrono::NaiveDate;

/// First year of the Gregorian calendar supported by the engine.
pub const MIN_YEAR: i32 = 1583;

/// Last supported year.
pub const MAX_YEAR: i32 = 9999;

/// Rejects years outside [`MIN_YEAR`]`..=`[`MAX_YEAR`].
pub fn validate_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        })
    }
}

/// Month and day of Easter Sunday in `year`, without range checking.
///
/// Month is 3 or 4. Only meaningful for Gregorian years.
#[inline]
const fn easter_month_day(year: i32) -> (u32, u32) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// Easter Sunday of `year`.
///
/// # Errors
///
/// [`CalendarError::YearOutOfRange`] before 1583 or after 9999.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lectio::easter_sunday;
///
/// assert_eq!(
///     easter_sunday(2025).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
/// );
/// assert!(easter_sunday(1582).is_err());
/// ```
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    validate_year(year)?;
    let (month, day) = easter_month_day(year);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CalendarError::InvalidDate(format!("computus produced {year:04}-{month:02}-{day:02}"))
    })
}
