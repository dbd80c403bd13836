// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Moveable feasts derived from Easter and from Christmas Day.
//!
//! | Feast | Rule |
//! |-------|------|
//! | Advent Sunday | fourth Sunday before Christmas Day (Nov 27 – Dec 3) |
//! | Ash Wednesday | Easter − 46 days |
//! | Palm Sunday | Easter − 7 days |
//! | Ascension | Easter + 39 days |
//! | Pentecost | Easter + 49 days |
//!
//! All offsets are exact day counts on time-free dates.

use crate::civil::{add_days, ymd, MONTH_NAMES};
use crate::computus::easter_sunday;
use crate::error::CalendarError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Days from Easter back to Ash Wednesday (40 days of Lent plus 6 Sundays).
pub const DAYS_EASTER_TO_ASH_WEDNESDAY: i64 = 46;

/// Days from Easter back to Palm Sunday.
pub const DAYS_EASTER_TO_PALM_SUNDAY: i64 = 7;

/// Days from Easter forward to Ascension Thursday.
pub const DAYS_EASTER_TO_ASCENSION: i64 = 39;

/// Days from Easter forward to Pentecost.
pub const DAYS_EASTER_TO_PENTECOST: i64 = 49;

/// Days from `date` back to the Sunday strictly before it.
#[inline]
fn days_since_previous_sunday(date: NaiveDate) -> i64 {
    match date.weekday().num_days_from_sunday() {
        0 => 7,
        n => i64::from(n),
    }
}

/// First Sunday of Advent in `year`.
///
/// The fourth Sunday strictly before Christmas Day, i.e. the Sunday nearest
/// St Andrew's Day (Nov 30). Depends only on the weekday of Christmas.
///
/// ```
/// use chrono::NaiveDate;
/// use lectio::advent_sunday;
///
/// assert_eq!(advent_sunday(2024).unwrap(), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
/// assert_eq!(advent_sunday(2025).unwrap(), NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
/// ```
pub fn advent_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let christmas = ymd(year, 12, 25)?;
    Ok(add_days(christmas, -(days_since_previous_sunday(christmas) + 21)))
}

/// The Sunday falling on January 7–13 of `year` (Baptism of the Lord).
pub fn baptism_of_the_lord(year: i32) -> Result<NaiveDate, CalendarError> {
    let jan7 = ymd(year, 1, 7)?;
    let ahead = (7 - jan7.weekday().num_days_from_sunday()) % 7;
    Ok(add_days(jan7, i64::from(ahead)))
}

/// The moveable feasts of one calendar year.
///
/// Computed fresh for each resolution; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveableFeasts {
    pub year: i32,
    pub easter: NaiveDate,
    pub advent: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub ascension: NaiveDate,
    pub pentecost: NaiveDate,
}

impl MoveableFeasts {
    /// Computes every moveable feast of calendar year `year`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::YearOutOfRange`] outside 1583–9999.
    pub fn for_year(year: i32) -> Result<Self, CalendarError> {
        let easter = easter_sunday(year)?;
        Ok(MoveableFeasts {
            year,
            easter,
            advent: advent_sunday(year)?,
            ash_wednesday: add_days(easter, -DAYS_EASTER_TO_ASH_WEDNESDAY),
            palm_sunday: add_days(easter, -DAYS_EASTER_TO_PALM_SUNDAY),
            ascension: add_days(easter, DAYS_EASTER_TO_ASCENSION),
            pentecost: add_days(easter, DAYS_EASTER_TO_PENTECOST),
        })
    }

    /// The Sunday after Ash Wednesday.
    #[inline]
    pub fn first_sunday_of_lent(&self) -> NaiveDate {
        add_days(self.ash_wednesday, 4)
    }

    /// The last Sunday before Advent.
    #[inline]
    pub fn christ_the_king(&self) -> NaiveDate {
        add_days(self.advent, -7)
    }

    /// The Sunday after Pentecost.
    #[inline]
    pub fn trinity_sunday(&self) -> NaiveDate {
        add_days(self.pentecost, 7)
    }

    /// Christmas Day of the same calendar year.
    pub fn christmas(&self) -> Result<NaiveDate, CalendarError> {
        ymd(self.year, 12, 25)
    }

    /// Baptism of the Lord of the same calendar year.
    pub fn baptism_of_the_lord(&self) -> Result<NaiveDate, CalendarError> {
        baptism_of_the_lord(self.year)
    }
}

fn short(date: NaiveDate) -> String {
    format!("{} {}", &MONTH_NAMES[date.month0() as usize][..3], date.day())
}

impl fmt::Display for MoveableFeasts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Key dates for {}:", self.year)?;
        writeln!(f, "  Ash Wednesday:   {}", short(self.ash_wednesday))?;
        writeln!(f, "  Palm Sunday:     {}", short(self.palm_sunday))?;
        writeln!(f, "  Easter:          {}", short(self.easter))?;
        writeln!(f, "  Ascension:       {}", short(self.ascension))?;
        writeln!(f, "  Pentecost:       {}", short(self.pentecost))?;
        write!(f, "  Advent Sunday:   {}", short(self.advent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_feasts_2025() {
        let f = MoveableFeasts::for_year(2025).unwrap();
        assert_eq!(f.easter, date(2025, 4, 20));
        assert_eq!(f.ash_wednesday, date(2025, 3, 5));
        assert_eq!(f.palm_sunday, date(2025, 4, 13));
        assert_eq!(f.ascension, date(2025, 5, 29));
        assert_eq!(f.pentecost, date(2025, 6, 8));
        assert_eq!(f.advent, date(2025, 11, 30));
        assert_eq!(f.christ_the_king(), date(2025, 11, 23));
        assert_eq!(f.first_sunday_of_lent(), date(2025, 3, 9));
        assert_eq!(f.trinity_sunday(), date(2025, 6, 15));
    }

    #[test]
    fn test_advent_sunday_known_years() {
        let cases = [
            (2022, date(2022, 11, 27)),
            (2023, date(2023, 12, 3)),
            (2024, date(2024, 12, 1)),
            (2025, date(2025, 11, 30)),
            (2026, date(2026, 11, 29)),
            (2027, date(2027, 11, 28)),
            (2028, date(2028, 12, 3)),
        ];
        for (year, expected) in cases {
            assert_eq!(advent_sunday(year).unwrap(), expected, "Advent {year}");
        }
    }

    #[test]
    fn test_advent_sunday_window() {
        for year in 1583..=2600 {
            let advent = advent_sunday(year).unwrap();
            assert_eq!(advent.weekday(), Weekday::Sun);
            assert!(advent >= date(year, 11, 27) && advent <= date(year, 12, 3));
        }
    }

    #[test]
    fn test_feast_weekdays() {
        for year in [1700, 1999, 2024, 2025, 2038, 2100, 3000] {
            let f = MoveableFeasts::for_year(year).unwrap();
            assert_eq!(f.ash_wednesday.weekday(), Weekday::Wed);
            assert_eq!(f.palm_sunday.weekday(), Weekday::Sun);
            assert_eq!(f.ascension.weekday(), Weekday::Thu);
            assert_eq!(f.pentecost.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_baptism_of_the_lord() {
        assert_eq!(baptism_of_the_lord(2024).unwrap(), date(2024, 1, 7));
        assert_eq!(baptism_of_the_lord(2025).unwrap(), date(2025, 1, 12));
        assert_eq!(baptism_of_the_lord(2026).unwrap(), date(2026, 1, 11));
        assert_eq!(baptism_of_the_lord(2019).unwrap(), date(2019, 1, 13));
    }

    #[test]
    fn test_out_of_range_year() {
        assert!(MoveableFeasts::for_year(1582).is_err());
        // Advent does not depend on Easter.
        assert_eq!(advent_sunday(1582).unwrap().weekday(), Weekday::Sun);
    }

    #[test]
    fn test_display_lists_key_dates() {
        let text = MoveableFeasts::for_year(2025).unwrap().to_string();
        assert!(text.starts_with("Key dates for 2025:"));
        assert!(text.contains("Easter:          Apr 20"));
        assert!(text.contains("Advent Sunday:   Nov 30"));
    }
}
