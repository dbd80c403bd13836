// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Dated-week period labels.
//!
//! Between the Baptism of the Lord and Ash Wednesday the lectionary is keyed
//! by calendar anchors rather than by feasts:
//!
//! ```text
//! Week following Sun. between Feb. 11 and 17
//! ```
//!
//! names the week that begins on whichever Sunday falls in Feb 11–17 of the
//! current year. [`DatedWeekPeriod`] is the parsed form of such a label.
//!
//! An end day past the month's length rolls into the following month, so
//! "Feb. 25 and 29" covers Feb 25 – Mar 1 in a common year.

use crate::civil::{add_days, rolling_date};
use crate::error::{CalendarError, LabelError};
use crate::span::DateSpan;
use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*week following (?:the )?sun(?:\.|day) between (\w+)\.? (\d{1,2}) and (?:(\w+)\.? )?(\d{1,2})\s*$",
        )
        .expect("dated-week regex must compile")
    })
}

/// Month names and abbreviations accepted in labels, lowercase.
const MONTHS: [(&str, u32); 24] = [
    ("jan", 1),
    ("january", 1),
    ("feb", 2),
    ("february", 2),
    ("mar", 3),
    ("march", 3),
    ("apr", 4),
    ("april", 4),
    ("may", 5),
    ("jun", 6),
    ("june", 6),
    ("jul", 7),
    ("july", 7),
    ("aug", 8),
    ("august", 8),
    ("sep", 9),
    ("sept", 9),
    ("september", 9),
    ("oct", 10),
    ("october", 10),
    ("nov", 11),
    ("november", 11),
    ("dec", 12),
    ("december", 12),
];

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|(candidate, _)| *candidate == lower)
        .map(|&(_, month)| month)
}

/// A parsed "Week following Sun. between …" label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatedWeekPeriod {
    /// The label exactly as stored; used verbatim as the period name.
    pub label: String,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl DatedWeekPeriod {
    /// Parses a stored dated-week label.
    ///
    /// ```
    /// use lectio::DatedWeekPeriod;
    ///
    /// let week = DatedWeekPeriod::parse("Week following Sun. between Feb. 11 and 17").unwrap();
    /// assert_eq!((week.start_month, week.start_day), (2, 11));
    /// assert_eq!((week.end_month, week.end_day), (2, 17));
    /// ```
    pub fn parse(label: &str) -> Result<Self, LabelError> {
        let caps = label_re()
            .captures(label)
            .ok_or_else(|| LabelError::Pattern(label.to_string()))?;

        let start_name = &caps[1];
        let start_month =
            month_number(start_name).ok_or_else(|| LabelError::UnknownMonth(start_name.into()))?;
        let end_month = match caps.get(3) {
            Some(m) => month_number(m.as_str())
                .ok_or_else(|| LabelError::UnknownMonth(m.as_str().into()))?,
            None => start_month,
        };

        let day = |i: usize| -> Result<u32, LabelError> {
            caps[i]
                .parse::<u32>()
                .ok()
                .filter(|d| (1..=31).contains(d))
                .ok_or_else(|| LabelError::InvalidDay(label.to_string()))
        };
        let start_day = day(2)?;
        let end_day = day(4)?;

        if (end_month, end_day) < (start_month, start_day) {
            return Err(LabelError::InvalidDay(label.to_string()));
        }

        Ok(DatedWeekPeriod {
            label: label.to_string(),
            start_month,
            start_day,
            end_month,
            end_day,
        })
    }

    /// Inclusive anchor range in `year`, after month rollover.
    pub fn anchor_range(&self, year: i32) -> Result<(NaiveDate, NaiveDate), CalendarError> {
        Ok((
            rolling_date(year, self.start_month, self.start_day)?,
            rolling_date(year, self.end_month, self.end_day)?,
        ))
    }

    /// The first Sunday inside the anchor range of `year`, if any.
    ///
    /// A range shorter than a week may contain no Sunday at all.
    pub fn sunday_in(&self, year: i32) -> Result<Option<NaiveDate>, CalendarError> {
        let (first, last) = self.anchor_range(year)?;
        Ok(first
            .iter_days()
            .take_while(|d| *d <= last)
            .find(|d| d.weekday() == Weekday::Sun))
    }

    /// The Sunday-through-Saturday week this label names in `year`.
    pub fn week_in(&self, year: i32) -> Result<Option<DateSpan>, CalendarError> {
        Ok(self
            .sunday_in(year)?
            .map(|sunday| DateSpan::new(sunday, add_days(sunday, 7))))
    }
}

impl FromStr for DatedWeekPeriod {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatedWeekPeriod::parse(s)
    }
}

impl fmt::Display for DatedWeekPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(label: &str) -> DatedWeekPeriod {
        DatedWeekPeriod::parse(label).unwrap()
    }

    #[test]
    fn test_parse_stored_labels() {
        let week = parse("Week following Sun. between Feb. 25 and 29");
        assert_eq!(week.start_month, 2);
        assert_eq!(week.start_day, 25);
        assert_eq!(week.end_month, 2);
        assert_eq!(week.end_day, 29);
        assert_eq!(week.to_string(), "Week following Sun. between Feb. 25 and 29");
    }

    #[test]
    fn test_parse_variants() {
        let week = parse("week following Sunday between September 4 and 10");
        assert_eq!((week.start_month, week.start_day), (9, 4));

        let week = parse("Week following the Sun. between Sept. 4 and 10");
        assert_eq!(week.start_month, 9);

        let week = parse("Week following Sun. between May 29 and June 4");
        assert_eq!((week.end_month, week.end_day), (6, 4));

        let week: DatedWeekPeriod = "Week following Sun. between Nov. 6 and 12".parse().unwrap();
        assert_eq!(week.start_month, 11);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            DatedWeekPeriod::parse("3rd Week of Lent"),
            Err(LabelError::Pattern("3rd Week of Lent".into()))
        );
        assert_eq!(
            DatedWeekPeriod::parse("Week following Sun. between Foo. 4 and 10"),
            Err(LabelError::UnknownMonth("Foo".into()))
        );
        assert!(matches!(
            DatedWeekPeriod::parse("Week following Sun. between Feb. 0 and 6"),
            Err(LabelError::InvalidDay(_))
        ));
        assert!(matches!(
            DatedWeekPeriod::parse("Week following Sun. between Feb. 17 and 11"),
            Err(LabelError::InvalidDay(_))
        ));
    }

    #[test]
    fn test_sunday_in_february_2025() {
        let cases = [
            ("Week following Sun. between Feb. 4 and 10", Some(date(2025, 2, 9))),
            ("Week following Sun. between Feb. 11 and 17", Some(date(2025, 2, 16))),
            ("Week following Sun. between Feb. 18 and 24", Some(date(2025, 2, 23))),
            // Feb 25 – Mar 1 runs Tuesday to Saturday in 2025.
            ("Week following Sun. between Feb. 25 and 29", None),
        ];
        for (label, expected) in cases {
            assert_eq!(parse(label).sunday_in(2025).unwrap(), expected, "{label}");
        }
    }

    #[test]
    fn test_end_day_rolls_into_march() {
        let week = parse("Week following Sun. between Feb. 25 and 29");
        assert_eq!(
            week.anchor_range(2026).unwrap(),
            (date(2026, 2, 25), date(2026, 3, 1))
        );
        // 2026-03-01 is a Sunday reached only through the rollover.
        assert_eq!(week.sunday_in(2026).unwrap(), Some(date(2026, 3, 1)));
        assert_eq!(week.sunday_in(2024).unwrap(), Some(date(2024, 2, 25)));
        assert_eq!(week.sunday_in(2038).unwrap(), Some(date(2038, 2, 28)));
    }

    #[test]
    fn test_week_in_other_months() {
        let sept = parse("Week following Sun. between Sept. 4 and 10");
        assert_eq!(
            sept.week_in(2025).unwrap(),
            Some(DateSpan::new(date(2025, 9, 7), date(2025, 9, 14)))
        );
        let nov = parse("Week following Sun. between Nov. 6 and 12");
        assert_eq!(nov.sunday_in(2025).unwrap(), Some(date(2025, 11, 9)));
        let across = parse("Week following Sun. between May 29 and June 4");
        assert_eq!(across.sunday_in(2025).unwrap(), Some(date(2025, 6, 1)));
    }

    #[test]
    fn test_sunday_in_every_month() {
        let cases = [
            ("Week following Sun. between Jan. 4 and 10", date(2025, 1, 5)),
            ("Week following Sun. between February 4 and 10", date(2025, 2, 9)),
            ("Week following Sun. between Mar. 2 and 8", date(2025, 3, 2)),
            ("Week following Sun. between April 6 and 12", date(2025, 4, 6)),
            ("Week following Sun. between May 11 and 17", date(2025, 5, 11)),
            ("Week following Sun. between Jun. 8 and 14", date(2025, 6, 8)),
            ("Week following Sun. between July 13 and 19", date(2025, 7, 13)),
            ("Week following Sun. between Aug. 10 and 16", date(2025, 8, 10)),
            ("Week following Sun. between Sept. 21 and 27", date(2025, 9, 21)),
            ("Week following Sun. between October 5 and 11", date(2025, 10, 5)),
            ("Week following Sun. between Nov. 20 and 26", date(2025, 11, 23)),
            ("Week following Sun. between December 1 and 7", date(2025, 12, 7)),
        ];
        for (month, (label, sunday)) in (1..=12).zip(cases) {
            let week = parse(label);
            assert_eq!(week.start_month, month, "{label}");
            assert_eq!(week.sunday_in(2025).unwrap(), Some(sunday), "{label}");
            assert_eq!(
                week.week_in(2025).unwrap(),
                Some(DateSpan::starting(sunday, 7)),
                "{label}"
            );
        }
    }
}
