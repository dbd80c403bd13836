// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Half-open calendar date spans.
//!
//! Every season boundary in the resolver is expressed as a [`DateSpan`]
//! `[start, end)`: the start day belongs to the span, the end day belongs to
//! whatever comes next. Using one type for all of them keeps boundary days
//! such as Advent Sunday from being claimed twice.

use crate::civil::{add_days, days_between};
use chrono::NaiveDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A run of calendar days `[start, end)`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lectio::DateSpan;
///
/// let advent = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// let season = DateSpan::new(advent, christmas);
///
/// assert!(season.contains(advent));
/// assert!(!season.contains(christmas));
/// assert_eq!(season.len_days(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    /// Creates the span `[start, end)`.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateSpan { start, end }
    }

    /// Creates the span covering `first..=last`.
    pub fn inclusive(first: NaiveDate, last: NaiveDate) -> Self {
        DateSpan::new(first, add_days(last, 1))
    }

    /// A span of `days` days beginning on `start`.
    pub fn starting(start: NaiveDate, days: i64) -> Self {
        DateSpan::new(start, add_days(start, days))
    }

    /// Whether `date` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Number of days in the span (zero when `end <= start`).
    pub fn len_days(&self) -> i64 {
        days_between(self.start, self.end).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len_days() == 0
    }

    /// Last day inside the span, if any.
    pub fn last_day(&self) -> Option<NaiveDate> {
        (!self.is_empty()).then(|| add_days(self.end, -1))
    }

    /// Whole days elapsed between the span start and `date`.
    #[inline]
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        days_between(self.start, date)
    }

    /// Iterates the days of the span in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }

    /// Returns the overlapping sub-span of `self` and `other`.
    ///
    /// Spans that merely touch (`a.end == b.start`) do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if start < end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Returns the gaps (complement) of `spans` within the bounding `outer` span.
///
/// `spans` must be sorted and non-overlapping. Runs in a single pass.
pub fn complement_within(outer: DateSpan, spans: &[DateSpan]) -> Vec<DateSpan> {
    let mut gaps = Vec::new();
    let mut cursor = outer.start;
    for s in spans {
        if s.start > cursor {
            gaps.push(DateSpan::new(cursor, s.start.min(outer.end)));
        }
        if s.end > cursor {
            cursor = s.end;
        }
        if cursor >= outer.end {
            break;
        }
    }
    if cursor < outer.end {
        gaps.push(DateSpan::new(cursor, outer.end));
    }
    gaps.retain(|g| !g.is_empty());
    gaps
}

/// Collapses a sorted sequence of days into maximal contiguous spans.
pub fn merge_days(days: impl IntoIterator<Item = NaiveDate>) -> Vec<DateSpan> {
    let mut spans: Vec<DateSpan> = Vec::new();
    for day in days {
        match spans.last_mut() {
            Some(last) if last.end == day => last.end = add_days(day, 1),
            _ => spans.push(DateSpan::inclusive(day, day)),
        }
    }
    spans
}
