// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coverage scans.
//!
//! Resolves every day of a date range and reports which periods were used
//! and which days no rule claimed. A complete calendar has no gaps; a gap
//! usually means the store lacks a dated-week label or a week cap is too
//! low.

use crate::civil::{inclusive_day_count, ymd, CalendarDate};
use crate::computus::validate_year;
use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::span::{complement_within, merge_days, DateSpan};
use crate::store::PositionStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Outcome of resolving every day of a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// The scanned days, `[start, end)`.
    pub span: DateSpan,
    /// Days resolved into each period.
    pub periods: BTreeMap<String, usize>,
    /// Every day that failed, with its error.
    pub failures: Vec<(NaiveDate, ResolveError)>,
    /// Maximal runs of unresolved days.
    pub gaps: Vec<DateSpan>,
}

impl CoverageReport {
    /// Scans `start..=end`.
    ///
    /// Unlike [`Resolver::resolve_range`] there is no length limit.
    ///
    /// # Errors
    ///
    /// [`ResolveError::InvalidRange`] if `start > end`.
    pub fn scan<S: PositionStore>(
        resolver: &Resolver<S>,
        start: impl CalendarDate,
        end: impl CalendarDate,
    ) -> Result<Self, ResolveError> {
        let (start, end) = (start.calendar_date(), end.calendar_date());
        if start > end {
            return Err(ResolveError::InvalidRange { start, end });
        }
        let span = DateSpan::inclusive(start, end);

        let mut periods = BTreeMap::new();
        let mut failures = Vec::new();
        let mut resolved = Vec::new();
        for date in span.days() {
            match resolver.resolve(date) {
                Ok(pos) => {
                    *periods.entry(pos.period).or_insert(0) += 1;
                    resolved.push(date);
                }
                Err(err) => failures.push((date, err)),
            }
        }

        let gaps = complement_within(span, &merge_days(resolved));
        debug!(
            %span,
            periods = periods.len(),
            failures = failures.len(),
            gaps = gaps.len(),
            "coverage scan finished"
        );
        Ok(CoverageReport {
            span,
            periods,
            failures,
            gaps,
        })
    }

    /// Scans calendar years `first_year..first_year + years`, Jan 1 to Dec 31.
    ///
    /// `years == 0` scans one year.
    ///
    /// # Errors
    ///
    /// [`CalendarError::YearOutOfRange`](crate::CalendarError::YearOutOfRange)
    /// if the first or last year falls outside 1583–9999.
    pub fn scan_years<S: PositionStore>(
        resolver: &Resolver<S>,
        first_year: i32,
        years: u32,
    ) -> Result<Self, ResolveError> {
        validate_year(first_year)?;
        let last_year = i32::try_from(years.max(1) - 1)
            .ok()
            .and_then(|extra| first_year.checked_add(extra))
            .unwrap_or(i32::MAX);
        validate_year(last_year)?;
        Self::scan(resolver, ymd(first_year, 1, 1)?, ymd(last_year, 12, 31)?)
    }

    pub fn total_days(&self) -> i64 {
        self.span.len_days()
    }

    pub fn resolved_days(&self) -> usize {
        self.periods.values().sum()
    }

    /// Whether every scanned day resolved.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Days resolved into `period`.
    pub fn days_in(&self, period: &str) -> usize {
        self.periods.get(period).copied().unwrap_or(0)
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.span.last_day().unwrap_or(self.span.start);
        writeln!(
            f,
            "Coverage {} to {}: {}/{} days resolved across {} periods",
            self.span.start,
            last,
            self.resolved_days(),
            self.total_days(),
            self.periods.len()
        )?;
        if self.gaps.is_empty() {
            return write!(f, "No gaps");
        }
        write!(f, "Gaps:")?;
        for gap in &self.gaps {
            let first = gap.start;
            let last = gap.last_day().unwrap_or(first);
            write!(
                f,
                "\n  {first} to {last} ({} days)",
                inclusive_day_count(first, last)
            )?;
        }
        Ok(())
    }
}
