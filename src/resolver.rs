// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Date resolution chain
//!
//! Maps a calendar date onto the lectionary grid by walking an ordered list
//! of season rules. The first rule that claims the date wins; later rules
//! never see it. Seasons overlap at their edges (Christmas Day is both a
//! fixed day and the first day of the Christmas season), so the order below
//! is part of the contract:
//!
//! | # | Rule | Range | Day identifier |
//! |---|------|-------|----------------|
//! | 1 | [`Rule::FixedDay`] | Dec 25, Jan 6 (stored rows only) | as stored |
//! | 2 | [`Rule::Advent`] | `[Advent, Dec 25)` | weekday; literal date in week 4 |
//! | 3 | [`Rule::ChristmasSeason`] | Dec 25–31, Jan 1–5 | literal date |
//! | 4 | [`Rule::Epiphany`] | Jan 6–12 | literal date |
//! | 5 | [`Rule::Baptism`] | Baptism Sunday + weeks after, before Ash Wednesday | weekday |
//! | 6 | [`Rule::DatedWeek`] | stored dated weeks, before Ash Wednesday | weekday |
//! | 7 | [`Rule::AshWednesday`] | Ash Wednesday + 0..=3 | weekday |
//! | 8 | [`Rule::Lent`] | `[Ash Wednesday + 4, Palm Sunday)` | weekday |
//! | 9 | [`Rule::HolyWeek`] | `[Palm Sunday, Easter)` | weekday |
//! | 10 | [`Rule::Easter`] | `[Easter, Pentecost)` | weekday |
//! | 11 | [`Rule::Pentecost`] | `[Pentecost, Advent)` | weekday |
//!
//! All moveable feasts are taken from the date's own calendar year. The year
//! cycle is attached afterwards from the date's liturgical year.
//!
//! ## Storage failures
//! Rules 1 and 6 read storage. When a read fails the rule logs a warning and
//! defers; if no later rule claims the date the first storage error is
//! returned as [`ResolveError::Storage`].

use crate::civil::{days_between, month_day_label, ordinal, weekday_name, CalendarDate};
use crate::config::{ConfigError, ResolverConfig};
use crate::cycle::year_cycle;
use crate::dated_week::DatedWeekPeriod;
use crate::error::{ResolveError, StoreError};
use crate::feasts::{baptism_of_the_lord, MoveableFeasts};
use crate::position::{labels, PeriodCategory, ResolvedPosition};
use crate::span::DateSpan;
use crate::store::PositionStore;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace, warn};

// ── Rules ─────────────────────────────────────────────────────────────────

/// One link of the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    FixedDay,
    Advent,
    ChristmasSeason,
    Epiphany,
    Baptism,
    DatedWeek,
    AshWednesday,
    Lent,
    HolyWeek,
    Easter,
    Pentecost,
}

impl Rule {
    /// Evaluation order of the chain.
    pub const ORDER: [Rule; 11] = [
        Rule::FixedDay,
        Rule::Advent,
        Rule::ChristmasSeason,
        Rule::Epiphany,
        Rule::Baptism,
        Rule::DatedWeek,
        Rule::AshWednesday,
        Rule::Lent,
        Rule::HolyWeek,
        Rule::Easter,
        Rule::Pentecost,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Rule::FixedDay => "fixed day",
            Rule::Advent => "advent",
            Rule::ChristmasSeason => "christmas season",
            Rule::Epiphany => "epiphany",
            Rule::Baptism => "baptism of the lord",
            Rule::DatedWeek => "dated week",
            Rule::AshWednesday => "ash wednesday",
            Rule::Lent => "lent",
            Rule::HolyWeek => "holy week",
            Rule::Easter => "easter",
            Rule::Pentecost => "pentecost",
        }
    }

    /// Whether this rule reads storage.
    pub const fn reads_storage(self) -> bool {
        matches!(self, Rule::FixedDay | Rule::DatedWeek)
    }

    fn claim<S: PositionStore>(self, ctx: &Context<'_, S>) -> Result<Option<Claim>, StoreError> {
        Ok(match self {
            Rule::FixedDay => return fixed_day(ctx),
            Rule::Advent => advent(ctx),
            Rule::ChristmasSeason => christmas_season(ctx),
            Rule::Epiphany => epiphany(ctx),
            Rule::Baptism => baptism(ctx),
            Rule::DatedWeek => return dated_week(ctx),
            Rule::AshWednesday => ash_wednesday(ctx),
            Rule::Lent => lent(ctx),
            Rule::HolyWeek => holy_week(ctx),
            Rule::Easter => easter(ctx),
            Rule::Pentecost => pentecost(ctx),
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule's answer before the year cycle is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Claim {
    period: String,
    day_identifier: String,
}

impl Claim {
    fn new(period: impl Into<String>, day_identifier: impl Into<String>) -> Self {
        Claim {
            period: period.into(),
            day_identifier: day_identifier.into(),
        }
    }
}

/// Everything a rule may look at for one date.
struct Context<'a, S> {
    date: NaiveDate,
    feasts: MoveableFeasts,
    christmas: NaiveDate,
    baptism: NaiveDate,
    config: &'a ResolverConfig,
    store: &'a S,
}

impl<'a, S> Context<'a, S> {
    fn new(
        date: NaiveDate,
        config: &'a ResolverConfig,
        store: &'a S,
    ) -> Result<Self, ResolveError> {
        let feasts = MoveableFeasts::for_year(date.year())?;
        Ok(Context {
            date,
            christmas: feasts.christmas()?,
            baptism: baptism_of_the_lord(date.year())?,
            feasts,
            config,
            store,
        })
    }

    #[inline]
    fn weekday(&self) -> &'static str {
        weekday_name(self.date)
    }

    #[inline]
    fn month_day(&self) -> (u32, u32) {
        (self.date.month(), self.date.day())
    }

    #[inline]
    fn before_lent(&self) -> bool {
        self.date < self.feasts.ash_wednesday
    }
}

// ── Rule bodies ───────────────────────────────────────────────────────────

fn fixed_day<S: PositionStore>(ctx: &Context<'_, S>) -> Result<Option<Claim>, StoreError> {
    let stored = match ctx.month_day() {
        (12, 25) => {
            match ctx
                .store
                .lookup_fixed_position(labels::CHRISTMAS, labels::CHRISTMAS_DAY)
            {
                Ok(Some(row)) => Some(row),
                Ok(None) => ctx
                    .store
                    .lookup_fixed_position(labels::CHRISTMAS, ctx.weekday())?,
                // The weekday row is still tried; the date-row error stands if
                // that row is missing.
                Err(err) => {
                    warn!(
                        date = %ctx.date,
                        error = %err,
                        "Christmas Day row unreadable, trying weekday row"
                    );
                    match ctx
                        .store
                        .lookup_fixed_position(labels::CHRISTMAS, ctx.weekday())?
                    {
                        Some(row) => Some(row),
                        None => return Err(err),
                    }
                }
            }
        }
        (1, 6) => ctx
            .store
            .lookup_fixed_position(labels::EPIPHANY, labels::EPIPHANY_DAY)?,
        _ => None,
    };
    Ok(stored.map(|row| Claim::new(row.period, row.day_identifier)))
}

fn advent<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    let season = DateSpan::new(ctx.feasts.advent, ctx.christmas);
    if !season.contains(ctx.date) {
        return None;
    }
    let week = season.offset_of(ctx.date) / 7 + 1;
    let period = format!("{} Week of Advent", ordinal(week as u32));
    // Week 4 is keyed by calendar date.
    if week >= 4 {
        Some(Claim::new(period, month_day_label(ctx.date)))
    } else {
        Some(Claim::new(period, ctx.weekday()))
    }
}

fn christmas_season<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    match ctx.month_day() {
        (12, 25..=31) | (1, 1..=5) => Some(Claim::new(
            labels::CHRISTMAS_SEASON,
            month_day_label(ctx.date),
        )),
        _ => None,
    }
}

fn epiphany<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    match ctx.month_day() {
        (1, 6..=12) => Some(Claim::new(labels::EPIPHANY, month_day_label(ctx.date))),
        _ => None,
    }
}

fn baptism<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    if !ctx.before_lent() {
        return None;
    }
    let n = days_between(ctx.baptism, ctx.date);
    match n {
        0 => Some(Claim::new(labels::BAPTISM, labels::SUNDAY)),
        n if n > 0 => {
            let week = n / 7 + 1;
            (week <= i64::from(ctx.config.max_weeks_after_baptism)).then(|| {
                Claim::new(
                    format!("Week {week} after Baptism of the Lord"),
                    ctx.weekday(),
                )
            })
        }
        _ => None,
    }
}

fn dated_week<S: PositionStore>(ctx: &Context<'_, S>) -> Result<Option<Claim>, StoreError> {
    if !ctx.before_lent() {
        return Ok(None);
    }
    let labels = ctx.store.list_periods_by_category(PeriodCategory::Dated)?;
    let weeks = dated_weeks(labels, ctx.date.year());

    if let Some((label, _)) = weeks.iter().find(|(_, week)| week.contains(ctx.date)) {
        return Ok(Some(Claim::new(label.as_str(), ctx.weekday())));
    }

    if ctx.config.carry_last_dated_week {
        let latest = weeks
            .iter()
            .filter(|(_, week)| week.start < ctx.date)
            .max_by_key(|(_, week)| week.start);
        if let Some((label, week)) = latest {
            trace!(date = %ctx.date, %label, %week, "carrying last dated week");
            return Ok(Some(Claim::new(label.as_str(), ctx.weekday())));
        }
    }
    Ok(None)
}

/// Parses distinct labels and locates each week in `year`.
///
/// Malformed labels and labels whose range holds no Sunday are skipped.
fn dated_weeks(labels: Vec<String>, year: i32) -> Vec<(String, DateSpan)> {
    let mut seen = HashSet::new();
    let mut weeks = Vec::new();
    for label in labels {
        if !seen.insert(label.clone()) {
            continue;
        }
        let period = match DatedWeekPeriod::parse(&label) {
            Ok(period) => period,
            Err(err) => {
                warn!(%label, error = %err, "skipping malformed dated-week label");
                continue;
            }
        };
        match period.week_in(year) {
            Ok(Some(week)) => weeks.push((period.label, week)),
            Ok(None) => trace!(%label, year, "no Sunday in dated-week range"),
            Err(err) => warn!(%label, year, error = %err, "cannot place dated week"),
        }
    }
    weeks
}

fn ash_wednesday<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    let days = DateSpan::starting(ctx.feasts.ash_wednesday, 4);
    days.contains(ctx.date)
        .then(|| Claim::new(labels::ASH_WEDNESDAY, ctx.weekday()))
}

fn lent<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    let season = DateSpan::new(ctx.feasts.first_sunday_of_lent(), ctx.feasts.palm_sunday);
    if !season.contains(ctx.date) {
        return None;
    }
    let week = season.offset_of(ctx.date) / 7 + 1;
    Some(Claim::new(
        format!("{} Week of Lent", ordinal(week as u32)),
        ctx.weekday(),
    ))
}

fn holy_week<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    DateSpan::new(ctx.feasts.palm_sunday, ctx.feasts.easter)
        .contains(ctx.date)
        .then(|| Claim::new(labels::HOLY_WEEK, ctx.weekday()))
}

fn easter<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    let season = DateSpan::new(ctx.feasts.easter, ctx.feasts.pentecost);
    if !season.contains(ctx.date) {
        return None;
    }
    let week = season.offset_of(ctx.date) / 7 + 1;
    let period = if week == 1 {
        labels::EASTER_WEEK.to_string()
    } else {
        format!("{} Week of Easter", ordinal(week as u32))
    };
    Some(Claim::new(period, ctx.weekday()))
}

fn pentecost<S>(ctx: &Context<'_, S>) -> Option<Claim> {
    let season = DateSpan::new(ctx.feasts.pentecost, ctx.feasts.advent);
    if !season.contains(ctx.date) {
        return None;
    }
    let n = season.offset_of(ctx.date);
    let claim = match n {
        0 => Claim::new(labels::PENTECOST, labels::SUNDAY),
        1..=6 => Claim::new(labels::WEEK_1_AFTER_PENTECOST, ctx.weekday()),
        7 => Claim::new(labels::TRINITY, labels::SUNDAY),
        _ if ctx.date == ctx.feasts.christ_the_king() => {
            Claim::new(labels::CHRIST_THE_KING, labels::SUNDAY)
        }
        _ => {
            let week = ((n - 7) / 7 + 2).min(i64::from(ctx.config.max_weeks_after_pentecost));
            Claim::new(format!("Week {week} after Pentecost"), ctx.weekday())
        }
    };
    Some(claim)
}

// ── Resolver ──────────────────────────────────────────────────────────────

/// Resolves calendar dates to lectionary positions.
///
/// Holds a store and a configuration and nothing else; every call
/// recomputes the feasts it needs.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lectio::{MemoryStore, Resolver, YearCycle};
///
/// let resolver = Resolver::new(MemoryStore::new());
/// let pos = resolver
///     .resolve(NaiveDate::from_ymd_opt(2025, 4, 18).unwrap())
///     .unwrap();
///
/// assert_eq!(pos.period, "Holy Week");
/// assert_eq!(pos.day_identifier, "Friday");
/// assert_eq!(pos.year_cycle, YearCycle::One);
/// assert_eq!(pos.observance(), Some("Good Friday"));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<S> {
    store: S,
    config: ResolverConfig,
}

impl<S: PositionStore> Resolver<S> {
    /// A resolver with the default configuration.
    pub fn new(store: S) -> Self {
        Resolver {
            store,
            config: ResolverConfig::default(),
        }
    }

    /// A resolver with a custom, validated configuration.
    pub fn with_config(store: S, config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Resolver { store, config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves one date.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Calendar`] for years outside 1583–9999.
    /// - [`ResolveError::Storage`] when a storage read failed and no other
    ///   rule claimed the date.
    /// - [`ResolveError::Unresolvable`] when no rule claimed the date.
    pub fn resolve(&self, date: impl CalendarDate) -> Result<ResolvedPosition, ResolveError> {
        let date = date.calendar_date();
        let ctx = Context::new(date, &self.config, &self.store)?;
        let mut deferred: Option<StoreError> = None;

        for rule in Rule::ORDER {
            match rule.claim(&ctx) {
                Ok(Some(claim)) => {
                    let cycle = year_cycle(date, self.config.reference)?;
                    debug!(
                        %date,
                        rule = rule.name(),
                        period = %claim.period,
                        day = %claim.day_identifier,
                        cycle = cycle.number(),
                        "resolved"
                    );
                    return Ok(ResolvedPosition::new(
                        claim.period,
                        claim.day_identifier,
                        cycle,
                    ));
                }
                Ok(None) => trace!(%date, rule = rule.name(), "deferred"),
                Err(err) => {
                    warn!(%date, rule = rule.name(), error = %err, "storage read failed, deferring");
                    deferred.get_or_insert(err);
                }
            }
        }

        Err(match deferred {
            Some(err) => ResolveError::Storage(err),
            None => ResolveError::Unresolvable(date),
        })
    }

    /// Resolves every day of `start..=end`.
    ///
    /// A failure on one day is kept in its slot and does not stop the rest.
    ///
    /// # Errors
    ///
    /// [`ResolveError::InvalidRange`] if `start > end`;
    /// [`ResolveError::RangeTooLarge`] if the dates are more than
    /// `max_range_days` apart.
    pub fn resolve_range(
        &self,
        start: impl CalendarDate,
        end: impl CalendarDate,
    ) -> Result<Vec<(NaiveDate, Result<ResolvedPosition, ResolveError>)>, ResolveError> {
        let (start, end) = (start.calendar_date(), end.calendar_date());
        if start > end {
            return Err(ResolveError::InvalidRange { start, end });
        }
        let days = days_between(start, end);
        if days > i64::from(self.config.max_range_days) {
            return Err(ResolveError::RangeTooLarge {
                days,
                max: self.config.max_range_days,
            });
        }

        Ok(DateSpan::inclusive(start, end)
            .days()
            .map(|date| {
                let result = self.resolve(date);
                if let Err(err) = &result {
                    warn!(%date, error = %err, "day in range did not resolve");
                }
                (date, result)
            })
            .collect())
    }

    /// Every rule that would claim `date`, in chain order.
    ///
    /// The first entry is the rule [`resolve`](Self::resolve) uses; the rest
    /// are the overlaps the order shadows.
    pub fn matching_rules(&self, date: impl CalendarDate) -> Result<Vec<Rule>, ResolveError> {
        let ctx = Context::new(date.calendar_date(), &self.config, &self.store)?;
        let mut matches = Vec::new();
        for rule in Rule::ORDER {
            if rule.claim(&ctx)?.is_some() {
                matches.push(rule);
            }
        }
        Ok(matches)
    }
}
