// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lectionary Calendar Module
//!
//! Resolves any Gregorian calendar date to its position in a two-year daily
//! lectionary: a period name, a day identifier, and the year of the cycle.
//!
//! # Core types
//!
//! - [`Resolver`] — the ordered chain of season rules.
//! - [`ResolvedPosition`] — `(period, day_identifier, year_cycle)` for a date.
//! - [`PositionStore`] — read-only access to stored lectionary rows.
//! - [`MemoryStore`] — an in-memory [`PositionStore`].
//! - [`MoveableFeasts`] — Easter and the feasts hung from it for one year.
//! - [`DatedWeekPeriod`] — a parsed "Week following Sun. between …" label.
//! - [`DateSpan`] — a half-open run of calendar days.
//! - [`CoverageReport`] — which periods a date range used, and its gaps.
//!
//! # Moveable feasts
//!
//! | Feast | Offset |
//! |-------|--------|
//! | Ash Wednesday | Easter − 46 |
//! | Palm Sunday | Easter − 7 |
//! | Ascension | Easter + 39 |
//! | Pentecost | Easter + 49 |
//! | Advent Sunday | fourth Sunday before Christmas Day |
//!
//! Easter itself comes from [`easter_sunday`], valid for years 1583–9999.
//!
//! # Year cycle
//!
//! A liturgical year starts on Advent Sunday. Years alternate between
//! [`YearCycle::One`] and [`YearCycle::Two`], anchored by default so that the
//! year beginning Advent 2024 is Year 1 (see [`CycleReference`]).
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lectio::{MemoryStore, Resolver, YearCycle};
//!
//! let resolver = Resolver::new(MemoryStore::new());
//! let pos = resolver
//!     .resolve(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap())
//!     .unwrap();
//! assert_eq!(pos.period, "1st Week of Advent");
//! assert_eq!(pos.day_identifier, "Sunday");
//! assert_eq!(pos.year_cycle, YearCycle::Two);
//! ```

pub mod civil;
pub mod computus;
pub mod config;
pub mod coverage;
pub mod cycle;
pub mod dated_week;
pub mod error;
pub mod feasts;
pub mod position;
pub mod resolver;
pub mod span;
pub mod store;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use civil::CalendarDate;
pub use computus::{easter_sunday, MAX_YEAR, MIN_YEAR};
pub use config::{ConfigError, CycleReference, ResolverConfig};
pub use coverage::CoverageReport;
pub use cycle::{liturgical_year, year_cycle};
pub use dated_week::DatedWeekPeriod;
pub use error::{CalendarError, LabelError, ResolveError, StoreError};
pub use feasts::{advent_sunday, baptism_of_the_lord, MoveableFeasts};
pub use position::{LiturgicalPosition, PeriodCategory, ResolvedPosition, YearCycle};
pub use resolver::{Resolver, Rule};
pub use span::{complement_within, DateSpan};
pub use store::{MemoryStore, PositionStore};
