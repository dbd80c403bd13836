// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lectionary positions: what the resolver produces and what storage holds.
//!
//! - [`ResolvedPosition`] — output of a resolution: period, day identifier,
//!   and [`YearCycle`]. The composite key for fetching readings.
//! - [`LiturgicalPosition`] — one stored cell of the two-year grid, keyed by
//!   `(period, day_identifier)` and shared by both cycles.
//! - [`PeriodCategory`] — how a stored period relates to the calendar.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Period and day labels produced by the resolver.
///
/// These strings are keys into the stored lectionary and must match it
/// byte for byte.
pub mod labels {
    pub const CHRISTMAS: &str = "Christmas";
    pub const CHRISTMAS_SEASON: &str = "Christmas Season";
    pub const EPIPHANY: &str = "Epiphany and Following";
    pub const BAPTISM: &str = "Baptism of the Lord";
    pub const ASH_WEDNESDAY: &str = "Ash Wednesday and Following";
    pub const HOLY_WEEK: &str = "Holy Week";
    pub const EASTER_WEEK: &str = "Easter Week";
    pub const PENTECOST: &str = "Pentecost";
    pub const WEEK_1_AFTER_PENTECOST: &str = "Week 1 after Pentecost";
    pub const TRINITY: &str = "Trinity Sunday and Following";
    pub const CHRIST_THE_KING: &str = "Christ the King";

    pub const SUNDAY: &str = "Sunday";
    pub const CHRISTMAS_DAY: &str = "December 25";
    pub const EPIPHANY_DAY: &str = "January 6";
}

// ── YearCycle ─────────────────────────────────────────────────────────────

/// Which year of the two-year reading cycle applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum YearCycle {
    One = 1,
    Two = 2,
}

impl YearCycle {
    /// Numeric value, 1 or 2.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The alternate cycle.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            YearCycle::One => YearCycle::Two,
            YearCycle::Two => YearCycle::One,
        }
    }

    /// Cycle from its number; `None` unless `n` is 1 or 2.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(YearCycle::One),
            2 => Some(YearCycle::Two),
            _ => None,
        }
    }
}

impl fmt::Display for YearCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}", self.number())
    }
}

// Serialised as the bare cycle number so stored rows and API payloads keep
// the `year_cycle: 1` shape.
#[cfg(feature = "serde")]
impl Serialize for YearCycle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for YearCycle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u8::deserialize(deserializer)?;
        YearCycle::from_number(n).ok_or_else(|| {
            serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(n.into()), &"1 or 2")
        })
    }
}

// ── ResolvedPosition ──────────────────────────────────────────────────────

/// A calendar date resolved onto the lectionary grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedPosition {
    /// "1st Week of Advent", "Holy Week", "Week 14 after Pentecost", …
    pub period: String,
    /// Weekday name, or a literal date such as "December 21".
    pub day_identifier: String,
    pub year_cycle: YearCycle,
}

impl ResolvedPosition {
    pub fn new(
        period: impl Into<String>,
        day_identifier: impl Into<String>,
        year_cycle: YearCycle,
    ) -> Self {
        ResolvedPosition {
            period: period.into(),
            day_identifier: day_identifier.into(),
            year_cycle,
        }
    }

    /// Traditional name of the day, for display only.
    ///
    /// Never part of the lookup key: Good Friday is still `("Holy Week",
    /// "Friday")`.
    pub fn observance(&self) -> Option<&'static str> {
        use labels::*;
        let name = match (self.period.as_str(), self.day_identifier.as_str()) {
            (CHRISTMAS, _) | (CHRISTMAS_SEASON, CHRISTMAS_DAY) => "Christmas Day",
            (EPIPHANY, EPIPHANY_DAY) => "Epiphany",
            (BAPTISM, _) => "Baptism of the Lord",
            (ASH_WEDNESDAY, "Wednesday") => "Ash Wednesday",
            (HOLY_WEEK, "Sunday") => "Palm Sunday",
            (HOLY_WEEK, "Thursday") => "Maundy Thursday",
            (HOLY_WEEK, "Friday") => "Good Friday",
            (HOLY_WEEK, "Saturday") => "Holy Saturday",
            (EASTER_WEEK, SUNDAY) => "Easter Day",
            (PENTECOST, _) => "Day of Pentecost",
            (TRINITY, SUNDAY) => "Trinity Sunday",
            (CHRIST_THE_KING, _) => "Christ the King",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for ResolvedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} ({})",
            self.period, self.day_identifier, self.year_cycle
        )
    }
}

// ── Stored positions ──────────────────────────────────────────────────────

/// How a stored period relates to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PeriodCategory {
    /// Weeks counted from a moveable feast ("3rd Week of Easter").
    #[cfg_attr(feature = "serde", serde(rename = "liturgical_week"))]
    Liturgical,
    /// Weeks anchored to a calendar date range
    /// ("Week following Sun. between Feb. 11 and 17").
    #[cfg_attr(feature = "serde", serde(rename = "dated_week"))]
    Dated,
    /// Fixed calendar dates (Christmas Day, Epiphany).
    #[cfg_attr(feature = "serde", serde(rename = "fixed_days"))]
    Fixed,
}

impl PeriodCategory {
    /// The storage code of this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            PeriodCategory::Liturgical => "liturgical_week",
            PeriodCategory::Dated => "dated_week",
            PeriodCategory::Fixed => "fixed_days",
        }
    }

    /// Category from its storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "liturgical_week" => Some(PeriodCategory::Liturgical),
            "dated_week" => Some(PeriodCategory::Dated),
            "fixed_days" => Some(PeriodCategory::Fixed),
            _ => None,
        }
    }
}

impl fmt::Display for PeriodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the lectionary grid, independent of any calendar year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiturgicalPosition {
    pub period: String,
    pub day_identifier: String,
    pub category: PeriodCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub morning_psalms: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub evening_psalms: Vec<String>,
}

impl LiturgicalPosition {
    pub fn new(
        period: impl Into<String>,
        day_identifier: impl Into<String>,
        category: PeriodCategory,
    ) -> Self {
        LiturgicalPosition {
            period: period.into(),
            day_identifier: day_identifier.into(),
            category,
            special_name: None,
            morning_psalms: Vec::new(),
            evening_psalms: Vec::new(),
        }
    }

    pub fn with_special_name(mut self, name: impl Into<String>) -> Self {
        self.special_name = Some(name.into());
        self
    }

    pub fn with_psalms<M, E>(mut self, morning: M, evening: E) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        self.morning_psalms = morning.into_iter().map(Into::into).collect();
        self.evening_psalms = evening.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this row is stored under `(period, day_identifier)`.
    #[inline]
    pub fn is_keyed(&self, period: &str, day_identifier: &str) -> bool {
        self.period == period && self.day_identifier == day_identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_cycle_flip() {
        assert_eq!(YearCycle::One.other(), YearCycle::Two);
        assert_eq!(YearCycle::Two.other().other(), YearCycle::Two);
        assert_eq!(YearCycle::from_number(2), Some(YearCycle::Two));
        assert_eq!(YearCycle::from_number(3), None);
        assert_eq!(YearCycle::One.to_string(), "Year 1");
    }

    #[test]
    fn test_observance_annotations() {
        let good_friday = ResolvedPosition::new(labels::HOLY_WEEK, "Friday", YearCycle::One);
        assert_eq!(good_friday.observance(), Some("Good Friday"));
        assert_eq!(good_friday.day_identifier, "Friday");

        let easter = ResolvedPosition::new(labels::EASTER_WEEK, "Sunday", YearCycle::Two);
        assert_eq!(easter.observance(), Some("Easter Day"));

        let weekday = ResolvedPosition::new("3rd Week of Lent", "Tuesday", YearCycle::One);
        assert_eq!(weekday.observance(), None);
    }

    #[test]
    fn test_period_category_codes() {
        for category in [
            PeriodCategory::Liturgical,
            PeriodCategory::Dated,
            PeriodCategory::Fixed,
        ] {
            assert_eq!(PeriodCategory::from_code(category.as_str()), Some(category));
        }
        assert_eq!(PeriodCategory::from_code("weekly"), None);
    }

    #[test]
    fn test_liturgical_position_builder() {
        let pos = LiturgicalPosition::new(labels::CHRISTMAS, "December 25", PeriodCategory::Fixed)
            .with_special_name("Christmas Day")
            .with_psalms(["2", "85"], ["110", "132"]);
        assert!(pos.is_keyed("Christmas", "December 25"));
        assert!(!pos.is_keyed("Christmas Season", "December 25"));
        assert_eq!(pos.morning_psalms, vec!["2", "85"]);
        assert_eq!(pos.special_name.as_deref(), Some("Christmas Day"));
    }

    #[test]
    fn test_resolved_position_display() {
        let pos = ResolvedPosition::new("1st Week of Advent", "Sunday", YearCycle::Two);
        assert_eq!(pos.to_string(), "1st Week of Advent / Sunday (Year 2)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_year_cycle_serialises_as_number() {
        let json = serde_json::to_string(&YearCycle::Two).unwrap();
        assert_eq!(json, "2");
        assert!(serde_json::from_str::<YearCycle>("3").is_err());
        assert_eq!(
            serde_json::from_str::<YearCycle>("1").unwrap(),
            YearCycle::One
        );
    }
}
