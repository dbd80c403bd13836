// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Resolver configuration.
//!
//! | Setting | Default | Meaning |
//! |---------|---------|---------|
//! | `reference` | liturgical year 2024 ⇒ Year 1 | anchor for cycle parity |
//! | `max_weeks_after_baptism` | 4 | last "Week N after Baptism of the Lord" |
//! | `max_weeks_after_pentecost` | 27 | cap on "Week N after Pentecost" |
//! | `carry_last_dated_week` | `true` | see [`ResolverConfig::carry_last_dated_week`] |
//! | `max_range_days` | 90 | limit for [`Resolver::resolve_range`](crate::Resolver::resolve_range) |

use crate::position::YearCycle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors from [`ResolverConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A week cap of zero would leave its whole season unresolved.
    #[error("{0} must be at least 1")]
    ZeroWeekCap(&'static str),

    #[error("max_range_days must be at least 1")]
    ZeroRange,
}

/// A liturgical year whose cycle is known; all other years alternate from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleReference {
    /// Liturgical year, named by the calendar year in which its Advent begins.
    pub year: i32,
    pub cycle: YearCycle,
}

impl CycleReference {
    pub const fn new(year: i32, cycle: YearCycle) -> Self {
        CycleReference { year, cycle }
    }
}

impl Default for CycleReference {
    fn default() -> Self {
        CycleReference::new(2024, YearCycle::One)
    }
}

/// Tunables of the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    pub reference: CycleReference,
    pub max_weeks_after_baptism: u32,
    pub max_weeks_after_pentecost: u32,
    /// When no dated week contains a date before Ash Wednesday, reuse the
    /// latest dated week that began before it.
    ///
    /// With only the four February labels stored, an early Easter leaves a
    /// few days between the last dated week and Ash Wednesday. The carried
    /// days get that earlier week's keys and so repeat its readings, as the
    /// `max_weeks_after_pentecost` cap does for the last weeks before Advent.
    /// Disabling this leaves those days unresolved so a coverage scan can
    /// report them.
    pub carry_last_dated_week: bool,
    pub max_range_days: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            reference: CycleReference::default(),
            max_weeks_after_baptism: 4,
            max_weeks_after_pentecost: 27,
            carry_last_dated_week: true,
            max_range_days: 90,
        }
    }
}

impl ResolverConfig {
    pub fn with_reference(mut self, reference: CycleReference) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_max_weeks_after_baptism(mut self, weeks: u32) -> Self {
        self.max_weeks_after_baptism = weeks;
        self
    }

    pub fn with_max_weeks_after_pentecost(mut self, weeks: u32) -> Self {
        self.max_weeks_after_pentecost = weeks;
        self
    }

    pub fn with_carry_last_dated_week(mut self, carry: bool) -> Self {
        self.carry_last_dated_week = carry;
        self
    }

    pub fn with_max_range_days(mut self, days: u32) -> Self {
        self.max_range_days = days;
        self
    }

    /// Checks that every cap leaves its season resolvable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_weeks_after_baptism == 0 {
            return Err(ConfigError::ZeroWeekCap("max_weeks_after_baptism"));
        }
        if self.max_weeks_after_pentecost == 0 {
            return Err(ConfigError::ZeroWeekCap("max_weeks_after_pentecost"));
        }
        if self.max_range_days == 0 {
            return Err(ConfigError::ZeroRange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ResolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference, CycleReference::new(2024, YearCycle::One));
        assert_eq!(config.max_weeks_after_pentecost, 27);
        assert_eq!(config.max_range_days, 90);
        assert!(config.carry_last_dated_week);
    }

    #[test]
    fn test_zero_caps_are_rejected() {
        let config = ResolverConfig::default().with_max_weeks_after_pentecost(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroWeekCap("max_weeks_after_pentecost"))
        );
        assert_eq!(
            ResolverConfig::default()
                .with_max_weeks_after_baptism(0)
                .validate()
                .unwrap_err()
                .to_string(),
            "max_weeks_after_baptism must be at least 1"
        );
        assert_eq!(
            ResolverConfig::default().with_max_range_days(0).validate(),
            Err(ConfigError::ZeroRange)
        );
    }

    #[test]
    fn test_builders_chain() {
        let config = ResolverConfig::default()
            .with_reference(CycleReference::new(2023, YearCycle::Two))
            .with_carry_last_dated_week(false)
            .with_max_range_days(366);
        assert_eq!(config.reference.year, 2023);
        assert!(!config.carry_last_dated_week);
        assert_eq!(config.max_range_days, 366);
        assert_eq!(config.max_weeks_after_baptism, 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"carry_last_dated_week": false}"#).unwrap();
        assert!(!config.carry_last_dated_week);
        assert_eq!(config.max_weeks_after_pentecost, 27);
        assert_eq!(config.reference.cycle, YearCycle::One);
    }
}
