// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Storage collaborator.
//!
//! The resolver never owns lectionary data. It asks two read-only questions
//! through [`PositionStore`]: "is there a stored row for this fixed day?" and
//! "which dated-week labels exist?". Any backend (SQL, files, a remote
//! service) implements the trait; [`MemoryStore`] is the in-process one used
//! by tests and the demo.

use crate::error::StoreError;
use crate::position::{LiturgicalPosition, PeriodCategory};

/// Read-only access to stored lectionary positions.
pub trait PositionStore {
    /// The stored row keyed by `(period, day_identifier)`, if any.
    fn lookup_fixed_position(
        &self,
        period: &str,
        day_identifier: &str,
    ) -> Result<Option<LiturgicalPosition>, StoreError>;

    /// Distinct period names stored under `category`.
    fn list_periods_by_category(
        &self,
        category: PeriodCategory,
    ) -> Result<Vec<String>, StoreError>;
}

impl<S: PositionStore + ?Sized> PositionStore for &S {
    #[inline]
    fn lookup_fixed_position(
        &self,
        period: &str,
        day_identifier: &str,
    ) -> Result<Option<LiturgicalPosition>, StoreError> {
        (**self).lookup_fixed_position(period, day_identifier)
    }

    #[inline]
    fn list_periods_by_category(
        &self,
        category: PeriodCategory,
    ) -> Result<Vec<String>, StoreError> {
        (**self).list_periods_by_category(category)
    }
}

/// A `Vec`-backed [`PositionStore`].
///
/// Lookups are linear; intended for fixtures and small grids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    positions: Vec<LiturgicalPosition>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row, replacing any row with the same key.
    pub fn insert(&mut self, position: LiturgicalPosition) {
        match self
            .positions
            .iter_mut()
            .find(|p| p.is_keyed(&position.period, &position.day_identifier))
        {
            Some(existing) => *existing = position,
            None => self.positions.push(position),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiturgicalPosition> {
        self.positions.iter()
    }
}

impl FromIterator<LiturgicalPosition> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = LiturgicalPosition>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        store.extend(iter);
        store
    }
}

impl Extend<LiturgicalPosition> for MemoryStore {
    fn extend<I: IntoIterator<Item = LiturgicalPosition>>(&mut self, iter: I) {
        for position in iter {
            self.insert(position);
        }
    }
}

impl PositionStore for MemoryStore {
    fn lookup_fixed_position(
        &self,
        period: &str,
        day_identifier: &str,
    ) -> Result<Option<LiturgicalPosition>, StoreError> {
        Ok(self
            .positions
            .iter()
            .find(|p| p.is_keyed(period, day_identifier))
            .cloned())
    }

    fn list_periods_by_category(
        &self,
        category: PeriodCategory,
    ) -> Result<Vec<String>, StoreError> {
        let mut periods: Vec<String> = Vec::new();
        for position in self.positions.iter().filter(|p| p.category == category) {
            if !periods.contains(&position.period) {
                periods.push(position.period.clone());
            }
        }
        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryStore {
        [
            LiturgicalPosition::new("Christmas", "December 25", PeriodCategory::Fixed),
            LiturgicalPosition::new(
                "Week following Sun. between Feb. 4 and 10",
                "Sunday",
                PeriodCategory::Dated,
            ),
            LiturgicalPosition::new(
                "Week following Sun. between Feb. 4 and 10",
                "Monday",
                PeriodCategory::Dated,
            ),
            LiturgicalPosition::new(
                "Week following Sun. between Feb. 11 and 17",
                "Sunday",
                PeriodCategory::Dated,
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup_fixed_position() {
        let store = sample();
        let hit = store
            .lookup_fixed_position("Christmas", "December 25")
            .unwrap();
        assert_eq!(hit.map(|p| p.category), Some(PeriodCategory::Fixed));
        assert_eq!(store.lookup_fixed_position("Christmas", "Sunday").unwrap(), None);
    }

    #[test]
    fn test_list_periods_is_distinct_in_insertion_order() {
        let store = sample();
        assert_eq!(
            store.list_periods_by_category(PeriodCategory::Dated).unwrap(),
            vec![
                "Week following Sun. between Feb. 4 and 10".to_string(),
                "Week following Sun. between Feb. 11 and 17".to_string(),
            ]
        );
        assert!(store
            .list_periods_by_category(PeriodCategory::Liturgical)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_insert_replaces_same_key() {
        let mut store = sample();
        assert_eq!(store.len(), 4);
        store.insert(
            LiturgicalPosition::new("Christmas", "December 25", PeriodCategory::Fixed)
                .with_special_name("Christmas Day"),
        );
        assert_eq!(store.len(), 4);
        let row = store
            .lookup_fixed_position("Christmas", "December 25")
            .unwrap()
            .unwrap();
        assert_eq!(row.special_name.as_deref(), Some("Christmas Day"));
    }

    #[test]
    fn test_store_by_reference() {
        fn count<S: PositionStore>(store: S) -> usize {
            store
                .list_periods_by_category(PeriodCategory::Fixed)
                .unwrap()
                .len()
        }
        let store = sample();
        assert_eq!(count(&store), 1);
        assert!(!store.is_empty());
    }
}
