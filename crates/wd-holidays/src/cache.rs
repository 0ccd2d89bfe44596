//! Memoization of built calendars.
//!
//! Building a calendar is a pure function of `(years, toggles, range)`, so
//! results can be kept for the life of the cache without invalidation.
//! Failed builds are not stored.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use tracing::trace;
use wd_core::errors::Result;
use wd_core::HolidayToggles;
use wd_time::DateRange;

use crate::builder::HolidaySource;
use crate::record::HolidayCalendar;

type CacheKey = (BTreeSet<i32>, HolidayToggles, Option<DateRange>);

/// A [`HolidaySource`] that remembers every calendar it has built.
///
/// Safe to share between threads; concurrent misses on the same key may
/// both build, and both produce the same calendar.
#[derive(Debug)]
pub struct CachedHolidayCalendar<S> {
    source: S,
    entries: Mutex<HashMap<CacheKey, HolidayCalendar>>,
}

impl<S: HolidaySource> CachedHolidayCalendar<S> {
    /// Wrap `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached calendars.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("calendar cache mutex poisoned").len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every cached calendar.
    pub fn clear(&self) {
        self.entries
            .lock()
            .expect("calendar cache mutex poisoned")
            .clear();
    }
}

impl<S: HolidaySource> HolidaySource for CachedHolidayCalendar<S> {
    fn build(
        &self,
        years: &BTreeSet<i32>,
        toggles: &HolidayToggles,
        within: Option<&DateRange>,
    ) -> Result<HolidayCalendar> {
        let key: CacheKey = (years.clone(), *toggles, within.copied());
        if let Some(hit) = self
            .entries
            .lock()
            .expect("calendar cache mutex poisoned")
            .get(&key)
        {
            trace!("calendar cache hit");
            return Ok(hit.clone());
        }
        let calendar = self.source.build(years, toggles, within)?;
        self.entries
            .lock()
            .expect("calendar cache mutex poisoned")
            .insert(key, calendar.clone());
        Ok(calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ObservedHolidayCalendar;
    use crate::provider::UsFederalHolidays;

    #[test]
    fn second_build_is_served_from_cache() {
        let cache = CachedHolidayCalendar::new(ObservedHolidayCalendar::new(UsFederalHolidays));
        let years: BTreeSet<i32> = [2024, 2025].into_iter().collect();
        let toggles = HolidayToggles::default();
        let first = cache.build(&years, &toggles, None).unwrap();
        assert_eq!(cache.len(), 1);
        let second = cache.build(&years, &toggles, None).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn toggles_are_part_of_the_key() {
        let cache = CachedHolidayCalendar::new(ObservedHolidayCalendar::new(UsFederalHolidays));
        let years: BTreeSet<i32> = [2024].into_iter().collect();
        let plain = cache.build(&years, &HolidayToggles::default(), None).unwrap();
        let with_gf = cache
            .build(
                &years,
                &HolidayToggles {
                    include_good_friday: true,
                    ..HolidayToggles::default()
                },
                None,
            )
            .unwrap();
        assert_eq!(with_gf.len(), plain.len() + 1);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = CachedHolidayCalendar::new(ObservedHolidayCalendar::new(UsFederalHolidays));
        let years: BTreeSet<i32> = [2400].into_iter().collect();
        assert!(cache.build(&years, &HolidayToggles::default(), None).is_err());
        assert!(cache.is_empty());
    }
}
