//! `Calendar` trait and business-day counting.
//!
//! A calendar knows which dates are business days. The counting entry
//! point, [`count_business_days`], treats Monday through Friday as the
//! working week and subtracts an explicit set of excluded dates.

use crate::date::Date;
use crate::range::DateRange;
use std::collections::BTreeSet;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Weekends Only"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Count the business days in `range`, both ends included.
    fn business_days_in(&self, range: &DateRange) -> u32 {
        range.iter().filter(|d| self.is_business_day(*d)).count() as u32
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

/// Weekends plus a borrowed set of excluded dates.
///
/// Excluded dates that fall on a weekend change nothing.
#[derive(Debug, Clone, Copy)]
pub struct ExclusionCalendar<'a> {
    excluded: &'a BTreeSet<Date>,
}

impl<'a> ExclusionCalendar<'a> {
    /// Wrap a set of excluded dates.
    pub fn new(excluded: &'a BTreeSet<Date>) -> Self {
        Self { excluded }
    }

    /// Number of excluded dates, weekend ones included.
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }
}

impl Calendar for ExclusionCalendar<'_> {
    fn name(&self) -> &str {
        "Weekends and Excluded Dates"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.excluded.contains(&date)
    }

    fn business_days_in(&self, range: &DateRange) -> u32 {
        let weekdays = WeekendsOnly.business_days_in(range);
        let excluded = self
            .excluded
            .range(range.start()..=range.end())
            .filter(|d| !self.is_weekend(**d))
            .count() as u32;
        weekdays - excluded
    }
}

/// Count the dates in `range` that are Monday–Friday and not in `excluded`.
///
/// The result is always within `[0, range.len_days()]`.
pub fn count_business_days(range: &DateRange, excluded: &BTreeSet<Date>) -> u32 {
    ExclusionCalendar::new(excluded).business_days_in(range)
}
