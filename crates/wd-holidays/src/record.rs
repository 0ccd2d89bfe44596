//! `HolidayRecord` and the ordered `HolidayCalendar`.

use serde::Serialize;
use std::collections::BTreeSet;

use wd_time::{Date, DateRange};

/// One observed holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayRecord {
    /// Nominal year the holiday belongs to.
    pub year: i32,
    /// Holiday name.
    pub name: String,
    /// Date the holiday is actually taken.
    pub observed_date: Date,
}

impl HolidayRecord {
    /// Create a record.
    pub fn new(year: i32, name: impl Into<String>, observed_date: Date) -> Self {
        Self {
            year,
            name: name.into(),
            observed_date,
        }
    }

    fn sort_key(&self) -> (Date, i32, &str) {
        (self.observed_date, self.year, self.name.as_str())
    }
}

/// Observed holidays ordered by date.
///
/// Records are sorted by observed date (ties by year, then name) and no two
/// records are equal. The calendar is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    records: Vec<HolidayRecord>,
}

impl HolidayCalendar {
    /// Sort and deduplicate `records` into a calendar.
    pub fn from_records(mut records: Vec<HolidayRecord>) -> Self {
        records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        records.dedup();
        Self { records }
    }

    /// The records, in order.
    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, HolidayRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the calendar has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The distinct observed dates.
    pub fn observed_dates(&self) -> BTreeSet<Date> {
        self.records.iter().map(|r| r.observed_date).collect()
    }

    /// Records whose nominal year is `year`.
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &HolidayRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// Records named `name`.
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a HolidayRecord> {
        self.records.iter().filter(move |r| r.name == name)
    }

    /// A new calendar holding only records observed inside `range`.
    pub fn within(&self, range: &DateRange) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| range.contains(r.observed_date))
                .cloned()
                .collect(),
        }
    }
}

impl IntoIterator for HolidayCalendar {
    type Item = HolidayRecord;
    type IntoIter = std::vec::IntoIter<HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a HolidayCalendar {
    type Item = &'a HolidayRecord;
    type IntoIter = std::slice::Iter<'a, HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
