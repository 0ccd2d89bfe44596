//! `DateRange`: an inclusive span of calendar dates.

use crate::date::Date;
use serde::{Deserialize, Serialize};
use wd_core::errors::{Error, Result};

/// An inclusive `[start, end]` span of dates with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Date, Date)", into = "(Date, Date)")]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range, failing with [`Error::InvalidDateRange`] when
    /// `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidDateRange(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The full calendar month `year`/`month`.
    pub fn month(year: u16, month: u8) -> Result<Self> {
        let start = Date::first_of_month(year, month)?;
        Ok(Self {
            start,
            end: start.end_of_month(),
        })
    }

    /// First date in the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date in the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of calendar days, both ends included.
    pub fn len_days(&self) -> u32 {
        (self.end - self.start + 1) as u32
    }

    /// Whether `date` lies inside the range, ends included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// The years the range touches, in ascending order.
    pub fn years(&self) -> std::ops::RangeInclusive<u16> {
        self.start.year()..=self.end.year()
    }

    /// Iterate over every date in the range.
    pub fn iter(&self) -> impl Iterator<Item = Date> {
        let first = self.start;
        (0..=(self.end - first)).map(move |n| first + n)
    }
}

impl TryFrom<(Date, Date)> for DateRange {
    type Error = Error;

    fn try_from((start, end): (Date, Date)) -> Result<Self> {
        DateRange::new(start, end)
    }
}

impl From<DateRange> for (Date, Date) {
    fn from(range: DateRange) -> Self {
        (range.start, range.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = DateRange::new(date(2024, 2, 1), date(2024, 1, 31)).unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange(_)));
    }

    #[test]
    fn single_day_range() {
        let r = DateRange::new(date(2024, 2, 29), date(2024, 2, 29)).unwrap();
        assert_eq!(r.len_days(), 1);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![date(2024, 2, 29)]);
    }

    #[test]
    fn month_span_handles_leap_years() {
        assert_eq!(DateRange::month(2024, 2).unwrap().len_days(), 29);
        assert_eq!(DateRange::month(2023, 2).unwrap().len_days(), 28);
        assert_eq!(DateRange::month(2024, 12).unwrap().end(), date(2024, 12, 31));
    }

    #[test]
    fn years_across_boundary() {
        let r = DateRange::new(date(2023, 12, 20), date(2025, 1, 5)).unwrap();
        assert_eq!(r.years().collect::<Vec<_>>(), vec![2023, 2024, 2025]);
        assert!(r.contains(date(2024, 6, 1)));
        assert!(!r.contains(date(2025, 1, 6)));
    }

    #[test]
    fn deserializes_from_pair() {
        let r: DateRange = serde_json::from_str(r#"["2024-12-20", "2024-12-31"]"#).unwrap();
        assert_eq!(r.len_days(), 12);
        assert!(serde_json::from_str::<DateRange>(r#"["2024-12-31", "2024-12-20"]"#).is_err());
    }
}
