//! The report orchestrator.
//!
//! Month mode expands a year specification, trims its boundary years by
//! the [`Inclusivity`] policy and counts every selected month. Range mode
//! trims the boundary days of a single date range instead. In both modes
//! the holiday calendar is built once for the years touched.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::info;
use wd_core::errors::{Error, Result};
use wd_core::{HolidayToggles, Inclusivity, Year};
use wd_holidays::{HolidayCalendar, HolidaySource};
use wd_time::{count_business_days, Date, DateRange};

use crate::counts::WorkdayCount;
use crate::input::{validate, DateRangeInput, MonthInput, MonthSpec, YearInput, YearSpec};

/// The two result tables of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkdayReport {
    /// Observed holidays for the years touched.
    pub holidays: HolidayCalendar,
    /// One row per month, or a single row for a date range.
    pub workdays: Vec<WorkdayCount>,
}

/// Composes validation, the holiday calendar and the business-day counter.
#[derive(Debug, Clone)]
pub struct WorkdayReportOrchestrator<S> {
    source: S,
}

impl<S: HolidaySource> WorkdayReportOrchestrator<S> {
    /// Report against holidays from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The holiday source in use.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validate the inputs and count workdays.
    ///
    /// A year specification takes precedence over a date range when both are
    /// given. Fails with [`Error::MissingInput`] when neither is.
    #[tracing::instrument(skip(self, toggles))]
    pub fn report(
        &self,
        years: Option<&YearInput>,
        months: Option<&MonthInput>,
        dates: Option<&DateRangeInput>,
        inclusivity: Inclusivity,
        toggles: &HolidayToggles,
        now_year: Year,
    ) -> Result<WorkdayReport> {
        if years.is_none() && dates.is_none() {
            return Err(Error::MissingInput);
        }
        let input = validate(years, months, dates, now_year)?;
        match (input.years, input.dates) {
            (Some(spec), _) => {
                let months = input.months.unwrap_or_else(MonthSpec::all);
                self.month_report(spec, &months, inclusivity, toggles)
            }
            (None, Some(range)) => self.range_report(range, inclusivity, toggles),
            (None, None) => Err(Error::MissingInput),
        }
    }

    fn month_report(
        &self,
        spec: YearSpec,
        months: &MonthSpec,
        inclusivity: Inclusivity,
        toggles: &HolidayToggles,
    ) -> Result<WorkdayReport> {
        let years = report_years(spec, inclusivity);
        let holidays = self.source.build(&years, toggles, None)?;
        let excluded = holidays.observed_dates();

        let mut workdays = Vec::with_capacity(years.len() * months.months().len());
        for &year in &years {
            for &month in months.months() {
                let span = month_span(year, month)?;
                workdays.push(WorkdayCount::month(
                    year,
                    month,
                    count_business_days(&span, &excluded),
                ));
            }
        }
        info!(
            mode = "month",
            years = years.len(),
            rows = workdays.len(),
            holidays = holidays.len(),
            "workday report ready"
        );
        Ok(WorkdayReport { holidays, workdays })
    }

    fn range_report(
        &self,
        range: DateRange,
        inclusivity: Inclusivity,
        toggles: &HolidayToggles,
    ) -> Result<WorkdayReport> {
        let (start, end) = adjust_bounds(range, inclusivity)?;
        let (holidays, count) = if start <= end {
            let adjusted = DateRange::new(start, end)?;
            let years: BTreeSet<Year> = adjusted.years().map(Year::from).collect();
            let holidays = self.source.build(&years, toggles, Some(&adjusted))?;
            let count = count_business_days(&adjusted, &holidays.observed_dates());
            (holidays, count)
        } else {
            (HolidayCalendar::default(), 0)
        };
        info!(
            mode = "range",
            %start,
            %end,
            workdays = count,
            holidays = holidays.len(),
            "workday report ready"
        );
        Ok(WorkdayReport {
            holidays,
            workdays: vec![WorkdayCount::Range {
                start,
                end,
                workdays: count,
            }],
        })
    }
}

/// The years rows are produced for, after boundary trimming.
fn report_years(spec: YearSpec, inclusivity: Inclusivity) -> BTreeSet<Year> {
    let first = spec.first() + Year::from(!inclusivity.keeps_start());
    let last = spec.last() - Year::from(!inclusivity.keeps_end());
    (first..=last).collect()
}

/// Shift the range bounds inward by one day for each excluded boundary.
fn adjust_bounds(range: DateRange, inclusivity: Inclusivity) -> Result<(Date, Date)> {
    let shift = |date: Date, n: i32| {
        date.add_days(n)
            .map_err(|e| Error::InvalidDateRange(format!("cannot trim {range}: {e}")))
    };
    let start = if inclusivity.keeps_start() {
        range.start()
    } else {
        shift(range.start(), 1)?
    };
    let end = if inclusivity.keeps_end() {
        range.end()
    } else {
        shift(range.end(), -1)?
    };
    Ok((start, end))
}

fn month_span(year: Year, month: u8) -> Result<DateRange> {
    let y = u16::try_from(year).map_err(|_| Error::InvalidYear(format!("{year} out of range")))?;
    DateRange::month(y, month).map_err(|e| Error::InvalidYear(format!("{year}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_trimming() {
        let spec = YearSpec::Range(2020, 2023);
        let years = |inc| report_years(spec, inc).into_iter().collect::<Vec<_>>();
        assert_eq!(years(Inclusivity::Both), vec![2020, 2021, 2022, 2023]);
        assert_eq!(years(Inclusivity::Left), vec![2020, 2021, 2022]);
        assert_eq!(years(Inclusivity::Right), vec![2021, 2022, 2023]);
        assert_eq!(years(Inclusivity::None), vec![2021, 2022]);
    }

    #[test]
    fn single_year_trims_to_nothing() {
        let spec = YearSpec::Single(2024);
        assert_eq!(report_years(spec, Inclusivity::Both).len(), 1);
        assert!(report_years(spec, Inclusivity::Left).is_empty());
        assert!(report_years(spec, Inclusivity::Right).is_empty());
        assert!(report_years(spec, Inclusivity::None).is_empty());
    }

    #[test]
    fn bound_trimming() {
        let d = |day| Date::from_ymd(2024, 12, day).unwrap();
        let range = DateRange::new(d(20), d(31)).unwrap();
        assert_eq!(adjust_bounds(range, Inclusivity::Both), Ok((d(20), d(31))));
        assert_eq!(adjust_bounds(range, Inclusivity::Left), Ok((d(20), d(30))));
        assert_eq!(adjust_bounds(range, Inclusivity::Right), Ok((d(21), d(31))));
        assert_eq!(adjust_bounds(range, Inclusivity::None), Ok((d(21), d(30))));
    }

    #[test]
    fn one_day_range_trimmed_inward_crosses() {
        let d = Date::from_ymd(2024, 6, 3).unwrap();
        let (start, end) = adjust_bounds(DateRange::new(d, d).unwrap(), Inclusivity::None).unwrap();
        assert!(start > end);
    }
}
