//! The observed-holiday pipeline.
//!
//! Per requested year the provider's raw dates are filtered to the
//! configured holidays, then each stage below returns a new sequence:
//!
//! 1. add Christmas Eve (Christmas Day − 1)
//! 2. add the Friday after Thanksgiving, under the Thanksgiving name
//! 3. add Good Friday when enabled
//! 4. apply the weekend-observance rule
//! 5. replace Christmas Eve/Day with the shutdown run when enabled
//!
//! All years are merged, sorted by observed date and optionally clipped
//! to a date range.

use std::collections::BTreeSet;

use tracing::{debug, warn};
use wd_core::errors::{Error, Result};
use wd_core::HolidayToggles;
use wd_time::{good_friday, Date, DateRange};

use crate::names::{self, CHRISTMAS_DAY, CHRISTMAS_EVE, CHRISTMAS_SHUTDOWN, GOOD_FRIDAY, THANKSGIVING};
use crate::observance::observed_date;
use crate::provider::{HolidayProvider, US_COUNTRY_CODE};
use crate::record::{HolidayCalendar, HolidayRecord};

/// Anything that can produce an observed holiday calendar.
pub trait HolidaySource {
    /// Build the calendar for `years`, clipped to `within` when given.
    fn build(
        &self,
        years: &BTreeSet<i32>,
        toggles: &HolidayToggles,
        within: Option<&DateRange>,
    ) -> Result<HolidayCalendar>;
}

/// A holiday before weekend observance.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawHoliday {
    year: i32,
    name: String,
    date: Date,
}

impl RawHoliday {
    fn new(year: i32, name: impl Into<String>, date: Date) -> Self {
        Self {
            year,
            name: name.into(),
            date,
        }
    }
}

/// Observed holiday calendar built from a [`HolidayProvider`].
#[derive(Debug, Clone)]
pub struct ObservedHolidayCalendar<P> {
    provider: P,
    country: String,
}

impl<P: HolidayProvider> ObservedHolidayCalendar<P> {
    /// Build calendars from United States data served by `provider`.
    pub fn new(provider: P) -> Self {
        Self::for_country(provider, US_COUNTRY_CODE)
    }

    /// Build calendars from `provider` for another country code.
    pub fn for_country(provider: P, country: impl Into<String>) -> Self {
        Self {
            provider,
            country: country.into(),
        }
    }

    /// The country code queried.
    pub fn country(&self) -> &str {
        &self.country
    }

    fn fetch_raw(&self, year: i32, keep: &[&str]) -> Result<Vec<RawHoliday>> {
        let data = self.provider.lookup(&self.country, year)?;
        if data.is_empty() {
            warn!(country = %self.country, year, "provider returned no holiday data");
            return Err(Error::HolidayDataUnavailable {
                country: self.country.clone(),
                year,
            });
        }
        Ok(data
            .into_iter()
            .filter(|(_, name)| keep.contains(&name.as_str()))
            .map(|(date, name)| RawHoliday::new(year, name, date))
            .collect())
    }
}

impl<P: HolidayProvider> HolidaySource for ObservedHolidayCalendar<P> {
    #[tracing::instrument(skip(self, toggles, within), fields(country = %self.country))]
    fn build(
        &self,
        years: &BTreeSet<i32>,
        toggles: &HolidayToggles,
        within: Option<&DateRange>,
    ) -> Result<HolidayCalendar> {
        let keep = names::configured_names(toggles);
        let mut raw = Vec::new();
        for &year in years {
            raw.extend(self.fetch_raw(year, &keep)?);
        }
        debug!(records = raw.len(), "configured provider holidays");

        let raw = with_christmas_eve(raw);
        let raw = with_thanksgiving_friday(raw);
        let raw = if toggles.include_good_friday {
            with_good_friday(raw, years)?
        } else {
            raw
        };
        debug!(records = raw.len(), "synthesized holidays added");

        let shutdown_starts: Vec<(i32, Date)> = raw
            .iter()
            .filter(|h| h.name == CHRISTMAS_EVE)
            .map(|h| (h.year, h.date))
            .collect();
        let observed = observe(raw)?;
        let observed = if toggles.christmas_shutdown {
            expand_shutdown(observed, &shutdown_starts)?
        } else {
            observed
        };

        let calendar = HolidayCalendar::from_records(observed);
        let calendar = match within {
            Some(range) => calendar.within(range),
            None => calendar,
        };
        debug!(records = calendar.len(), "observed calendar built");
        Ok(calendar)
    }
}

fn with_christmas_eve(mut raw: Vec<RawHoliday>) -> Vec<RawHoliday> {
    let eves: Vec<RawHoliday> = raw
        .iter()
        .filter(|h| h.name == CHRISTMAS_DAY)
        .filter_map(|h| {
            h.date
                .add_days(-1)
                .ok()
                .map(|d| RawHoliday::new(h.year, CHRISTMAS_EVE, d))
        })
        .collect();
    raw.extend(eves);
    raw
}

fn with_thanksgiving_friday(mut raw: Vec<RawHoliday>) -> Vec<RawHoliday> {
    let fridays: Vec<RawHoliday> = raw
        .iter()
        .filter(|h| h.name == THANKSGIVING)
        .filter_map(|h| {
            h.date
                .add_days(1)
                .ok()
                .map(|d| RawHoliday::new(h.year, THANKSGIVING, d))
        })
        .collect();
    raw.extend(fridays);
    raw
}

fn with_good_friday(mut raw: Vec<RawHoliday>, years: &BTreeSet<i32>) -> Result<Vec<RawHoliday>> {
    for &year in years {
        let y = u16::try_from(year)
            .map_err(|_| Error::Date(format!("year {year} out of range")))?;
        raw.push(RawHoliday::new(year, GOOD_FRIDAY, good_friday(y)?));
    }
    Ok(raw)
}

fn observe(raw: Vec<RawHoliday>) -> Result<Vec<HolidayRecord>> {
    raw.into_iter()
        .map(|h| {
            let date = observed_date(&h.name, h.date)?;
            Ok(HolidayRecord::new(h.year, h.name, date))
        })
        .collect()
}

/// Drop Christmas Eve/Day for every year with a shutdown and add one record
/// per day from the raw Christmas Eve to the end of its month.
fn expand_shutdown(
    records: Vec<HolidayRecord>,
    starts: &[(i32, Date)],
) -> Result<Vec<HolidayRecord>> {
    let shut_years: BTreeSet<i32> = starts.iter().map(|(y, _)| *y).collect();
    let mut out: Vec<HolidayRecord> = records
        .into_iter()
        .filter(|r| {
            !(shut_years.contains(&r.year) && (r.name == CHRISTMAS_EVE || r.name == CHRISTMAS_DAY))
        })
        .collect();
    for &(year, start) in starts {
        let run = DateRange::new(start, start.end_of_month())?;
        out.extend(run.iter().map(|d| HolidayRecord::new(year, CHRISTMAS_SHUTDOWN, d)));
    }
    Ok(out)
}
