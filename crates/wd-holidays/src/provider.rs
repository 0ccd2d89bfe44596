//! Holiday-data providers.
//!
//! A provider answers "which public holidays fall in this year, on which
//! raw (unobserved) dates?". The calendar pipeline treats an empty answer
//! as fatal, so providers report unsupported years by returning no data.

use std::collections::BTreeMap;

use wd_core::errors::Result;
use wd_time::{Date, Weekday};

use crate::names::*;

/// Country code of the built-in United States provider.
pub const US_COUNTRY_CODE: &str = "US";

/// Source of raw public-holiday dates.
pub trait HolidayProvider: std::fmt::Debug + Send + Sync {
    /// Raw holiday dates of `year` for `country_code`, keyed by date.
    ///
    /// Returns an empty map when the provider has no data for the request.
    fn lookup(&self, country_code: &str, year: i32) -> Result<BTreeMap<Date, String>>;
}

/// United States federal holidays, computed from their statutory rules.
///
/// Holidays (raw dates, no weekend observance):
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
/// * Washington's Birthday (3rd Mon in Feb from 1971; Feb 22 before)
/// * Memorial Day (last Mon in May from 1971; May 30 before)
/// * Juneteenth National Independence Day (Jun 19, from 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct from 1971; Oct 12 from 1937)
/// * Veterans Day (Nov 11 from 1954, 4th Mon in Oct 1971–1977);
///   reported as Armistice Day from 1938 to 1953
/// * Thanksgiving (4th Thu in Nov from 1942; last Thu before)
/// * Christmas Day (Dec 25)
#[derive(Debug, Clone, Copy, Default)]
pub struct UsFederalHolidays;

impl HolidayProvider for UsFederalHolidays {
    fn lookup(&self, country_code: &str, year: i32) -> Result<BTreeMap<Date, String>> {
        if !country_code.eq_ignore_ascii_case(US_COUNTRY_CODE) {
            return Ok(BTreeMap::new());
        }
        let Ok(y) = u16::try_from(year) else {
            return Ok(BTreeMap::new());
        };
        if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&y) {
            return Ok(BTreeMap::new());
        }
        Ok(us_federal_holidays(y)?
            .into_iter()
            .map(|(name, date)| (date, name.to_string()))
            .collect())
    }
}

fn us_federal_holidays(y: u16) -> Result<Vec<(&'static str, Date)>> {
    let mut out = vec![(NEW_YEARS_DAY, Date::from_ymd(y, 1, 1)?)];
    if y >= 1986 {
        out.push((MLK_DAY, Date::nth_weekday(3, Weekday::Monday, y, 1)?));
    }
    out.push((
        WASHINGTONS_BIRTHDAY,
        if y >= 1971 {
            Date::nth_weekday(3, Weekday::Monday, y, 2)?
        } else {
            Date::from_ymd(y, 2, 22)?
        },
    ));
    out.push((
        MEMORIAL_DAY,
        if y >= 1971 {
            Date::last_weekday(Weekday::Monday, y, 5)?
        } else {
            Date::from_ymd(y, 5, 30)?
        },
    ));
    if y >= 2021 {
        out.push((JUNETEENTH, Date::from_ymd(y, 6, 19)?));
    }
    out.push((INDEPENDENCE_DAY, Date::from_ymd(y, 7, 4)?));
    out.push((LABOR_DAY, Date::nth_weekday(1, Weekday::Monday, y, 9)?));
    if y >= 1971 {
        out.push((COLUMBUS_DAY, Date::nth_weekday(2, Weekday::Monday, y, 10)?));
    } else if y >= 1937 {
        out.push((COLUMBUS_DAY, Date::from_ymd(y, 10, 12)?));
    }
    if (1971..=1977).contains(&y) {
        out.push((VETERANS_DAY, Date::nth_weekday(4, Weekday::Monday, y, 10)?));
    } else if y >= 1954 {
        out.push((VETERANS_DAY, Date::from_ymd(y, 11, 11)?));
    } else if y >= 1938 {
        out.push(("Armistice Day", Date::from_ymd(y, 11, 11)?));
    }
    out.push((
        THANKSGIVING,
        if y >= 1942 {
            Date::nth_weekday(4, Weekday::Thursday, y, 11)?
        } else {
            Date::last_weekday(Weekday::Thursday, y, 11)?
        },
    ));
    out.push((CHRISTMAS_DAY, Date::from_ymd(y, 12, 25)?));
    Ok(out)
}
