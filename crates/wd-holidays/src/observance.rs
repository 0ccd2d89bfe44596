//! Weekend-observance rule.
//!
//! A holiday falling on Saturday is taken the Friday before and one
//! falling on Sunday the Monday after. New Year's Day is the exception: on
//! a Saturday it moves forward to the following Monday, so it never lands
//! in the previous year.

use wd_core::errors::Result;
use wd_time::{Date, Weekday};

use crate::names::NEW_YEARS_DAY;

/// Return the date `name` is observed on when its raw date is `raw`.
pub fn observed_date(name: &str, raw: Date) -> Result<Date> {
    match raw.weekday() {
        Weekday::Saturday if name == NEW_YEARS_DAY => raw.add_days(2),
        Weekday::Saturday => raw.add_days(-1),
        Weekday::Sunday => raw.add_days(1),
        _ => Ok(raw),
    }
}
