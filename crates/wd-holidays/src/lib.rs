//! # wd-holidays
//!
//! Derivation of observed holiday calendars.
//!
//! Raw holiday dates come from a [`HolidayProvider`]; the
//! [`ObservedHolidayCalendar`] pipeline keeps the configured holidays, adds
//! the synthesized ones (Christmas Eve, the Friday after Thanksgiving, Good
//! Friday), applies the weekend-observance rule and, when enabled, replaces
//! Christmas with a shutdown run to the end of December.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The observed-calendar pipeline.
pub mod builder;

/// Memoization of built calendars.
pub mod cache;

/// Holiday names used by the pipeline.
pub mod names;

/// Weekend-observance rule.
pub mod observance;

/// Holiday-data providers.
pub mod provider;

/// `HolidayRecord` and `HolidayCalendar`.
pub mod record;

pub use builder::{HolidaySource, ObservedHolidayCalendar};
pub use cache::CachedHolidayCalendar;
pub use observance::observed_date;
pub use provider::{HolidayProvider, UsFederalHolidays, US_COUNTRY_CODE};
pub use record::{HolidayCalendar, HolidayRecord};
