//! # wd-time
//!
//! Date, date-range, weekday and business-day types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and business-day counting.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Easter Sunday and the feasts derived from it.
pub mod easter;

/// `DateRange`: an inclusive span of dates.
pub mod range;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{count_business_days, Calendar, ExclusionCalendar, WeekendsOnly};
pub use date::{days_in_month, is_leap_year, Date};
pub use easter::{easter_sunday, good_friday};
pub use range::DateRange;
pub use weekday::Weekday;
