//! Error types for workdays-rs.
//!
//! Every failure the library can report is a variant of a single
//! `thiserror`-derived enum. Input problems are user-correctable; a
//! missing holiday year is a fatal dependency problem. Nothing is retried.
//!
//! The [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros return
//! early with one of the message-carrying variants.

use thiserror::Error;

/// The top-level error type used throughout workdays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Neither a year specification nor a date range was supplied.
    #[error("either a year range or a date range needs to be provided")]
    MissingInput,

    /// A year is out of bounds, or a year range is reversed or malformed.
    #[error("invalid year: {0}")]
    InvalidYear(String),

    /// A month is outside 1–12 or cannot be parsed.
    #[error("invalid month: {0}")]
    InvalidMonth(String),

    /// A date range is malformed or reversed.
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),

    /// Free-form input carried more values than the field accepts.
    #[error("too many inputs: {0}")]
    TooManyInputs(String),

    /// The holiday-data provider has nothing for a requested year.
    #[error("no holiday data for country {country} in {year}")]
    HolidayDataUnavailable {
        /// Country code that was queried.
        country: String,
        /// The year that came back empty.
        year: i32,
    },

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Writing the exported tables failed.
    #[error("export to {path} failed: {reason}")]
    Export {
        /// Destination that was being written.
        path: String,
        /// Underlying I/O or serialization failure.
        reason: String,
    },

    /// A configuration value could not be understood.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout workdays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::$kind(message))` if `$cond` is false.
///
/// `$kind` must name one of the single-`String` variants of [`Error`].
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn month(m: i32) -> wd_core::errors::Result<i32> {
///     ensure!((1..=12).contains(&m), InvalidMonth, "{m} is not in [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::InvalidMonth("13 is not in [1, 12]".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::$kind(message))` immediately.
///
/// # Example
/// ```
/// use wd_core::{fail, errors::Error};
/// fn always_err() -> wd_core::errors::Result<()> {
///     fail!(InvalidYear, "year {} is too far from today", 1700);
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::InvalidYear("year 1700 is too far from today".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(year: i32) -> Result<i32> {
        ensure!(year >= 1926, InvalidYear, "{year} is before 1926");
        ensure!(year <= 2076, InvalidYear, "{year} is after 2076");
        Ok(year)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(bounded(2024), Ok(2024));
    }

    #[test]
    fn ensure_reports_first_failure() {
        assert_eq!(
            bounded(1900),
            Err(Error::InvalidYear("1900 is before 1926".into()))
        );
    }

    #[test]
    fn messages_name_the_problem() {
        let err = Error::HolidayDataUnavailable {
            country: "US".into(),
            year: 2300,
        };
        assert_eq!(err.to_string(), "no holiday data for country US in 2300");
        assert_eq!(
            Error::MissingInput.to_string(),
            "either a year range or a date range needs to be provided"
        );
    }
}
