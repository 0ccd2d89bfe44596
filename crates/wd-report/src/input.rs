//! Parsing and validation of caller input.
//!
//! Years, months and date ranges arrive as numbers, pairs or free text.
//! [`validate`] turns them into closed, typed specifications, checking the
//! year first, then the months, then the date range, and returning the
//! first failure.
//!
//! Free text is split on any character that is not an ASCII letter or
//! digit, so `"2023-2025"`, `"2023, 2025"` and `"2023 2025"` all read as
//! two tokens. Every token must be a number.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use wd_core::errors::{Error, Result};
use wd_core::{ensure, fail, Year};
use wd_time::{Date, DateRange};

/// How far before the reference year a year may lie.
pub const YEARS_BEFORE: Year = 100;

/// How far after the reference year a year may lie.
pub const YEARS_AFTER: Year = 50;

// ── Raw input ─────────────────────────────────────────────────────────────────

/// A year specification as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    /// A single year.
    Value(Year),
    /// An inclusive `(start, end)` pair.
    Pair(Year, Year),
    /// Free text holding one or two years.
    Text(String),
}

/// A month selection as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthInput {
    /// A single month.
    Value(i32),
    /// Several months, in any order, possibly repeated.
    List(Vec<i32>),
    /// Free text holding one or more months.
    Text(String),
}

/// A date range as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateRangeInput {
    /// Already-typed bounds.
    Dates(Date, Date),
    /// `YYYY-M[-D]` text bounds; a missing day means the first of the month
    /// for the start and the last of the month for the end.
    Text(String, String),
}

// ── Validated specifications ──────────────────────────────────────────────────

/// A validated year specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearSpec {
    /// One year.
    Single(Year),
    /// An inclusive range with `start <= end`.
    Range(Year, Year),
}

impl YearSpec {
    /// First year covered.
    pub fn first(&self) -> Year {
        match *self {
            YearSpec::Single(y) | YearSpec::Range(y, _) => y,
        }
    }

    /// Last year covered.
    pub fn last(&self) -> Year {
        match *self {
            YearSpec::Single(y) | YearSpec::Range(_, y) => y,
        }
    }
}

/// A validated, deduplicated, ascending set of months in `[1, 12]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthSpec(Vec<u8>);

impl MonthSpec {
    /// All twelve months.
    pub fn all() -> Self {
        MonthSpec((1..=12).collect())
    }

    /// The months, ascending.
    pub fn months(&self) -> &[u8] {
        &self.0
    }
}

/// The outcome of [`validate`]; each field is present when its input was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidatedInput {
    /// Validated year specification.
    pub years: Option<YearSpec>,
    /// Validated month selection.
    pub months: Option<MonthSpec>,
    /// Validated date range.
    pub dates: Option<DateRange>,
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Validate the supplied inputs against the reference year `now_year`.
///
/// Years must lie within `[now_year - 100, now_year + 50]`. Inputs are
/// checked in the order year, month, date range and the first failure is
/// returned. Requiring at least one of year and date range is left to the
/// caller.
pub fn validate(
    years: Option<&YearInput>,
    months: Option<&MonthInput>,
    dates: Option<&DateRangeInput>,
    now_year: Year,
) -> Result<ValidatedInput> {
    Ok(ValidatedInput {
        years: years.map(|y| validate_years(y, now_year)).transpose()?,
        months: months.map(validate_months).transpose()?,
        dates: dates.map(validate_dates).transpose()?,
    })
}

/// Validate a year specification.
pub fn validate_years(input: &YearInput, now_year: Year) -> Result<YearSpec> {
    match input {
        YearInput::Value(y) => {
            check_year_bounds(*y, now_year)?;
            Ok(YearSpec::Single(*y))
        }
        YearInput::Pair(start, end) => {
            ensure!(start <= end, InvalidYear, "start {start} is after end {end}");
            check_year_bounds(*start, now_year)?;
            check_year_bounds(*end, now_year)?;
            Ok(YearSpec::Range(*start, *end))
        }
        YearInput::Text(text) => {
            let tokens = tokens(text);
            ensure!(
                tokens.len() <= 2,
                TooManyInputs,
                "expected one or two years, found {} in '{text}'",
                tokens.len()
            );
            let parsed = tokens
                .iter()
                .map(|t| t.parse::<Year>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| Error::InvalidYear(format!("'{text}' is not a year or year range")))?;
            match parsed.as_slice() {
                [y] => validate_years(&YearInput::Value(*y), now_year),
                [start, end] => validate_years(&YearInput::Pair(*start, *end), now_year),
                _ => fail!(InvalidYear, "no year found in '{text}'"),
            }
        }
    }
}

/// Validate a month selection.
pub fn validate_months(input: &MonthInput) -> Result<MonthSpec> {
    let values: Vec<i32> = match input {
        MonthInput::Value(m) => vec![*m],
        MonthInput::List(ms) => ms.clone(),
        MonthInput::Text(text) => tokens(text)
            .iter()
            .map(|t| t.parse::<i32>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| Error::InvalidMonth(format!("'{text}' is not a list of months")))?,
    };
    ensure!(!values.is_empty(), InvalidMonth, "no month given");
    let mut months = BTreeSet::new();
    for m in values {
        ensure!((1..=12).contains(&m), InvalidMonth, "{m} is not in [1, 12]");
        months.insert(m as u8);
    }
    Ok(MonthSpec(months.into_iter().collect()))
}

/// Validate a date range.
pub fn validate_dates(input: &DateRangeInput) -> Result<DateRange> {
    let (start, end) = match input {
        DateRangeInput::Dates(start, end) => (*start, *end),
        DateRangeInput::Text(start, end) => (parse_bound(start, false)?, parse_bound(end, true)?),
    };
    DateRange::new(start, end)
}

fn check_year_bounds(year: Year, now_year: Year) -> Result<()> {
    let (lo, hi) = (now_year - YEARS_BEFORE, now_year + YEARS_AFTER);
    ensure!(
        (lo..=hi).contains(&year),
        InvalidYear,
        "{year} is outside [{lo}, {hi}]"
    );
    Ok(())
}

/// Parse `YYYY-M` or `YYYY-M-D`; a missing day resolves to the first of the
/// month, or the last when `is_end`.
fn parse_bound(text: &str, is_end: bool) -> Result<Date> {
    let parts = tokens(text);
    ensure!(
        parts.len() == 2 || parts.len() == 3,
        InvalidDateRange,
        "'{text}' must be year-month or year-month-day"
    );
    let nums = parts
        .iter()
        .map(|p| p.parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| Error::InvalidDateRange(format!("'{text}' is not a date")))?;
    let invalid = |e: Error| Error::InvalidDateRange(format!("'{text}': {e}"));
    match nums.as_slice() {
        [y, m, d] => Date::from_ymd_i32(*y, *m, *d).map_err(invalid),
        [y, m] => {
            let first = Date::from_ymd_i32(*y, *m, 1).map_err(invalid)?;
            Ok(if is_end { first.end_of_month() } else { first })
        }
        _ => unreachable!("token count checked above"),
    }
}

fn tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Year = 2026;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn years(input: YearInput) -> Result<YearSpec> {
        validate_years(&input, NOW)
    }

    #[test]
    fn single_year_bounds() {
        assert_eq!(years(YearInput::Value(2024)), Ok(YearSpec::Single(2024)));
        assert_eq!(years(YearInput::Value(1926)), Ok(YearSpec::Single(1926)));
        assert_eq!(years(YearInput::Value(2076)), Ok(YearSpec::Single(2076)));
        assert!(matches!(years(YearInput::Value(1925)), Err(Error::InvalidYear(_))));
        assert!(matches!(years(YearInput::Value(2077)), Err(Error::InvalidYear(_))));
    }

    #[test]
    fn pair_must_be_ordered_and_bounded() {
        assert_eq!(
            years(YearInput::Pair(2023, 2025)),
            Ok(YearSpec::Range(2023, 2025))
        );
        assert!(matches!(years(YearInput::Pair(2025, 2023)), Err(Error::InvalidYear(_))));
        assert!(matches!(years(YearInput::Pair(2020, 2100)), Err(Error::InvalidYear(_))));
    }

    #[test]
    fn year_text() {
        assert_eq!(years(YearInput::Text("2024".into())), Ok(YearSpec::Single(2024)));
        assert_eq!(
            years(YearInput::Text(" 2023 - 2025 ".into())),
            Ok(YearSpec::Range(2023, 2025))
        );
        assert_eq!(
            years(YearInput::Text("2023,2025".into())),
            Ok(YearSpec::Range(2023, 2025))
        );
        assert!(matches!(
            years(YearInput::Text("2023-2024-2025".into())),
            Err(Error::TooManyInputs(_))
        ));
        assert!(matches!(years(YearInput::Text("twenty".into())), Err(Error::InvalidYear(_))));
        assert!(matches!(years(YearInput::Text("".into())), Err(Error::InvalidYear(_))));
        assert!(matches!(years(YearInput::Text("2025-2023".into())), Err(Error::InvalidYear(_))));
    }

    #[test]
    fn months_are_sorted_and_deduplicated() {
        let spec = validate_months(&MonthInput::List(vec![12, 3, 3, 1])).unwrap();
        assert_eq!(spec.months(), &[1, 3, 12]);
        let spec = validate_months(&MonthInput::Text("4, 2;2".into())).unwrap();
        assert_eq!(spec.months(), &[2, 4]);
        assert_eq!(validate_months(&MonthInput::Value(7)).unwrap().months(), &[7]);
        assert_eq!(MonthSpec::all().months().len(), 12);
    }

    #[test]
    fn bad_months() {
        for input in [
            MonthInput::Value(0),
            MonthInput::Value(13),
            MonthInput::List(vec![1, 14]),
            MonthInput::List(vec![]),
            MonthInput::Text("1, x".into()),
            MonthInput::Text("".into()),
        ] {
            assert!(
                matches!(validate_months(&input), Err(Error::InvalidMonth(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn truncated_dates_expand_to_month_bounds() {
        let r = validate_dates(&DateRangeInput::Text("2024-2".into(), "2024-2".into())).unwrap();
        assert_eq!(r.start(), date(2024, 2, 1));
        assert_eq!(r.end(), date(2024, 2, 29));
        let r = validate_dates(&DateRangeInput::Text("2024-12-20".into(), "2024-12-31".into()))
            .unwrap();
        assert_eq!(r.len_days(), 12);
    }

    #[test]
    fn bad_date_ranges() {
        for (a, b) in [
            ("2024", "2024-12"),
            ("2024-1-1-1", "2024-12"),
            ("2024-12-31", "2024-12-01"),
            ("2024-02-30", "2024-03-01"),
            ("2024-xx", "2024-12"),
        ] {
            let input = DateRangeInput::Text(a.into(), b.into());
            assert!(
                matches!(validate_dates(&input), Err(Error::InvalidDateRange(_))),
                "{a} {b}"
            );
        }
        let typed = DateRangeInput::Dates(date(2024, 5, 2), date(2024, 5, 1));
        assert!(matches!(validate_dates(&typed), Err(Error::InvalidDateRange(_))));
    }

    #[test]
    fn year_is_checked_before_month_and_dates() {
        let err = validate(
            Some(&YearInput::Value(1800)),
            Some(&MonthInput::Value(13)),
            Some(&DateRangeInput::Text("bad".into(), "bad".into())),
            NOW,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidYear(_)));
        let err = validate(
            None,
            Some(&MonthInput::Value(13)),
            Some(&DateRangeInput::Text("bad".into(), "bad".into())),
            NOW,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidMonth(_)));
    }

    #[test]
    fn reference_year_is_explicit() {
        assert!(validate_years(&YearInput::Value(1950), 2026).is_ok());
        assert!(validate_years(&YearInput::Value(1950), 2060).is_err());
    }

    #[test]
    fn inputs_deserialize_from_loose_shapes() {
        let y: YearInput = serde_json::from_str("2024").unwrap();
        assert_eq!(y, YearInput::Value(2024));
        let y: YearInput = serde_json::from_str("[2023, 2025]").unwrap();
        assert_eq!(y, YearInput::Pair(2023, 2025));
        let m: MonthInput = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(m, MonthInput::List(vec![1, 2]));
        let d: DateRangeInput = serde_json::from_str(r#"["2024-12-20", "2024-12-31"]"#).unwrap();
        assert_eq!(d, DateRangeInput::Dates(date(2024, 12, 20), date(2024, 12, 31)));
        let d: DateRangeInput = serde_json::from_str(r#"["2024-11", "2024-12"]"#).unwrap();
        assert_eq!(d, DateRangeInput::Text("2024-11".into(), "2024-12".into()));
    }
}
