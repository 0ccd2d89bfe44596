//! The one-call entry point.

use workdays::report::{DateRangeInput, YearInput};
use workdays::{count_workdays, current_year, Error, ReportRequest};

#[test]
fn year_request_returns_both_tables() {
    let output = count_workdays(&ReportRequest::for_years(YearInput::Value(2024)), 2026).unwrap();
    let holidays = output.holidays.unwrap();
    let workdays = output.workdays.unwrap();
    assert_eq!(workdays.len(), 12);
    assert_eq!(workdays.iter().map(|w| w.workdays()).sum::<u32>(), 249);
    // 5 single-day holidays, 2 Thanksgiving days and 8 shutdown days.
    assert_eq!(holidays.len(), 15);
}

#[test]
fn range_request_with_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("christmas.json");
    let request = ReportRequest::for_dates(DateRangeInput::Text(
        "2024-12-20".into(),
        "2024-12-31".into(),
    ))
    .exporting_to(&path);
    let output = count_workdays(&request, 2026).unwrap();
    assert_eq!(output.workdays.unwrap()[0].workdays(), 2);
    assert!(path.is_file());
}

#[test]
fn empty_request_is_rejected() {
    assert_eq!(
        count_workdays(&ReportRequest::default(), 2026),
        Err(Error::MissingInput)
    );
}

#[test]
fn live_year_is_plausible() {
    assert!(current_year() >= 2024);
}
