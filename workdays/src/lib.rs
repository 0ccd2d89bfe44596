//! # workdays
//!
//! How many working days fall in a period, given the observed US federal
//! holidays and an optional Christmas shutdown.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! a one-call entry point. Front ends (a UI, a CLI) should depend on this
//! crate rather than the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use workdays::report::{ReportRequest, YearInput};
//!
//! let request = ReportRequest::for_years(YearInput::Value(2024));
//! let output = workdays::count_workdays(&request, 2026).unwrap();
//! let rows = output.workdays.unwrap();
//! assert_eq!(rows.len(), 12);
//! assert_eq!(rows[0].workdays(), 21);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use chrono::Datelike;

/// Error and configuration types.
pub use wd_core as core;

/// Dates, date ranges, Easter and business-day counting.
pub use wd_time as time;

/// Holiday providers and the observed holiday calendar.
pub use wd_holidays as holidays;

/// Input validation, reports and export.
pub use wd_report as report;

pub use wd_core::{Error, HolidayToggles, Inclusivity, Result};
pub use wd_report::{ReportOutput, ReportRequest};

/// Run `request` against the built-in United States holidays, exporting to
/// JSON when the request names a path.
///
/// `now_year` anchors year validation; pass [`current_year`] for a live
/// anchor.
pub fn count_workdays(request: &ReportRequest, now_year: i32) -> Result<ReportOutput> {
    let source = holidays::ObservedHolidayCalendar::new(holidays::UsFederalHolidays);
    report::WorkdayReportOrchestrator::new(source).run(
        request,
        now_year,
        &report::JsonWorkbookExporter,
    )
}

/// The current year on the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
