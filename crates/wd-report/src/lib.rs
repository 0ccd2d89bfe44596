//! # wd-report
//!
//! Turns loosely specified year, month and date-range inputs into workday
//! counts.
//!
//! [`validate`] normalizes caller input into typed specifications; the
//! [`WorkdayReportOrchestrator`] builds the observed holiday calendar once
//! for the years involved and counts workdays either per month or over a
//! single date range. A [`ReportRequest`] bundles everything an outside
//! caller supplies, and a [`TableExporter`] persists the two result tables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Counted workday rows.
pub mod counts;

/// Exporting the holiday and workday tables.
pub mod export;

/// Parsing and validation of caller input.
pub mod input;

/// The report orchestrator.
pub mod report;

/// The caller-facing request and its output.
pub mod request;

pub use counts::WorkdayCount;
pub use export::{JsonWorkbookExporter, TableExporter};
pub use input::{
    validate, DateRangeInput, MonthInput, MonthSpec, ValidatedInput, YearInput, YearSpec,
};
pub use report::{WorkdayReport, WorkdayReportOrchestrator};
pub use request::{ReportOutput, ReportRequest};
