//! The caller-facing request and its output.
//!
//! A [`ReportRequest`] carries everything a front end supplies. It can be
//! built in code or read from a TOML document:
//!
//! ```toml
//! years = "2023-2025"
//! months = [1, 2, 3]
//! inclusivity = "left"
//! return_holidays = false
//!
//! [toggles]
//! include_good_friday = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wd_core::errors::{Error, Result};
use wd_core::{HolidayToggles, Inclusivity, Year};
use wd_holidays::{HolidayCalendar, HolidaySource};

use crate::counts::WorkdayCount;
use crate::export::TableExporter;
use crate::input::{DateRangeInput, MonthInput, YearInput};
use crate::report::WorkdayReportOrchestrator;

/// Everything needed to run one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportRequest {
    /// Year specification; takes precedence over `dates`.
    pub years: Option<YearInput>,
    /// Months to report in month mode; all twelve when absent.
    pub months: Option<MonthInput>,
    /// Date range for range mode.
    pub dates: Option<DateRangeInput>,
    /// Boundary policy.
    pub inclusivity: Inclusivity,
    /// Optional holidays and the Christmas shutdown.
    pub toggles: HolidayToggles,
    /// Return the holiday table.
    pub return_holidays: bool,
    /// Return the workday table.
    pub return_workdays: bool,
    /// Export both tables here after a successful report.
    pub export_path: Option<PathBuf>,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            years: None,
            months: None,
            dates: None,
            inclusivity: Inclusivity::default(),
            toggles: HolidayToggles::default(),
            return_holidays: true,
            return_workdays: true,
            export_path: None,
        }
    }
}

impl ReportRequest {
    /// A month-mode request.
    pub fn for_years(years: YearInput) -> Self {
        Self {
            years: Some(years),
            ..Self::default()
        }
    }

    /// A range-mode request.
    pub fn for_dates(dates: DateRangeInput) -> Self {
        Self {
            dates: Some(dates),
            ..Self::default()
        }
    }

    /// Restrict month mode to `months`.
    pub fn with_months(mut self, months: MonthInput) -> Self {
        self.months = Some(months);
        self
    }

    /// Set the boundary policy.
    pub fn with_inclusivity(mut self, inclusivity: Inclusivity) -> Self {
        self.inclusivity = inclusivity;
        self
    }

    /// Set the holiday toggles.
    pub fn with_toggles(mut self, toggles: HolidayToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// Export the tables to `path`.
    pub fn exporting_to(mut self, path: impl AsRef<Path>) -> Self {
        self.export_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Parse a request from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }
}

/// The tables a request asked for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReportOutput {
    /// Present when `return_holidays` was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holidays: Option<HolidayCalendar>,
    /// Present when `return_workdays` was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdays: Option<Vec<WorkdayCount>>,
}

impl<S: HolidaySource> WorkdayReportOrchestrator<S> {
    /// Run `request`, export when it names a path, and return the requested
    /// tables.
    pub fn run(
        &self,
        request: &ReportRequest,
        now_year: Year,
        exporter: &dyn TableExporter,
    ) -> Result<ReportOutput> {
        let report = self.report(
            request.years.as_ref(),
            request.months.as_ref(),
            request.dates.as_ref(),
            request.inclusivity,
            &request.toggles,
            now_year,
        )?;
        if let Some(path) = &request.export_path {
            exporter.export(&report.holidays, &report.workdays, path)?;
        }
        Ok(ReportOutput {
            holidays: request.return_holidays.then_some(report.holidays),
            workdays: request.return_workdays.then_some(report.workdays),
        })
    }
}
