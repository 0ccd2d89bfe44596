//! Exporting the holiday and workday tables.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;
use wd_core::errors::{Error, Result};
use wd_holidays::HolidayCalendar;

use crate::counts::WorkdayCount;

/// File name used when the destination is a directory.
pub const DEFAULT_FILE_NAME: &str = "workdays.json";

/// Persists the two result tables of a report.
pub trait TableExporter {
    /// Write `holidays` and `workdays` to `destination`. Failures are
    /// reported as [`Error::Export`] and never retried.
    fn export(
        &self,
        holidays: &HolidayCalendar,
        workdays: &[WorkdayCount],
        destination: &Path,
    ) -> Result<()>;
}

/// Two-sheet workbook document.
#[derive(Debug, Serialize)]
struct Workbook<'a> {
    holidays: &'a HolidayCalendar,
    workdays: &'a [WorkdayCount],
}

/// Writes a pretty-printed JSON workbook `{"holidays": [...], "workdays": [...]}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWorkbookExporter;

impl JsonWorkbookExporter {
    /// The file actually written for `destination`.
    pub fn target(destination: &Path) -> PathBuf {
        if destination.is_dir() {
            destination.join(DEFAULT_FILE_NAME)
        } else {
            destination.to_path_buf()
        }
    }

    /// Render the workbook without writing it.
    pub fn to_json(holidays: &HolidayCalendar, workdays: &[WorkdayCount]) -> Result<String> {
        serde_json::to_string_pretty(&Workbook { holidays, workdays }).map_err(|e| Error::Export {
            path: "<memory>".into(),
            reason: e.to_string(),
        })
    }
}

impl TableExporter for JsonWorkbookExporter {
    fn export(
        &self,
        holidays: &HolidayCalendar,
        workdays: &[WorkdayCount],
        destination: &Path,
    ) -> Result<()> {
        let path = Self::target(destination);
        let export_err = |reason: String| Error::Export {
            path: path.display().to_string(),
            reason,
        };
        let json = serde_json::to_string_pretty(&Workbook { holidays, workdays })
            .map_err(|e| export_err(e.to_string()))?;
        std::fs::write(&path, json).map_err(|e| export_err(e.to_string()))?;
        info!(
            path = %path.display(),
            holidays = holidays.len(),
            workdays = workdays.len(),
            "tables exported"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_holidays::HolidayRecord;
    use wd_time::Date;

    fn tables() -> (HolidayCalendar, Vec<WorkdayCount>) {
        let day = Date::from_ymd(2024, 1, 1).unwrap();
        let holidays =
            HolidayCalendar::from_records(vec![HolidayRecord::new(2024, "New Year's Day", day)]);
        (holidays, vec![WorkdayCount::month(2024, 1, 21)])
    }

    #[test]
    fn workbook_has_both_sheets() {
        let (holidays, workdays) = tables();
        let json = JsonWorkbookExporter::to_json(&holidays, &workdays).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["holidays"][0]["name"], "New Year's Day");
        assert_eq!(value["holidays"][0]["observed_date"], "2024-01-01");
        assert_eq!(value["workdays"][0]["period"], "2024-01");
        assert_eq!(value["workdays"][0]["workdays"], 21);
    }

    #[test]
    fn directory_destination_gets_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let (holidays, workdays) = tables();
        JsonWorkbookExporter
            .export(&holidays, &workdays, dir.path())
            .unwrap();
        let written = std::fs::read_to_string(dir.path().join(DEFAULT_FILE_NAME)).unwrap();
        assert!(written.contains("\"workdays\""));
    }

    #[test]
    fn explicit_file_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let (holidays, workdays) = tables();
        JsonWorkbookExporter.export(&holidays, &workdays, &path).unwrap();
        assert!(path.is_file());
        assert_eq!(JsonWorkbookExporter::target(&path), path);
    }

    #[test]
    fn missing_parent_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.json");
        let (holidays, workdays) = tables();
        let err = JsonWorkbookExporter
            .export(&holidays, &workdays, &path)
            .unwrap_err();
        assert!(matches!(err, Error::Export { .. }));
    }
}
