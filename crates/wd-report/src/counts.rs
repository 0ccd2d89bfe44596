//! Counted workday rows.

use serde::Serialize;
use wd_core::DayCount;
use wd_time::Date;

/// One row of the workday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WorkdayCount {
    /// Workdays in one calendar month, labeled `YYYY-MM`.
    Month {
        /// The `YYYY-MM` label.
        period: String,
        /// Net workdays in the month.
        workdays: DayCount,
    },
    /// Workdays over an explicit (boundary-adjusted) range.
    Range {
        /// First day counted.
        start: Date,
        /// Last day counted.
        end: Date,
        /// Net workdays in the range.
        workdays: DayCount,
    },
}

impl WorkdayCount {
    /// A month row for `year`/`month`.
    pub fn month(year: i32, month: u8, workdays: DayCount) -> Self {
        WorkdayCount::Month {
            period: format!("{year:04}-{month:02}"),
            workdays,
        }
    }

    /// The number of workdays in the row.
    pub fn workdays(&self) -> DayCount {
        match self {
            WorkdayCount::Month { workdays, .. } | WorkdayCount::Range { workdays, .. } => {
                *workdays
            }
        }
    }

    /// `YYYY-MM` for month rows, `start..=end` for range rows.
    pub fn label(&self) -> String {
        match self {
            WorkdayCount::Month { period, .. } => period.clone(),
            WorkdayCount::Range { start, end, .. } => format!("{start}..={end}"),
        }
    }
}
