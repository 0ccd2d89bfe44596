//! Configuration types shared by the calendar and report crates.
//!
//! [`HolidayToggles`] selects the optional holidays and the Christmas
//! shutdown; [`Inclusivity`] decides whether the boundary years (or days)
//! of a requested period are counted. Both deserialize from configuration
//! documents with every field optional.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, Result};

/// Optional holidays and the Christmas shutdown.
///
/// The fixed base set (New Year's Day, Martin Luther King Jr. Day, Memorial
/// Day, Independence Day, Labor Day, Thanksgiving and Christmas Day) is
/// always observed and has no toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HolidayToggles {
    /// Observe Juneteenth National Independence Day.
    pub include_juneteenth: bool,
    /// Observe Good Friday (two days before Easter Sunday).
    pub include_good_friday: bool,
    /// Observe Veterans Day.
    pub include_veterans_day: bool,
    /// Observe Columbus Day.
    pub include_columbus_day: bool,
    /// Replace Christmas Eve and Christmas Day with a shutdown running
    /// from December 24 to December 31.
    pub christmas_shutdown: bool,
}

impl Default for HolidayToggles {
    fn default() -> Self {
        Self {
            include_juneteenth: false,
            include_good_friday: false,
            include_veterans_day: false,
            include_columbus_day: false,
            christmas_shutdown: true,
        }
    }
}

/// Which boundaries of a period count towards the totals.
///
/// Applied to years in month mode and to days in range mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inclusivity {
    /// Keep both boundaries.
    #[default]
    Both,
    /// Keep the first boundary, drop the last.
    Left,
    /// Drop the first boundary, keep the last.
    Right,
    /// Drop both boundaries.
    None,
}

impl Inclusivity {
    /// Whether the first boundary is kept.
    pub fn keeps_start(self) -> bool {
        matches!(self, Inclusivity::Both | Inclusivity::Left)
    }

    /// Whether the last boundary is kept.
    pub fn keeps_end(self) -> bool {
        matches!(self, Inclusivity::Both | Inclusivity::Right)
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Inclusivity::Both => "both",
            Inclusivity::Left => "left",
            Inclusivity::Right => "right",
            Inclusivity::None => "none",
        }
    }
}

impl FromStr for Inclusivity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" => Ok(Inclusivity::Both),
            "left" => Ok(Inclusivity::Left),
            "right" => Ok(Inclusivity::Right),
            "none" => Ok(Inclusivity::None),
            other => Err(Error::Config(format!(
                "inclusivity must be one of both, left, right, none; got '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Inclusivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
