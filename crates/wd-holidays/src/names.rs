//! Holiday names as reported by the provider and written to reports.

use wd_core::HolidayToggles;

/// January 1.
pub const NEW_YEARS_DAY: &str = "New Year's Day";
/// Third Monday of January.
pub const MLK_DAY: &str = "Martin Luther King Jr. Day";
/// Third Monday of February.
pub const WASHINGTONS_BIRTHDAY: &str = "Washington's Birthday";
/// Last Monday of May.
pub const MEMORIAL_DAY: &str = "Memorial Day";
/// June 19.
pub const JUNETEENTH: &str = "Juneteenth National Independence Day";
/// July 4.
pub const INDEPENDENCE_DAY: &str = "Independence Day";
/// First Monday of September.
pub const LABOR_DAY: &str = "Labor Day";
/// Second Monday of October.
pub const COLUMBUS_DAY: &str = "Columbus Day";
/// November 11.
pub const VETERANS_DAY: &str = "Veterans Day";
/// Fourth Thursday of November, and the Friday after it.
pub const THANKSGIVING: &str = "Thanksgiving";
/// December 24.
pub const CHRISTMAS_EVE: &str = "Christmas Eve";
/// December 25.
pub const CHRISTMAS_DAY: &str = "Christmas Day";
/// Two days before Easter Sunday.
pub const GOOD_FRIDAY: &str = "Good Friday";
/// Each day from December 24 through December 31 when the shutdown is on.
pub const CHRISTMAS_SHUTDOWN: &str = "Christmas Shutdown";

/// Holidays observed regardless of toggles.
pub const BASE_SET: [&str; 7] = [
    NEW_YEARS_DAY,
    MLK_DAY,
    MEMORIAL_DAY,
    INDEPENDENCE_DAY,
    LABOR_DAY,
    THANKSGIVING,
    CHRISTMAS_DAY,
];

/// The provider names kept for the given toggles.
///
/// Good Friday is not a provider holiday and is handled separately.
pub fn configured_names(toggles: &HolidayToggles) -> Vec<&'static str> {
    let mut names = BASE_SET.to_vec();
    if toggles.include_veterans_day {
        names.push(VETERANS_DAY);
    }
    if toggles.include_juneteenth {
        names.push(JUNETEENTH);
    }
    if toggles.include_columbus_day {
        names.push(COLUMBUS_DAY);
    }
    names
}
