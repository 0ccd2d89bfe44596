//! Easter Sunday and the movable feasts derived from it.
//!
//! Easter is computed with the Meeus/Jones/Butcher (anonymous Gregorian)
//! algorithm, which is exact integer arithmetic for every Gregorian year.

use crate::date::Date;
use wd_core::errors::Result;

/// Return Easter Sunday of `year`.
///
/// # Errors
/// Returns an error if `year` is outside the supported date range.
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd_i32(y, month, day)
}

/// Return Good Friday of `year` (two days before Easter Sunday).
pub fn good_friday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(-2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let expected = [
            (1961, 4, 2),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
        ];
        for (y, m, d) in expected {
            assert_eq!(easter_sunday(y).unwrap(), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn good_friday_2024() {
        assert_eq!(good_friday(2024).unwrap(), date(2024, 3, 29));
    }

    #[test]
    fn always_sunday_and_friday() {
        for y in 1900..=2199 {
            assert_eq!(easter_sunday(y).unwrap().weekday(), Weekday::Sunday, "{y}");
            assert_eq!(good_friday(y).unwrap().weekday(), Weekday::Friday, "{y}");
        }
    }
}
