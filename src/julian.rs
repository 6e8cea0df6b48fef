//! julian.rs
//!
//! The Julian Day bridge: pure arithmetic between Julian Day numbers, the
//! proleptic Gregorian calendar and the tabular (arithmetical) Hijri
//! calendar. Nothing here can fail; every other conversion in the crate is
//! built on these functions.
//!
//! # Conventions
//!
//! Two Julian Day conventions meet in this module:
//!
//! - **Gregorian JDs are integers** and name the day by its noon
//!   (`2000-01-01` is `2451545`).
//! - **Hijri JDs are fractional** and name the day by its preceding
//!   midnight (`x.5`). The tabular epoch, 1 Muharram 1 AH, is `1948439.5`.
//!
//! `julian_day_to_gregorian` accepts either form (`floor(jd + 0.5)` picks the
//! day). Going from a Gregorian date to Hijri goes through the midnight form,
//! see [`gregorian_to_tabular_hijri`].
//!
//! # Tabular Hijri calendar
//!
//! A day count is taken from the closed form
//!
//! ```text
//! d + ceil(29.5 * (m - 1)) + (y - 1) * 354 + floor((3 + 11 * y) / 30)
//! ```
//!
//! which gives months alternating 30/29 days and a 30-day twelfth month in
//! the 11 leap years of each 30-year cycle (2, 5, 7, 10, 13, 16, 18, 21, 24,
//! 26, 29). Month lengths and leap years below are derived from this form.

/// Julian Day of the midnight starting 1 Muharram 1 AH (tabular epoch).
pub const HIJRI_EPOCH: f64 = 1948439.5;

/// Converts a proleptic Gregorian date to its (noon) Julian Day number.
///
/// ```
/// # use hijri_accrual::julian::gregorian_to_julian_day;
/// assert_eq!(gregorian_to_julian_day(2000, 1, 1), 2451545);
/// assert_eq!(gregorian_to_julian_day(2023, 7, 19), 2460145);
/// ```
pub fn gregorian_to_julian_day(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (14 - m).div_euclid(12);
    let y2 = y + 4800 - a;
    let m2 = m + 12 * a - 3;
    d + (153 * m2 + 2).div_euclid(5) + 365 * y2 + y2.div_euclid(4) - y2.div_euclid(100)
        + y2.div_euclid(400)
        - 32045
}

/// Converts a Julian Day (noon integer or midnight `x.5`) back to a proleptic
/// Gregorian `(year, month, day)`.
///
/// ```
/// # use hijri_accrual::julian::julian_day_to_gregorian;
/// assert_eq!(julian_day_to_gregorian(2451545.0), (2000, 1, 1));
/// // The midnight that starts the same day.
/// assert_eq!(julian_day_to_gregorian(2451544.5), (2000, 1, 1));
/// ```
pub fn julian_day_to_gregorian(jd: f64) -> (i32, u32, u32) {
    let z = (jd + 0.5).floor();
    let alpha = ((z - 1867216.25) / 36524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day as u32)
}

/// Counts days from the tabular epoch; 1 Muharram 1 AH is day 1.
///
/// ```
/// # use hijri_accrual::julian::hijri_to_absolute_day;
/// assert_eq!(hijri_to_absolute_day(1, 1, 1), 1);
/// assert_eq!(hijri_to_absolute_day(1, 2, 1), 31);
/// assert_eq!(hijri_to_absolute_day(1445, 1, 1), 511706);
/// ```
pub fn hijri_to_absolute_day(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    // ceil(29.5 * (m - 1)) in integers
    let month_days = (59 * (m - 1) + 1).div_euclid(2);
    d + month_days + (y - 1) * 354 + (3 + 11 * y).div_euclid(30)
}

/// Shifts a tabular absolute day onto the (midnight) Julian Day scale.
pub fn absolute_day_to_julian_day(days: i64) -> f64 {
    days as f64 + HIJRI_EPOCH - 1.0
}

/// Inverse of [`absolute_day_to_julian_day`].
pub fn julian_day_to_absolute_day(jd: f64) -> i64 {
    let midnight = jd.floor() + 0.5;
    (midnight - HIJRI_EPOCH).floor() as i64 + 1
}

/// Tabular Hijri date to its midnight Julian Day.
pub fn hijri_to_julian_day(year: i32, month: u32, day: u32) -> f64 {
    absolute_day_to_julian_day(hijri_to_absolute_day(year, month, day))
}

/// Converts a Julian Day to a tabular Hijri `(year, month, day)`.
///
/// The year comes from `floor((30 * days + 10646) / 10631)` and is then
/// checked against the absolute day of the neighbouring new years, the month
/// is the last month whose first day is not after `days`, and the day is the
/// remainder. This makes it the exact inverse of [`hijri_to_julian_day`].
///
/// ```
/// # use hijri_accrual::julian::{hijri_to_julian_day, julian_day_to_hijri};
/// let jd = hijri_to_julian_day(1445, 12, 30);
/// assert_eq!(julian_day_to_hijri(jd), (1445, 12, 30));
/// ```
pub fn julian_day_to_hijri(jd: f64) -> (i32, u32, u32) {
    let days = julian_day_to_absolute_day(jd);

    let mut year = (30 * days + 10646).div_euclid(10631) as i32;
    while hijri_to_absolute_day(year + 1, 1, 1) <= days {
        year += 1;
    }
    while hijri_to_absolute_day(year, 1, 1) > days {
        year -= 1;
    }

    let month = (1..=12u32)
        .rev()
        .find(|&m| hijri_to_absolute_day(year, m, 1) <= days)
        .unwrap_or(1);
    let day = (days - hijri_to_absolute_day(year, month, 1) + 1) as u32;
    (year, month, day)
}

/// Tabular Hijri date to proleptic Gregorian.
///
/// ```
/// # use hijri_accrual::julian::tabular_to_gregorian;
/// assert_eq!(tabular_to_gregorian(1, 1, 1), (622, 7, 19));
/// assert_eq!(tabular_to_gregorian(1445, 1, 1), (2023, 7, 19));
/// ```
pub fn tabular_to_gregorian(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    julian_day_to_gregorian(hijri_to_julian_day(year, month, day))
}

/// Proleptic Gregorian date to tabular Hijri.
///
/// The Gregorian JD is a noon number while the Hijri scale counts from
/// midnight, so the day is looked up at `jd - 0.5`.
///
/// ```
/// # use hijri_accrual::julian::gregorian_to_tabular_hijri;
/// assert_eq!(gregorian_to_tabular_hijri(2023, 7, 19), (1445, 1, 1));
/// assert_eq!(gregorian_to_tabular_hijri(2023, 7, 18), (1444, 12, 29));
/// ```
pub fn gregorian_to_tabular_hijri(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    julian_day_to_hijri(gregorian_to_julian_day(year, month, day) as f64 - 0.5)
}

/// Number of days in a tabular Hijri year (354 or 355).
pub fn tabular_year_length(year: i32) -> u32 {
    (hijri_to_absolute_day(year + 1, 1, 1) - hijri_to_absolute_day(year, 1, 1)) as u32
}

/// Whether `year` has a 30-day Dhu al-Hijjah in the tabular calendar.
///
/// ```
/// # use hijri_accrual::julian::is_tabular_leap_year;
/// let leaps: Vec<i32> = (1..=30).filter(|&y| is_tabular_leap_year(y)).collect();
/// assert_eq!(leaps, vec![2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
/// ```
pub fn is_tabular_leap_year(year: i32) -> bool {
    tabular_year_length(year) == 355
}

/// Number of days in a tabular Hijri month.
pub fn tabular_days_in_month(year: i32, month: u32) -> u32 {
    let next = if month >= 12 {
        hijri_to_absolute_day(year + 1, 1, 1)
    } else {
        hijri_to_absolute_day(year, month + 1, 1)
    };
    (next - hijri_to_absolute_day(year, month, 1)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_month_lengths_alternate() {
        let lengths: Vec<u32> = (1..=12).map(|m| tabular_days_in_month(1444, m)).collect();
        assert_eq!(lengths, vec![30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]);
        // 1445 is year 5 of its cycle.
        assert!(is_tabular_leap_year(1445));
        assert_eq!(tabular_days_in_month(1445, 12), 30);
    }

    #[test]
    fn test_cycle_is_10631_days() {
        let cycle: u32 = (1..=30).map(tabular_year_length).sum();
        assert_eq!(cycle, 10631);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(hijri_to_julian_day(1, 1, 1), HIJRI_EPOCH);
        assert_eq!(julian_day_to_hijri(HIJRI_EPOCH), (1, 1, 1));
        assert_eq!(julian_day_to_absolute_day(HIJRI_EPOCH + 0.25), 1);
    }

    #[test]
    fn test_known_gregorian_days() {
        assert_eq!(julian_day_to_gregorian(2460145.0), (2023, 7, 19));
        assert_eq!(gregorian_to_julian_day(1970, 1, 1), 2440588);
        assert_eq!(julian_day_to_gregorian(2440588.0), (1970, 1, 1));
        // Leap day across a century rule.
        let jd = gregorian_to_julian_day(2000, 2, 29);
        assert_eq!(julian_day_to_gregorian(jd as f64 + 1.0), (2000, 3, 1));
    }

    #[test]
    fn test_year_boundary() {
        let last = hijri_to_absolute_day(1444, 12, 29);
        let first = hijri_to_absolute_day(1445, 1, 1);
        assert_eq!(first - last, 1);
        assert_eq!(julian_day_to_hijri(absolute_day_to_julian_day(last)), (1444, 12, 29));
        assert_eq!(julian_day_to_hijri(absolute_day_to_julian_day(first)), (1445, 1, 1));
    }

    proptest! {
        #[test]
        fn prop_tabular_hijri_round_trip(
            year in 1i32..3000,
            month in 1u32..=12,
            day_seed in 0u32..30,
        ) {
            let day = 1 + day_seed % tabular_days_in_month(year, month);
            let jd = absolute_day_to_julian_day(hijri_to_absolute_day(year, month, day));
            prop_assert_eq!(julian_day_to_hijri(jd), (year, month, day));
        }

        #[test]
        fn prop_gregorian_round_trip(jd in 2_100_000i64..2_600_000) {
            let (y, m, d) = julian_day_to_gregorian(jd as f64);
            prop_assert_eq!(gregorian_to_julian_day(y, m, d), jd);
            prop_assert_eq!(julian_day_to_gregorian(gregorian_to_julian_day(y, m, d) as f64), (y, m, d));
        }

        #[test]
        fn prop_tabular_through_gregorian(
            year in 1300i32..1600,
            month in 1u32..=12,
            day_seed in 0u32..30,
        ) {
            let day = 1 + day_seed % tabular_days_in_month(year, month);
            let (gy, gm, gd) = tabular_to_gregorian(year, month, day);
            prop_assert_eq!(gregorian_to_tabular_hijri(gy, gm, gd), (year, month, day));
        }
    }
}
