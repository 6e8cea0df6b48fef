//! date.rs
//!
//! The Hijri calendar-date value used across the crate.
//!
//! A [`HijriDate`] is a plain `(year, month, day)` triple. It does not know
//! which calendar system produced it: the same triple names (usually) a
//! slightly different Gregorian day under Umm al-Qura and under the tabular
//! calendar, so converting it always goes through a
//! [`Calendar`](crate::calendar::Calendar) with an explicit mode.
//!
//! Construction only checks the ranges that hold in every mode (month
//! 1–12, day 1–30). Checking the day against the real length of the month
//! needs a mode and is done by `Calendar::parse_hijri_date`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::julian::hijri_to_absolute_day;
use crate::{HIJRI_MONTH_NAMES, HIJRI_MONTH_NAMES_AR};

/// Longest month of any Hijri calendar.
pub const MAX_MONTH_DAYS: u32 = 30;

/// An immutable Hijri `(year, month, day)`.
///
/// Ordering is chronological.
///
/// ```
/// # use hijri_accrual::HijriDate;
/// let date = HijriDate::new(1445, 1, 3).unwrap();
/// assert_eq!(date.to_string(), "1445-01-03");
/// assert_eq!(date.month_name(), "Muharram");
/// assert!(HijriDate::new(1445, 13, 1).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "HijriParts")]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Unchecked wire form; deserialization goes through [`HijriDate::new`].
#[derive(Deserialize)]
struct HijriParts {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<HijriParts> for HijriDate {
    type Error = String;

    fn try_from(parts: HijriParts) -> Result<Self, Self::Error> {
        HijriDate::new(parts.year, parts.month, parts.day).ok_or_else(|| {
            format!(
                "{}-{:02}-{:02} is not a valid Hijri date",
                parts.year, parts.month, parts.day
            )
        })
    }
}

impl HijriDate {
    /// Returns `None` unless `year >= 1`, `1 <= month <= 12` and
    /// `1 <= day <= 30`.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        let date = HijriDate { year, month, day };
        date.is_well_formed().then_some(date)
    }

    /// Builds a date from arithmetic output that is known to be in range.
    pub(crate) fn from_parts((year, month, day): (i32, u32, u32)) -> Self {
        HijriDate { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn parts(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Range check shared by [`HijriDate::new`] and deserialization.
    pub fn is_well_formed(&self) -> bool {
        self.year >= 1
            && (1..=12).contains(&self.month)
            && (1..=MAX_MONTH_DAYS).contains(&self.day)
    }

    /// Day count of this triple in the tabular calendar (1 Muharram 1 AH = 1).
    pub fn absolute_day(&self) -> i64 {
        hijri_to_absolute_day(self.year, self.month, self.day)
    }

    /// First day of the same month.
    pub fn first_of_month(&self) -> Self {
        HijriDate { day: 1, ..*self }
    }

    /// First day of the following month, rolling the year after Dhu al-Hijjah.
    pub fn first_of_next_month(&self) -> Self {
        if self.month >= 12 {
            HijriDate { year: self.year + 1, month: 1, day: 1 }
        } else {
            HijriDate { year: self.year, month: self.month + 1, day: 1 }
        }
    }

    /// Transliterated month name ("Muharram" … "Dhu al-Hijjah").
    pub fn month_name(&self) -> &'static str {
        HIJRI_MONTH_NAMES[self.month as usize]
    }

    /// Arabic month name.
    pub fn month_name_ar(&self) -> &'static str {
        HIJRI_MONTH_NAMES_AR[self.month as usize]
    }

    /// Long form, e.g. `3 Muharram 1445`.
    pub fn long_format(&self) -> String {
        format!("{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// `YYYY-MM-DD` with zero-padded month and day.
impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Accepts every format [`parse_hijri_date`](crate::parse::parse_hijri_date) does.
impl FromStr for HijriDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_hijri_date(s)
    }
}
