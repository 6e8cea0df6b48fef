//! parse.rs
//!
//! Reads loosely typed Hijri dates as users enter them.
//!
//! Accepted input is anything that, once the Hijri marker (`هـ`) and a few
//! punctuation marks (`،`, `,`, `(`, `)`) are turned into spaces, contains a
//! year of 3–4 digits followed by a month and a day of 1–2 digits, each
//! separated by any run of non-digits. Arabic-Indic digits (`٠`–`٩`) are
//! accepted anywhere ASCII digits are. Text around the three numbers is
//! ignored, so `on 1445-01-03` and `1445/1/3 (Muharram)` both read as
//! `1445-01-03`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::date::HijriDate;
use crate::error::{Error, Result};

lazy_static! {
    /// First `year sep month sep day` group, digits either ASCII or Arabic-Indic.
    static ref DATE_TRIPLE: Regex = Regex::new(
        r"([0-9٠-٩]{3,4})[^0-9٠-٩]+([0-9٠-٩]{1,2})[^0-9٠-٩]+([0-9٠-٩]{1,2})"
    )
    .unwrap();

    /// Hijri era marker, in its ligature form and bare.
    static ref HIJRI_MARKER: Regex = Regex::new(r"هـ|ه").unwrap();

    static ref PUNCTUATION: Regex = Regex::new(r"[\x{060C},()]").unwrap();
}

/// Turns the era marker and separating punctuation into spaces.
pub fn normalize(input: &str) -> String {
    let s = input.trim();
    let s = HIJRI_MARKER.replace_all(s, " ");
    PUNCTUATION.replace_all(&s, " ").into_owned()
}

/// Maps Arabic-Indic digits to ASCII, leaving every other char untouched.
///
/// ```
/// # use hijri_accrual::parse::to_ascii_digits;
/// assert_eq!(to_ascii_digits("١٤٤٥/٠١"), "1445/01");
/// ```
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '٠'..='٩' => char::from(b'0' + (c as u32 - '٠' as u32) as u8),
            _ => c,
        })
        .collect()
}

/// Reads a Hijri date out of free text.
///
/// Fails with [`Error::UnsupportedDateFormat`] when no `year month day`
/// triple is found, or when the numbers found are not a possible date
/// (month outside 1–12, day outside 1–30).
///
/// ```
/// # use hijri_accrual::parse::parse_hijri_date;
/// assert_eq!(parse_hijri_date("1445/1/3").unwrap().parts(), (1445, 1, 3));
/// assert_eq!(parse_hijri_date("١٤٤٥ ٠١ ٠٣").unwrap().parts(), (1445, 1, 3));
/// assert_eq!(parse_hijri_date("1445-01-03 هـ").unwrap().parts(), (1445, 1, 3));
/// assert!(parse_hijri_date("1445/01").is_err());
/// ```
pub fn parse_hijri_date(input: &str) -> Result<HijriDate> {
    let normalized = normalize(input);

    let caps = match DATE_TRIPLE.captures(&normalized) {
        Some(caps) => caps,
        None => {
            tracing::debug!(
                original = input,
                normalized = %normalized,
                "could not find a year-month-day pattern"
            );
            return Err(Error::unsupported_format(input));
        }
    };

    let number = |i: usize| -> Option<u32> {
        let group = caps.get(i)?.as_str();
        to_ascii_digits(group).parse::<u32>().ok()
    };

    let (year, month, day) = match (number(1), number(2), number(3)) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        parts => {
            tracing::debug!(original = input, ?parts, "numeric parse failed");
            return Err(Error::unsupported_format(input));
        }
    };

    HijriDate::new(year as i32, month, day).ok_or_else(|| {
        tracing::debug!(original = input, year, month, day, "date out of range");
        Error::unsupported_format(input)
    })
}
