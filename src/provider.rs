//! provider.rs
//!
//! The authoritative calendar as a capability.
//!
//! The converter does not talk to a lookup-table library directly; it talks
//! to a [`CalendarProvider`]. A provider may refuse a date by returning an
//! error or `Ok(None)`, and the converter treats both the same way (log,
//! then use the tabular calendar). The core therefore works with a provider
//! that always fails, and with no provider at all.
//!
//! # Month numbering
//!
//! The capability reports the Gregorian month of `hijri_to_gregorian`
//! **zero-based** (January = 0), the convention of the Umm al-Qura table
//! libraries this interface was modelled on. Adapters convert to that
//! contract; the converter adds the month back at its boundary. The reverse
//! direction, `gregorian_to_hijri`, is one-based on both sides.

use std::panic::{self, AssertUnwindSafe};

use crate::error::ProviderError;

/// A Gregorian date as the provider reports it. `gm` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderGregorian {
    pub gy: i32,
    pub gm: u32,
    pub gd: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderHijri {
    pub hy: i32,
    pub hm: u32,
    pub hd: u32,
}

/// An authoritative Hijri calendar, typically backed by a bundled table.
///
/// Calls are synchronous and local. Implementations must not panic on dates
/// outside their table; they should return an error or `Ok(None)`.
pub trait CalendarProvider: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Hijri date to Gregorian, month zero-based.
    fn hijri_to_gregorian(
        &self,
        hy: i32,
        hm: u32,
        hd: u32,
    ) -> Result<Option<ProviderGregorian>, ProviderError>;

    /// Gregorian date (month one-based) to Hijri.
    fn gregorian_to_hijri(
        &self,
        gy: i32,
        gm: u32,
        gd: u32,
    ) -> Result<Option<ProviderHijri>, ProviderError>;

    /// Native month length, if the provider has one. `None` means
    /// unsupported and the converter derives the length itself.
    fn days_in_month(&self, _hy: i32, _hm: u32) -> Option<Result<u32, ProviderError>> {
        None
    }
}

/// Umm al-Qura calendar of Saudi Arabia, from the table in the
/// `hijri_date` crate (roughly 1356–1500 AH).
#[derive(Debug, Clone, Copy, Default)]
pub struct UmmAlQura;

impl UmmAlQura {
    pub fn new() -> Self {
        UmmAlQura
    }
}

/// Runs a table lookup, turning a panic inside the library into an error.
fn guarded<T>(f: impl FnOnce() -> Result<T, String>) -> Result<T, ProviderError> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.map_err(ProviderError),
        Err(_) => Err(ProviderError("umm al-qura table lookup panicked".to_string())),
    }
}

fn to_usize(value: i64, what: &str) -> Result<usize, ProviderError> {
    usize::try_from(value).map_err(|_| ProviderError(format!("{what} {value} is out of range")))
}

impl CalendarProvider for UmmAlQura {
    fn name(&self) -> &'static str {
        "umm-al-qura"
    }

    fn hijri_to_gregorian(
        &self,
        hy: i32,
        hm: u32,
        hd: u32,
    ) -> Result<Option<ProviderGregorian>, ProviderError> {
        let (y, m, d) = (
            to_usize(hy.into(), "year")?,
            to_usize(hm.into(), "month")?,
            to_usize(hd.into(), "day")?,
        );
        let date = guarded(|| hijri_date::HijriDate::from_hijri(y, m, d).map_err(|e| e.to_string()))?;

        let gm = date.month_gr();
        if gm == 0 {
            return Ok(None);
        }
        Ok(Some(ProviderGregorian {
            gy: date.year_gr() as i32,
            // the table is one-based; the capability contract is not
            gm: (gm - 1) as u32,
            gd: date.day_gr() as u32,
        }))
    }

    fn gregorian_to_hijri(
        &self,
        gy: i32,
        gm: u32,
        gd: u32,
    ) -> Result<Option<ProviderHijri>, ProviderError> {
        let (y, m, d) = (
            to_usize(gy.into(), "year")?,
            to_usize(gm.into(), "month")?,
            to_usize(gd.into(), "day")?,
        );
        let date = guarded(|| hijri_date::HijriDate::from_gr(y, m, d).map_err(|e| e.to_string()))?;

        Ok(Some(ProviderHijri {
            hy: date.year() as i32,
            hm: date.month() as u32,
            hd: date.day() as u32,
        }))
    }
}
