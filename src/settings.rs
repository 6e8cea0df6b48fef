//! settings.rs
//!
//! Accrual configuration kept by the host application.
//!
//! Settings travel as a setup string of alternating keys and values, each
//! terminated by `;;;`:
//!
//! ```text
//! baseline;;;1439-07-02;;;legacy;;;12.5;;;mode;;;ummalqura;;;
//! ```
//!
//! Recognised keys are `mode` (any spelling [`CalendarMode`] accepts),
//! `baseline` (a Hijri date in any format the parser reads) and `legacy`
//! (the legacy balance the first row draws on). Unknown keys are ignored so
//! older setup strings keep loading; a recognised key with a bad value is an
//! error.

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, CalendarMode};
use crate::date::HijriDate;
use crate::error::{Error, Result};
use crate::ledger::{compute_ledger, LeaveEvent, LedgerRow};
use crate::parse::parse_hijri_date;

/// First checkpoint of the accrual scheme when none is configured.
pub const DEFAULT_BASELINE: (i32, u32, u32) = (1439, 7, 2);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub mode: CalendarMode,
    pub baseline: HijriDate,
    pub legacy_balance_start: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mode: CalendarMode::default(),
            baseline: HijriDate::from_parts(DEFAULT_BASELINE),
            legacy_balance_start: 0.0,
        }
    }
}

impl Settings {
    /// Parses a setup string on top of the defaults.
    ///
    /// ```
    /// # use hijri_accrual::{CalendarMode, Settings};
    /// let settings = Settings::load_from_str("mode;;;islamic;;;legacy;;;4;;;").unwrap();
    /// assert_eq!(settings.mode, CalendarMode::Tabular);
    /// assert_eq!(settings.legacy_balance_start, 4.0);
    /// assert_eq!(settings.baseline.to_string(), "1439-07-02");
    /// ```
    pub fn load_from_str(setup: &str) -> Result<Self> {
        let mut settings = Settings::default();
        settings.apply_str(setup)?;
        Ok(settings)
    }

    /// Applies the pairs in `setup`, leaving unspecified settings alone.
    pub fn apply_str(&mut self, setup: &str) -> Result<()> {
        let parts: Vec<&str> = setup.split(";;;").collect();
        for pair in parts.chunks_exact(2) {
            let key = pair[0].trim();
            let value = pair[1].trim();
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Sets one setting by name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || Error::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "mode" => self.mode = value.parse()?,
            "baseline" => self.baseline = parse_hijri_date(value).map_err(|_| invalid())?,
            "legacy" => {
                let legacy: f64 = value.parse().map_err(|_| invalid())?;
                if !legacy.is_finite() {
                    return Err(invalid());
                }
                self.legacy_balance_start = legacy;
            }
            "" => {}
            _ => tracing::debug!(key, "ignoring unknown setting"),
        }
        Ok(())
    }

    /// Serialises to the setup-string form, keys sorted.
    pub fn to_setup_string(&self) -> String {
        format!(
            "baseline;;;{};;;legacy;;;{};;;mode;;;{};;;",
            self.baseline, self.legacy_balance_start, self.mode
        )
    }

    /// A calendar in the configured mode, backed by Umm al-Qura.
    pub fn calendar(&self) -> Calendar {
        Calendar::new(self.mode)
    }

    /// Runs the ledger from the configured baseline and legacy balance.
    pub fn compute_ledger(&self, events: &[LeaveEvent]) -> Result<Vec<LedgerRow>> {
        compute_ledger(events, self.legacy_balance_start, self.baseline)
    }
}
