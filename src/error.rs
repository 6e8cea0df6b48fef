//! error.rs
//!
//! Error types shared by the calendar converter, the date-string parser and
//! the accrual ledger.
//!
//! Only three kinds of failure ever reach a caller:
//!
//! - **`UnsupportedDateFormat`**: a Hijri date string could not be read. It
//!   carries the user-facing (Arabic) message the UI displays as is.
//! - **`CalendarConversionFailure`**: no calendar could produce a date. The
//!   authoritative provider failing is *not* this error; that case is logged
//!   and absorbed by the tabular fallback. This variant is only returned when
//!   the tabular arithmetic itself lands outside the representable range.
//! - **`InvalidLedgerInput`**: the ledger refused its input before computing
//!   anything.
//!
//! Configuration adds `UnknownCalendarMode` and `InvalidSetting`.

use thiserror::Error;

use crate::date::HijriDate;

/// User-facing message for an unreadable date ("date format not supported").
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "تنسيق التاريخ غير مدعوم";

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input did not contain a `year month day` triple we could read.
    #[error("{message}: {input:?}")]
    UnsupportedDateFormat {
        input: String,
        message: &'static str,
    },

    #[error("calendar conversion failed: {reason}")]
    CalendarConversionFailure { reason: String },

    #[error("invalid ledger input: {0}")]
    InvalidLedgerInput(#[from] LedgerInputError),

    #[error("unknown calendar mode {0:?}")]
    UnknownCalendarMode(String),

    #[error("invalid setting {key}: {value:?}")]
    InvalidSetting { key: String, value: String },
}

impl Error {
    pub(crate) fn unsupported_format(input: &str) -> Self {
        Error::UnsupportedDateFormat {
            input: input.to_string(),
            message: UNSUPPORTED_FORMAT_MESSAGE,
        }
    }

    /// The message to show the user, if this error is user-correctable.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Error::UnsupportedDateFormat { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Reasons `compute_ledger` rejects its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerInputError {
    #[error("baseline {0} is not a valid Hijri date")]
    MalformedBaseline(HijriDate),

    #[error("event {index} has an invalid start date {date}")]
    MalformedDate { index: usize, date: HijriDate },

    /// Events must be given in chronological order, none before the baseline.
    #[error("event {index} starts on {start}, before the previous checkpoint {previous}")]
    OutOfOrder {
        index: usize,
        start: HijriDate,
        previous: HijriDate,
    },

    #[error("event {index} requests a negative number of days ({requested})")]
    NegativeRequest { index: usize, requested: f64 },

    #[error("event {index} requests a non-finite number of days")]
    NonFiniteRequest { index: usize },

    #[error("legacy balance start is not a finite number")]
    NonFiniteLegacyBalance,
}

/// Failure reported by a calendar provider. Never leaves the converter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("calendar provider error: {0}")]
pub struct ProviderError(pub String);
