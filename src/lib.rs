//! Hijri calendar conversion and vacation-leave accrual.
//!
//! The crate has two halves:
//!
//! 1. **Calendar conversion** ([`Calendar`]): Hijri to Gregorian and back,
//!    under either the Umm al-Qura table or the arithmetical (tabular)
//!    calendar. When the table cannot answer, the tabular calendar does, so
//!    a conversion only fails if the date is outside any calendar's range.
//!    Free-form user input such as `"١٤٤٥/٠٩/١٠ هـ"` is read by
//!    [`parse_hijri_date`].
//! 2. **Accrual ledger** ([`compute_ledger`]): a sequence of leave
//!    checkpoints turned into rows of accrued, taken and carried balances.
//!
//! Both are pure and in-memory. [`Settings`] holds the user's calendar mode,
//! accrual baseline and legacy balance in the setup-string form the host
//! application stores.
//!
//! # Usage
//!
//! ```
//! use hijri_accrual::{Calendar, CalendarMode, HijriDate, LeaveEvent, Settings};
//!
//! let calendar = Calendar::new(CalendarMode::Tabular);
//! let start = calendar.parse_hijri_date("1447/7/2").unwrap();
//! assert_eq!(start, HijriDate::new(1447, 7, 2).unwrap());
//!
//! let settings = Settings::default();
//! let rows = settings
//!     .compute_ledger(&[LeaveEvent::new(0, "annual", start, 10.0)])
//!     .unwrap();
//! assert_eq!(rows[0].available, 288.0);
//! assert_eq!(rows[0].remaining, 278.0);
//! ```

pub mod calendar;
pub mod date;
pub mod error;
pub mod julian;
pub mod ledger;
pub mod parse;
pub mod provider;
pub mod settings;

pub use calendar::{Calendar, CalendarMode};
pub use date::HijriDate;
pub use error::{Error, LedgerInputError, Result};
pub use ledger::{compute_ledger, summarize, LeaveEvent, LedgerRow, LedgerSummary};
pub use parse::parse_hijri_date;
pub use provider::{CalendarProvider, UmmAlQura};
pub use settings::Settings;

/// Names of the Hijri months (index 1..12); index 0 is unused.
pub static HIJRI_MONTH_NAMES: [&str; 13] = [
    "",
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Arabic month names, same indexing.
pub static HIJRI_MONTH_NAMES_AR: [&str; 13] = [
    "",
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];
