//! ledger.rs
//!
//! Vacation-leave accrual across a sequence of dated checkpoints.
//!
//! Each [`LeaveEvent`] is a checkpoint: leave accrues between the previous
//! checkpoint (the baseline, for the first one) and this one, then the
//! requested days are taken. Whatever the accrued balance cannot cover is
//! taken from a legacy pool, which may go negative.
//!
//! # Business rules
//!
//! - The span between two checkpoints is measured on a 360-day accrual year:
//!   the tabular Hijri day difference is scaled by `360 / 354.36667` and
//!   floored.
//! - A day of span accrues `0.1` days of leave.
//! - Every row but the last credits whole days only; fractions wait in a
//!   carry until they add up to a whole day. The last row takes its accrual
//!   and the outstanding carry as they are, so nothing is lost over the
//!   sequence.
//! - Balances are rounded half-up to two decimals after every step.
//!
//! Rows depend on their predecessor, so the ledger is computed in one pass,
//! in order, and either fully succeeds or returns an error before any row is
//! produced.

use serde::{Deserialize, Serialize};

use crate::date::HijriDate;
use crate::error::{LedgerInputError, Result};

/// Leave days accrued per accrual day.
pub const ACCRUAL_PER_DAY: f64 = 0.1;

/// Length of the accrual year.
pub const ACCRUAL_YEAR_DAYS: f64 = 360.0;

/// Mean length of a Hijri year.
pub const MEAN_HIJRI_YEAR_DAYS: f64 = 354.36667;

/// One checkpoint as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveEvent {
    /// Ordinal shown in the UI; not used for ordering.
    pub index: i64,
    /// Free-form leave category label.
    pub category: String,
    pub start_date: HijriDate,
    pub requested_days: f64,
}

impl LeaveEvent {
    pub fn new(
        index: i64,
        category: impl Into<String>,
        start_date: HijriDate,
        requested_days: f64,
    ) -> Self {
        LeaveEvent {
            index,
            category: category.into(),
            start_date,
            requested_days,
        }
    }
}

/// A computed ledger line, in the same order as the input events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub event: LeaveEvent,
    /// Accrual days since the previous checkpoint.
    pub span_days: i64,
    /// `span_days * 0.1`, before carry handling.
    pub raw_accrual: f64,
    /// What this row actually added to `available`.
    pub credited: f64,
    pub available: f64,
    /// Never negative; a shortfall shows up in `from_legacy_balance`.
    pub remaining: f64,
    pub from_current_balance: f64,
    pub from_legacy_balance: f64,
    /// Legacy pool after this row's deduction; may be negative.
    pub legacy_balance_after: f64,
}

/// Totals over a computed ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_raw_accrual: f64,
    pub total_credited: f64,
    pub total_requested: f64,
    pub total_from_legacy: f64,
    pub final_remaining: f64,
    pub final_legacy_balance: f64,
}

/// Rounds half-up (towards positive infinity) to two decimals.
///
/// The shift is done on the decimal text rather than by multiplying, so
/// values that print as a half round the way they read.
///
/// ```
/// # use hijri_accrual::ledger::round_to_two;
/// assert_eq!(round_to_two(1.005), 1.01);
/// assert_eq!(round_to_two(0.1 + 0.2), 0.3);
/// assert_eq!(round_to_two(-2.345), -2.34);
/// ```
pub fn round_to_two(value: f64) -> f64 {
    let shifted: f64 = format!("{value}e2").parse().unwrap_or(value * 100.0);
    let rounded = (shifted + 0.5).floor();
    format!("{rounded}e-2").parse().unwrap_or(rounded / 100.0)
}

/// Accrual days between two checkpoints.
///
/// ```
/// # use hijri_accrual::{HijriDate, ledger::accrual_span_days};
/// let from = HijriDate::new(1439, 7, 2).unwrap();
/// let to = HijriDate::new(1447, 7, 2).unwrap();
/// assert_eq!(accrual_span_days(from, to), 2880);
/// ```
pub fn accrual_span_days(from: HijriDate, to: HijriDate) -> i64 {
    let elapsed = (to.absolute_day() - from.absolute_day()) as f64;
    (elapsed * (ACCRUAL_YEAR_DAYS / MEAN_HIJRI_YEAR_DAYS)).floor() as i64
}

/// Computes the ledger for `events`, which must be in chronological order
/// and not start before `baseline`.
///
/// ```
/// # use hijri_accrual::{HijriDate, ledger::{compute_ledger, LeaveEvent}};
/// let baseline = HijriDate::new(1439, 7, 2).unwrap();
/// let events = vec![
///     LeaveEvent::new(0, "annual", baseline, 0.0),
///     LeaveEvent::new(1, "annual", HijriDate::new(1447, 7, 2).unwrap(), 0.0),
/// ];
/// let rows = compute_ledger(&events, 0.0, baseline).unwrap();
/// assert_eq!(rows[1].available, 288.0);
/// ```
pub fn compute_ledger(
    events: &[LeaveEvent],
    legacy_balance_start: f64,
    baseline: HijriDate,
) -> Result<Vec<LedgerRow>> {
    validate(events, legacy_balance_start, baseline)?;

    let last = events.len().saturating_sub(1);
    let mut rows = Vec::with_capacity(events.len());
    let mut carry = 0.0;
    let mut seed = 0.0;
    let mut legacy = legacy_balance_start;
    let mut previous = baseline;

    for (i, event) in events.iter().enumerate() {
        let span_days = accrual_span_days(previous, event.start_date);
        let raw_accrual = round_to_two(span_days as f64 * ACCRUAL_PER_DAY);

        let credited = if i == last {
            let credited = round_to_two(raw_accrual + carry);
            carry = 0.0;
            credited
        } else {
            let whole = raw_accrual.trunc();
            carry = round_to_two(carry + (raw_accrual - whole));
            let spill = carry.floor();
            carry = round_to_two(carry - spill);
            whole + spill
        };

        let available = round_to_two(seed + credited);
        let mut remaining = round_to_two(available - event.requested_days);
        let from_current_balance;
        let from_legacy_balance;
        if remaining > 0.0 {
            from_current_balance = event.requested_days;
            from_legacy_balance = 0.0;
            seed = remaining;
        } else {
            from_current_balance = available;
            from_legacy_balance = remaining.abs();
            remaining = 0.0;
            seed = 0.0;
        }

        legacy = round_to_two(legacy - from_legacy_balance);

        tracing::debug!(
            row = i,
            span_days,
            raw_accrual,
            credited,
            carry,
            available,
            remaining,
            from_legacy_balance,
            legacy_balance_after = legacy,
            "ledger row"
        );

        rows.push(LedgerRow {
            event: event.clone(),
            span_days,
            raw_accrual,
            credited,
            available,
            remaining,
            from_current_balance,
            from_legacy_balance,
            legacy_balance_after: legacy,
        });
        previous = event.start_date;
    }

    Ok(rows)
}

/// Adds up a computed ledger.
pub fn summarize(rows: &[LedgerRow]) -> LedgerSummary {
    let mut summary = rows.iter().fold(LedgerSummary::default(), |mut acc, row| {
        acc.total_raw_accrual += row.raw_accrual;
        acc.total_credited += row.credited;
        acc.total_requested += row.event.requested_days;
        acc.total_from_legacy += row.from_legacy_balance;
        acc
    });
    summary.total_raw_accrual = round_to_two(summary.total_raw_accrual);
    summary.total_credited = round_to_two(summary.total_credited);
    summary.total_requested = round_to_two(summary.total_requested);
    summary.total_from_legacy = round_to_two(summary.total_from_legacy);
    if let Some(row) = rows.last() {
        summary.final_remaining = row.remaining;
        summary.final_legacy_balance = row.legacy_balance_after;
    }
    summary
}

fn validate(events: &[LeaveEvent], legacy_balance_start: f64, baseline: HijriDate) -> Result<()> {
    if !baseline.is_well_formed() {
        return Err(LedgerInputError::MalformedBaseline(baseline).into());
    }
    if !legacy_balance_start.is_finite() {
        return Err(LedgerInputError::NonFiniteLegacyBalance.into());
    }

    let mut previous = baseline;
    for (index, event) in events.iter().enumerate() {
        let start = event.start_date;
        if !start.is_well_formed() {
            return Err(LedgerInputError::MalformedDate { index, date: start }.into());
        }
        if start < previous {
            return Err(LedgerInputError::OutOfOrder { index, start, previous }.into());
        }
        if !event.requested_days.is_finite() {
            return Err(LedgerInputError::NonFiniteRequest { index }.into());
        }
        if event.requested_days < 0.0 {
            return Err(LedgerInputError::NegativeRequest {
                index,
                requested: event.requested_days,
            }
            .into());
        }
        previous = start;
    }
    Ok(())
}
