//! Next-renewal computation.
//!
//! Advancing a date keeps its day-of-month and lets any overflow roll into
//! the following month, the way native calendar arithmetic does:
//! 2023-01-31 + 1 month is 2023-03-03, 2024-02-29 + 1 year is 2025-03-01.

use crate::models::{RenewalType, Subscription};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Add `months` calendar months to `date`, rolling day overflow forward.
pub fn add_months_rolling(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let first = date.with_day(1)?.checked_add_months(Months::new(months))?;
    first.checked_add_days(Days::new(u64::from(date.day0())))
}

/// Add `years` calendar years to `date`, rolling a missing Feb 29 to Mar 1.
pub fn add_years_rolling(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    add_months_rolling(date, years.checked_mul(12)?)
}

/// One cadence step. `None` only outside chrono's representable range.
pub fn advance_one_period(date: NaiveDate, renewal_type: RenewalType) -> Option<NaiveDate> {
    match renewal_type {
        RenewalType::Monthly => add_months_rolling(date, 1),
        RenewalType::Yearly => add_years_rolling(date, 1),
    }
}

/// First renewal strictly after `reference`.
///
/// Steps from `start_date` one period at a time, each step starting from the
/// previous candidate. A start date already after the reference comes back
/// untouched; a missing start date means "renews now" and yields `reference`.
pub fn compute_next_renewal(
    start_date: Option<NaiveDate>,
    renewal_type: RenewalType,
    reference: NaiveDate,
) -> NaiveDate {
    let Some(mut candidate) = start_date else {
        return reference;
    };

    while candidate <= reference {
        match advance_one_period(candidate, renewal_type) {
            Some(next) => candidate = next,
            None => break,
        }
    }

    candidate
}

/// Renewal date shown for `subscription`: the store's own value when it sent
/// one, otherwise the computed one.
pub fn displayed_next_renewal(subscription: &Subscription, reference: NaiveDate) -> NaiveDate {
    subscription.next_renewal.unwrap_or_else(|| {
        compute_next_renewal(
            subscription.start_date,
            subscription.renewal_type,
            reference,
        )
    })
}
