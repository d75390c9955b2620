//! List-level views built on top of the per-subscription calculator.

use crate::core::calculator::notification::evaluate_notification;
use crate::models::{Notification, RenewalType, Subscription};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A subscription paired with the notification that selected it.
#[derive(Debug, Clone, Copy)]
pub struct UpcomingRenewal<'a> {
    pub subscription: &'a Subscription,
    pub notification: Notification,
}

pub fn upcoming_renewals(list: &[Subscription], reference: NaiveDate) -> Vec<UpcomingRenewal<'_>> {
    list.iter()
        .filter_map(|subscription| {
            evaluate_notification(subscription, reference).map(|notification| UpcomingRenewal {
                subscription,
                notification,
            })
        })
        .collect()
}

/// Entries with a pending notification, in input order.
pub fn subscriptions_needing_notification(
    list: &[Subscription],
    reference: NaiveDate,
) -> Vec<&Subscription> {
    upcoming_renewals(list, reference)
        .into_iter()
        .map(|u| u.subscription)
        .collect()
}

/// Sum of prices for one cadence. Entries without a price count as zero.
pub fn total_for_cadence(list: &[Subscription], cadence: RenewalType) -> Decimal {
    list.iter()
        .filter(|s| s.renewal_type == cadence)
        .filter_map(|s| s.price)
        .sum()
}
