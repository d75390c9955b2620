use crate::core::calculator::{subscriptions_needing_notification, total_for_cadence};
use crate::models::{RenewalType, Subscription};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Figures shown by `summary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub subscription_count: usize,
    pub monthly_total: Decimal,
    pub yearly_total: Decimal,
    pub notification_count: usize,
}

impl DashboardSummary {
    pub fn compute(list: &[Subscription], reference: NaiveDate) -> Self {
        Self {
            subscription_count: list.len(),
            monthly_total: total_for_cadence(list, RenewalType::Monthly),
            yearly_total: total_for_cadence(list, RenewalType::Yearly),
            notification_count: subscriptions_needing_notification(list, reference).len(),
        }
    }
}
