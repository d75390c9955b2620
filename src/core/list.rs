//! Rows shown by `list`, with the filter applied.

use crate::core::calculator::{displayed_next_renewal, evaluate_notification};
use crate::models::{Notification, RenewalType, Subscription};
use chrono::NaiveDate;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListFilter {
    #[default]
    All,
    Monthly,
    Yearly,
    /// Only subscriptions inside their notification window
    Notifications,
}

/// A subscription together with its computed renewal data.
#[derive(Debug, Clone, Copy)]
pub struct ListedSubscription<'a> {
    pub subscription: &'a Subscription,
    pub next_renewal: NaiveDate,
    pub notification: Option<Notification>,
}

impl<'a> ListedSubscription<'a> {
    pub fn new(subscription: &'a Subscription, reference: NaiveDate) -> Self {
        Self {
            subscription,
            next_renewal: displayed_next_renewal(subscription, reference),
            notification: evaluate_notification(subscription, reference),
        }
    }
}

impl ListFilter {
    fn keeps(self, item: &ListedSubscription<'_>) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Monthly => item.subscription.renewal_type == RenewalType::Monthly,
            ListFilter::Yearly => item.subscription.renewal_type == RenewalType::Yearly,
            ListFilter::Notifications => item.notification.is_some(),
        }
    }
}

/// Input order is kept.
pub fn build_listing(
    list: &[Subscription],
    filter: ListFilter,
    reference: NaiveDate,
) -> Vec<ListedSubscription<'_>> {
    list.iter()
        .map(|s| ListedSubscription::new(s, reference))
        .filter(|item| filter.keeps(item))
        .collect()
}
