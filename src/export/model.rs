use crate::core::calculator::{days_until, displayed_next_renewal, evaluate_notification};
use crate::models::Subscription;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// Flat record written by `export`, one per subscription.
#[derive(Serialize, Clone, Debug)]
pub struct SubscriptionExport {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub renewal_type: String,
    pub start_date: String,
    pub next_renewal: String,
    pub days_until: i64,
    pub notify: bool,
    pub urgent: bool,
}

impl SubscriptionExport {
    pub fn from_subscription(sub: &Subscription, reference: NaiveDate) -> Self {
        let next = displayed_next_renewal(sub, reference);
        let notification = evaluate_notification(sub, reference);

        Self {
            id: sub.id.to_string(),
            name: sub.name.clone(),
            category: sub.category.clone(),
            description: sub.description.clone(),
            price: sub.price,
            renewal_type: sub.renewal_type.code().to_string(),
            start_date: sub
                .start_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            next_renewal: next.format("%Y-%m-%d").to_string(),
            days_until: notification.map(|n| n.days_until).unwrap_or_else(|| {
                days_until(next, reference.and_time(NaiveTime::MIN))
            }),
            notify: notification.is_some(),
            urgent: notification.is_some_and(|n| n.urgent),
        }
    }
}
