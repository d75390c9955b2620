use crate::core::calculator::renewal::compute_next_renewal;
use crate::models::{Notification, RenewalType, Subscription};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// How close a renewal must be before it is reported, and when it turns urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationWindow {
    pub notify_within_days: i64,
    pub urgent_within_days: i64,
}

impl NotificationWindow {
    pub const MONTHLY: Self = Self {
        notify_within_days: 7,
        urgent_within_days: 3,
    };

    pub const YEARLY: Self = Self {
        notify_within_days: 30,
        urgent_within_days: 7,
    };

    pub fn for_renewal_type(renewal_type: RenewalType) -> Self {
        match renewal_type {
            RenewalType::Monthly => Self::MONTHLY,
            RenewalType::Yearly => Self::YEARLY,
        }
    }

    pub fn classify(&self, days_until: i64) -> Option<Notification> {
        if days_until > self.notify_within_days {
            return None;
        }

        Some(Notification {
            urgent: days_until <= self.urgent_within_days,
            days_until,
        })
    }
}

/// Whole days from `now` until midnight of `renewal`, partial days rounded up.
pub fn days_until(renewal: NaiveDate, now: NaiveDateTime) -> i64 {
    let millis = (renewal.and_time(NaiveTime::MIN) - now).num_milliseconds();

    // integer division truncates toward zero, which is already the ceiling
    // for negative values
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Notification for `subscription` as seen on `reference` (at midnight).
pub fn evaluate_notification(
    subscription: &Subscription,
    reference: NaiveDate,
) -> Option<Notification> {
    evaluate_notification_at(subscription, reference.and_time(NaiveTime::MIN))
}

/// Same as [`evaluate_notification`] for an arbitrary instant of the day.
pub fn evaluate_notification_at(
    subscription: &Subscription,
    now: NaiveDateTime,
) -> Option<Notification> {
    if let Some(precomputed) = subscription.notification.precomputed() {
        return Some(precomputed);
    }

    let next = compute_next_renewal(
        subscription.start_date,
        subscription.renewal_type,
        now.date(),
    );

    NotificationWindow::for_renewal_type(subscription.renewal_type).classify(days_until(next, now))
}
