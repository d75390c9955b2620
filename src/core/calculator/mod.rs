pub mod aggregate;
pub mod notification;
pub mod renewal;

pub use aggregate::{
    UpcomingRenewal, subscriptions_needing_notification, total_for_cadence, upcoming_renewals,
};
pub use notification::{
    NotificationWindow, days_until, evaluate_notification, evaluate_notification_at,
};
pub use renewal::{
    add_months_rolling, add_years_rolling, advance_one_period, compute_next_renewal,
    displayed_next_renewal,
};
