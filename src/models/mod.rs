pub mod notification;
pub mod renewal_type;
pub mod subscription;

pub use notification::{Notification, NotificationSource};
pub use renewal_type::RenewalType;
pub use subscription::{Subscription, SubscriptionDraft, SubscriptionId, SubscriptionPatch};
