use serde::{Deserialize, Serialize};

/// An upcoming renewal that falls inside its cadence's notification window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub urgent: bool,
    pub days_until: i64,
}

/// Where a subscription's notification comes from.
///
/// `Precomputed` always wins over deriving from the dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationSource {
    #[default]
    Derived,
    Precomputed(Notification),
}

impl NotificationSource {
    pub fn precomputed(&self) -> Option<Notification> {
        match self {
            NotificationSource::Derived => None,
            NotificationSource::Precomputed(n) => Some(*n),
        }
    }
}
