use crate::errors::{AppError, AppResult};
use crate::models::notification::NotificationSource;
use crate::models::renewal_type::RenewalType;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for SubscriptionId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subscription as decoded from the store.
///
/// `price` and `start_date` stay optional: records written by other
/// clients are not guaranteed to carry them, and the calculator has a
/// defined fallback for both.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Option<Decimal>,
    pub renewal_type: RenewalType,
    pub start_date: Option<NaiveDate>,
    /// Renewal date precomputed by the store, shown instead of the derived one.
    pub next_renewal: Option<NaiveDate>,
    pub notification: NotificationSource,
}

/// Validated payload for create / update.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    pub renewal_type: RenewalType,
    pub start_date: NaiveDate,
}

impl SubscriptionDraft {
    pub fn new(
        name: &str,
        category: &str,
        description: Option<&str>,
        price: Decimal,
        renewal_type: RenewalType,
        start_date: NaiveDate,
    ) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::MissingField("name"));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::MissingField("category"));
        }

        if price < Decimal::ZERO {
            return Err(AppError::InvalidPrice(format!(
                "{price} (must be zero or positive)"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            description: description.unwrap_or_default().trim().to_string(),
            price,
            renewal_type,
            start_date,
        })
    }
}

/// Field-by-field changes requested by `edit`.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub renewal_type: Option<RenewalType>,
    pub start_date: Option<NaiveDate>,
}

impl SubscriptionPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.renewal_type.is_none()
            && self.start_date.is_none()
    }

    /// Merge onto an existing record. The result goes through the same
    /// validation as a new subscription, so a record that was missing its
    /// price or start date must get one here.
    pub fn apply(&self, existing: &Subscription) -> AppResult<SubscriptionDraft> {
        let price = self
            .price
            .or(existing.price)
            .ok_or(AppError::MissingField("price"))?;
        let start_date = self
            .start_date
            .or(existing.start_date)
            .ok_or(AppError::MissingField("start date"))?;

        SubscriptionDraft::new(
            self.name.as_deref().unwrap_or(&existing.name),
            self.category.as_deref().unwrap_or(&existing.category),
            Some(
                self.description
                    .as_deref()
                    .unwrap_or(&existing.description),
            ),
            price,
            self.renewal_type.unwrap_or(existing.renewal_type),
            start_date,
        )
    }
}
