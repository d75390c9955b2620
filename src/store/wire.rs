//! JSON shapes exchanged with the HTTP store, and their conversion into the
//! typed model. All validation of store data happens here, once.

use crate::errors::{AppError, AppResult};
use crate::models::{
    Notification, NotificationSource, RenewalType, Subscription, SubscriptionDraft,
    SubscriptionId,
};
use crate::utils::date::parse_store_date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stores hand out either numeric or string ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl From<WireId> for SubscriptionId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => SubscriptionId::from(n),
            WireId::Text(s) => SubscriptionId::new(s),
        }
    }
}

/// Notification precomputed by the store (`days` on the wire).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WireNotification {
    pub urgent: bool,
    pub days: i64,
}

/// A subscription record as the store returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub id: WireId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub renewal_type: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub next_renewal: Option<String>,
    #[serde(default)]
    pub notification: Option<WireNotification>,
}

impl TryFrom<SubscriptionRecord> for Subscription {
    type Error = AppError;

    fn try_from(rec: SubscriptionRecord) -> AppResult<Self> {
        let renewal_type = RenewalType::from_code(&rec.renewal_type)
            .ok_or_else(|| AppError::InvalidRenewalType(rec.renewal_type.clone()))?;

        if let Some(price) = rec.price
            && price < Decimal::ZERO
        {
            return Err(AppError::InvalidPrice(format!(
                "{price} (must be zero or positive)"
            )));
        }

        let start_date = match rec.start_date.as_deref() {
            Some(raw) => parse_store_date(raw).map_err(AppError::InvalidDate)?,
            None => None,
        };

        let next_renewal = match rec.next_renewal.as_deref() {
            Some(raw) => parse_store_date(raw).map_err(AppError::InvalidDate)?,
            None => None,
        };

        let notification = match rec.notification {
            Some(n) => NotificationSource::Precomputed(Notification {
                urgent: n.urgent,
                days_until: n.days,
            }),
            None => NotificationSource::Derived,
        };

        Ok(Subscription {
            id: rec.id.into(),
            name: rec.name.unwrap_or_default(),
            category: rec.category.unwrap_or_default(),
            description: rec.description.unwrap_or_default(),
            price: rec.price,
            renewal_type,
            start_date,
            next_renewal,
            notification,
        })
    }
}

/// Decode a list response body.
pub fn decode_list(body: &str) -> AppResult<Vec<Subscription>> {
    let records: Vec<SubscriptionRecord> = serde_json::from_str(body)?;
    records.into_iter().map(Subscription::try_from).collect()
}

/// Body of POST / PUT requests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPayload<'a> {
    pub name: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub renewal_type: RenewalType,
    pub start_date: String,
    pub description: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a SubscriptionDraft> for SubscriptionPayload<'a> {
    fn from(draft: &'a SubscriptionDraft) -> Self {
        Self {
            name: &draft.name,
            price: draft.price,
            renewal_type: draft.renewal_type,
            start_date: draft.start_date.format("%Y-%m-%d").to_string(),
            description: &draft.description,
            category: &draft.category,
        }
    }
}

/// Minimal view of a create response: only the id matters.
#[derive(Debug, Deserialize)]
pub struct CreatedRecord {
    pub id: WireId,
}
