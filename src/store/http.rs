//! Remote store speaking JSON over HTTP.
//!
//! Routes: `GET|POST {base}/subscriptions`, `PUT|DELETE {base}/subscriptions/{id}`.

use crate::config::Backend;
use crate::errors::{AppError, AppResult};
use crate::models::{Subscription, SubscriptionDraft, SubscriptionId};
use crate::store::SubscriptionStore;
use crate::store::wire::{CreatedRecord, SubscriptionPayload, decode_list};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("subtracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(base_url, client))
    }

    /// Use a preconfigured client (proxy settings, TLS roots, ...).
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/subscriptions", self.base_url)
    }

    fn item_url(&self, id: &SubscriptionId) -> String {
        format!("{}/subscriptions/{}", self.base_url, id)
    }

    /// Turn a non-success status into an error; 404 on an item becomes NotFound.
    fn check(resp: Response, context: &str, id: Option<&SubscriptionId>) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        tracing::warn!(status = status.as_u16(), context, "store request failed");
        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(AppError::NotFound(id.to_string())),
            _ => Err(AppError::Store {
                status: status.as_u16(),
                context: context.to_string(),
            }),
        }
    }
}

impl SubscriptionStore for HttpStore {
    fn list(&mut self) -> AppResult<Vec<Subscription>> {
        let url = self.collection_url();
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send()?;
        let body = Self::check(resp, "list subscriptions", None)?.text()?;
        decode_list(&body)
    }

    fn create(&mut self, draft: &SubscriptionDraft) -> AppResult<Option<SubscriptionId>> {
        let url = self.collection_url();
        tracing::debug!(%url, name = %draft.name, "POST");

        let resp = self
            .client
            .post(&url)
            .json(&SubscriptionPayload::from(draft))
            .send()?;
        let body = Self::check(resp, "create subscription", None)?.text()?;

        // Some stores answer with an empty body; the id is then simply unknown.
        Ok(serde_json::from_str::<CreatedRecord>(&body)
            .ok()
            .map(|rec| rec.id.into()))
    }

    fn update(&mut self, id: &SubscriptionId, draft: &SubscriptionDraft) -> AppResult<()> {
        let url = self.item_url(id);
        tracing::debug!(%url, "PUT");

        let resp = self
            .client
            .put(&url)
            .json(&SubscriptionPayload::from(draft))
            .send()?;
        Self::check(resp, "update subscription", Some(id))?;
        Ok(())
    }

    fn delete(&mut self, id: &SubscriptionId) -> AppResult<()> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE");

        let resp = self.client.delete(&url).send()?;
        Self::check(resp, "delete subscription", Some(id))?;
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Http
    }
}
