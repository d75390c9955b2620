//! Backends holding the subscription records.
//!
//! The core only ever sees decoded [`Subscription`] values; whatever the
//! backend, records are validated on the way in.

pub mod http;
pub mod sqlite;
pub mod wire;

use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::models::{Subscription, SubscriptionDraft, SubscriptionId};
use std::time::Duration;

pub use http::HttpStore;
pub use sqlite::SqliteStore;

pub trait SubscriptionStore {
    fn list(&mut self) -> AppResult<Vec<Subscription>>;

    fn get(&mut self, id: &SubscriptionId) -> AppResult<Subscription> {
        self.list()?
            .into_iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Returns the new id when the backend reports one.
    fn create(&mut self, draft: &SubscriptionDraft) -> AppResult<Option<SubscriptionId>>;

    fn update(&mut self, id: &SubscriptionId, draft: &SubscriptionDraft) -> AppResult<()>;

    fn delete(&mut self, id: &SubscriptionId) -> AppResult<()>;

    fn backend(&self) -> Backend;
}

/// Open the store selected in the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn SubscriptionStore>> {
    match cfg.backend {
        Backend::Sqlite => {
            tracing::debug!(database = %cfg.database, "opening sqlite store");
            Ok(Box::new(SqliteStore::open(&cfg.database)?))
        }
        Backend::Http => {
            tracing::debug!(api_base = %cfg.api_base, "opening http store");
            Ok(Box::new(HttpStore::new(
                &cfg.api_base,
                Duration::from_secs(cfg.api_timeout_secs),
            )?))
        }
    }
}
