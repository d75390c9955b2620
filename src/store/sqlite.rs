use crate::config::Backend;
use crate::db::initialize::init_db;
use crate::db::log::stlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Subscription, SubscriptionDraft, SubscriptionId};
use crate::store::SubscriptionStore;

/// Local store backed by a single SQLite file. Every mutation is also
/// recorded in the `log` table.
pub struct SqliteStore {
    pool: DbPool,
}

/// SQLite ids are integers; anything else cannot exist in this store.
fn row_id(id: &SubscriptionId) -> AppResult<i64> {
    id.as_str()
        .parse::<i64>()
        .map_err(|_| AppError::NotFound(id.to_string()))
}

impl SqliteStore {
    /// Open the file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(mut pool: DbPool) -> AppResult<Self> {
        init_db(&mut pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl SubscriptionStore for SqliteStore {
    fn list(&mut self) -> AppResult<Vec<Subscription>> {
        queries::load_subscriptions(&self.pool.conn)
    }

    fn get(&mut self, id: &SubscriptionId) -> AppResult<Subscription> {
        queries::find_subscription(&self.pool.conn, row_id(id)?)?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn create(&mut self, draft: &SubscriptionDraft) -> AppResult<Option<SubscriptionId>> {
        let tx = self.pool.conn.transaction()?;
        let new_id = queries::insert_subscription(&tx, draft)?;
        stlog(
            &tx,
            "add",
            &new_id.to_string(),
            &format!("Created '{}' ({})", draft.name, draft.renewal_type.code()),
        )?;
        tx.commit()?;

        tracing::debug!(id = new_id, "subscription created");
        Ok(Some(SubscriptionId::from(new_id)))
    }

    fn update(&mut self, id: &SubscriptionId, draft: &SubscriptionDraft) -> AppResult<()> {
        let rid = row_id(id)?;
        let tx = self.pool.conn.transaction()?;

        if queries::update_subscription(&tx, rid, draft)? == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        stlog(&tx, "edit", id.as_str(), &format!("Updated '{}'", draft.name))?;
        tx.commit()?;
        Ok(())
    }

    fn delete(&mut self, id: &SubscriptionId) -> AppResult<()> {
        let rid = row_id(id)?;
        let tx = self.pool.conn.transaction()?;

        if queries::delete_subscription(&tx, rid)? == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        stlog(&tx, "del", id.as_str(), "Deleted subscription")?;
        tx.commit()?;
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Sqlite
    }
}
