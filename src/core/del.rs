use crate::errors::AppResult;
use crate::models::{Subscription, SubscriptionId};
use crate::store::SubscriptionStore;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the record and hand back what was deleted.
    pub fn apply(
        store: &mut dyn SubscriptionStore,
        id: &SubscriptionId,
    ) -> AppResult<Subscription> {
        let removed = store.get(id)?;
        store.delete(id)?;
        Ok(removed)
    }
}
