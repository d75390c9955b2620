use crate::errors::AppResult;
use crate::models::{SubscriptionDraft, SubscriptionId, SubscriptionPatch};
use crate::store::SubscriptionStore;

/// Load, merge and write back a full record.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        store: &mut dyn SubscriptionStore,
        id: &SubscriptionId,
        patch: &SubscriptionPatch,
    ) -> AppResult<SubscriptionDraft> {
        let existing = store.get(id)?;
        let draft = patch.apply(&existing)?;

        store.update(id, &draft)?;
        tracing::debug!(%id, "subscription updated");
        Ok(draft)
    }
}
