use crate::errors::AppResult;
use crate::models::{SubscriptionDraft, SubscriptionId};
use crate::store::SubscriptionStore;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        store: &mut dyn SubscriptionStore,
        draft: &SubscriptionDraft,
    ) -> AppResult<Option<SubscriptionId>> {
        let id = store.create(draft)?;

        match &id {
            Some(id) => success(format!(
                "Subscription '{}' added (id {}, {}).",
                draft.name,
                id,
                draft.renewal_type.label().to_lowercase()
            )),
            None => success(format!("Subscription '{}' added.", draft.name)),
        }

        Ok(id)
    }
}
