use crate::cli::commands::{parse_renewal_type, parse_start_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::{SubscriptionId, SubscriptionPatch};
use crate::store;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::parse_price;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        price,
        renewal_type,
        start,
        category,
        description,
    } = cmd
    {
        let patch = SubscriptionPatch {
            name: name.clone(),
            category: category.clone(),
            description: description.clone(),
            price: price.as_deref().map(parse_price).transpose()?,
            renewal_type: renewal_type.as_deref().map(parse_renewal_type).transpose()?,
            start_date: start.as_deref().map(parse_start_date).transpose()?,
        };

        if patch.is_empty() {
            warning("Nothing to change: pass at least one field to update.");
            return Ok(());
        }

        let id = SubscriptionId::new(id.as_str());
        let mut store = store::open(cfg)?;
        let draft = EditLogic::apply(store.as_mut(), &id, &patch)?;

        success(format!("Subscription #{id} '{}' updated.", draft.name));
    }
    Ok(())
}
