use crate::cli::commands::{parse_renewal_type, parse_start_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::SubscriptionDraft;
use crate::store;
use crate::utils::formatting::parse_price;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        price,
        renewal_type,
        start,
        category,
        description,
    } = cmd
    {
        let draft = SubscriptionDraft::new(
            name,
            category,
            description.as_deref(),
            parse_price(price)?,
            parse_renewal_type(renewal_type)?,
            parse_start_date(start)?,
        )?;

        let mut store = store::open(cfg)?;
        AddLogic::apply(store.as_mut(), &draft)?;
    }
    Ok(())
}
