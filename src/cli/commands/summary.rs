use crate::config::Config;
use crate::core::summary::DashboardSummary;
use crate::errors::AppResult;
use crate::store;
use crate::utils::formatting::{bold, format_price};
use chrono::NaiveDate;

pub fn handle(cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    let mut store = store::open(cfg)?;
    let subscriptions = store.list()?;
    let summary = DashboardSummary::compute(&subscriptions, reference);

    println!("📊 {}", bold("Subscriptions summary"));
    println!();
    println!("  Subscriptions : {}", summary.subscription_count);
    println!(
        "  Monthly total : {}",
        format_price(Some(summary.monthly_total), &cfg.currency, cfg.price_style)
    );
    println!(
        "  Yearly total  : {}",
        format_price(Some(summary.yearly_total), &cfg.currency, cfg.price_style)
    );
    println!("  Notifications : {}", summary.notification_count);

    Ok(())
}
