use crate::config::Config;
use crate::core::calculator::{displayed_next_renewal, upcoming_renewals};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{header, reminder, success};
use crate::utils::date::format_date;
use crate::utils::formatting::{format_price, renews_in_label};
use chrono::NaiveDate;

pub fn handle(cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    let mut store = store::open(cfg)?;
    let subscriptions = store.list()?;
    let upcoming = upcoming_renewals(&subscriptions, reference);

    if upcoming.is_empty() {
        success("No renewals coming up. Enjoy the quiet!");
        return Ok(());
    }

    header("Upcoming renewals");

    for item in &upcoming {
        let sub = item.subscription;
        let next = displayed_next_renewal(sub, reference);

        reminder(
            format!(
                "{} ({}): {} on {}, {}",
                sub.name,
                sub.renewal_type.label().to_lowercase(),
                renews_in_label(item.notification.days_until),
                format_date(Some(next), &cfg.date_format),
                format_price(sub.price, &cfg.currency, cfg.price_style)
            ),
            item.notification.urgent,
        );
    }

    Ok(())
}
