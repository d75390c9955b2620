use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{ListedSubscription, build_listing};
use crate::errors::AppResult;
use crate::store;
use crate::utils::colors::{color_for_notification, colorize, colorize_optional};
use crate::utils::date::format_date;
use crate::utils::formatting::{format_price, renews_in_label};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let mut store = store::open(cfg)?;
        let subscriptions = store.list()?;
        let rows = build_listing(&subscriptions, *filter, reference);

        if rows.is_empty() {
            println!("No subscriptions to show.");
            return Ok(());
        }

        print!("{}", render_table(&rows, cfg));
    }
    Ok(())
}

fn render_table(rows: &[ListedSubscription<'_>], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("NAME"),
        Column::new("CATEGORY"),
        Column::new("PRICE"),
        Column::new("TYPE"),
        Column::new("START"),
        Column::new("NEXT"),
        Column::new("NOTICE"),
    ]);

    for row in rows {
        let sub = row.subscription;

        let price = match sub.price {
            Some(_) => format_price(sub.price, &cfg.currency, cfg.price_style),
            None => String::new(),
        };

        let notice = row
            .notification
            .map(|n| colorize(&renews_in_label(n.days_until), color_for_notification(n.urgent)))
            .unwrap_or_default();

        table.add_row(vec![
            sub.id.to_string(),
            sub.name.clone(),
            colorize_optional(&sub.category),
            colorize_optional(&price),
            sub.renewal_type.label().to_string(),
            colorize_optional(&format_date(sub.start_date, &cfg.date_format)),
            format_date(Some(row.next_renewal), &cfg.date_format),
            notice,
        ]);
    }

    let separator = cfg.separator_char.chars().next().unwrap_or('-');
    table.render(separator)
}
