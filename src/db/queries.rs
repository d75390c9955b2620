use crate::errors::{AppError, AppResult};
use crate::models::{NotificationSource, RenewalType, Subscription, SubscriptionDraft};
use chrono::{Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use rust_decimal::Decimal;
use std::str::FromStr;

const SELECT_COLUMNS: &str =
    "SELECT id, name, category, description, price, renewal_type, start_date FROM subscriptions";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Subscription> {
    let price = match row.get::<_, Option<String>>("price")? {
        Some(raw) if !raw.trim().is_empty() => Some(
            Decimal::from_str(raw.trim())
                .map_err(|_| conversion_error(4, AppError::InvalidPrice(raw.clone())))?,
        ),
        _ => None,
    };

    let type_str: String = row.get("renewal_type")?;
    let renewal_type = RenewalType::from_db_str(&type_str)
        .ok_or_else(|| conversion_error(5, AppError::InvalidRenewalType(type_str.clone())))?;

    let start_date = match row.get::<_, Option<String>>("start_date")? {
        Some(raw) if !raw.trim().is_empty() => Some(
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| conversion_error(6, AppError::InvalidDate(raw.clone())))?,
        ),
        _ => None,
    };

    Ok(Subscription {
        id: row.get::<_, i64>("id")?.into(),
        name: row.get("name")?,
        category: row.get("category")?,
        description: row.get("description")?,
        price,
        renewal_type,
        start_date,
        next_renewal: None,
        notification: NotificationSource::Derived,
    })
}

pub fn load_subscriptions(conn: &Connection) -> AppResult<Vec<Subscription>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_subscription(conn: &Connection, id: i64) -> AppResult<Option<Subscription>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn insert_subscription(conn: &Connection, draft: &SubscriptionDraft) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO subscriptions
            (name, category, description, price, renewal_type, start_date, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            draft.name,
            draft.category,
            draft.description,
            draft.price.to_string(),
            draft.renewal_type.to_db_str(),
            draft.start_date.format("%Y-%m-%d").to_string(),
            now,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows touched (0 when the id does not exist).
pub fn update_subscription(
    conn: &Connection,
    id: i64,
    draft: &SubscriptionDraft,
) -> AppResult<usize> {
    let now = Local::now().to_rfc3339();

    let changed = conn.execute(
        "UPDATE subscriptions
            SET name = ?1, category = ?2, description = ?3, price = ?4,
                renewal_type = ?5, start_date = ?6, updated_at = ?7
          WHERE id = ?8",
        params![
            draft.name,
            draft.category,
            draft.description,
            draft.price.to_string(),
            draft.renewal_type.to_db_str(),
            draft.start_date.format("%Y-%m-%d").to_string(),
            now,
            id,
        ],
    )?;

    Ok(changed)
}

/// Returns the number of rows removed (0 when the id does not exist).
pub fn delete_subscription(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM subscriptions WHERE id = ?1", [id])?)
}
