//! Versioned schema migrations.
//!
//! Each applied version is recorded in the `log` table as a
//! `migration_applied` row, so running the list again is a no-op.

use rusqlite::{Connection, OptionalExtension, Result, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_subscriptions",
        description: "Created subscriptions table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS subscriptions (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            category      TEXT NOT NULL DEFAULT '',
            description   TEXT NOT NULL DEFAULT '',
            price         TEXT,
            renewal_type  TEXT NOT NULL CHECK (renewal_type IN ('mensal','anual')),
            start_date    TEXT,
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250315_0002_index_renewal_type",
        description: "Indexed subscriptions by renewal type and start date",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_subscriptions_type_start
            ON subscriptions(renewal_type, start_date);
        "#,
    },
];

/// Ensure that the `log` table exists; migrations bookkeeping lives there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Returns the versions applied by this call (empty when up to date).
pub fn run_pending_migrations(conn: &mut Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.transaction()?;
        tx.execute_batch(m.sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            params![chrono::Local::now().to_rfc3339(), m.version, m.description],
        )?;
        tx.commit()?;

        tracing::info!(version = m.version, "migration applied");
        applied.push(m.version);
    }

    Ok(applied)
}
