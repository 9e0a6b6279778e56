use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `events` table.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            priority      INTEGER NOT NULL,
            date          TEXT NOT NULL,
            time          TEXT NOT NULL,
            reminder_sent INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Create the `event_history` table.
fn create_history_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS event_history (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            action    TEXT NOT NULL,
            event_id  INTEGER NOT NULL,
            timestamp TEXT NOT NULL,
            FOREIGN KEY (event_id) REFERENCES events(id)
        );

        CREATE INDEX IF NOT EXISTS idx_history_event ON event_history(event_id);
        "#,
    )?;
    Ok(())
}

/// Older databases were created without `reminder_sent`.
fn migrate_add_reminder_sent(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "events", "reminder_sent")? {
        return Ok(());
    }

    warning("Adding 'reminder_sent' column to events table...");

    conn.execute(
        "ALTER TABLE events ADD COLUMN reminder_sent INTEGER NOT NULL DEFAULT 0",
        [],
    )?;

    success("Migration applied: added 'reminder_sent' to events table");
    Ok(())
}

/// Public entry point: bring the schema up to date.
///
/// Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    if table_exists(conn, "events")? {
        migrate_add_reminder_sent(conn)?;
    } else {
        create_events_table(conn)?;
        log::debug!("created events table");
    }

    create_history_table(conn)?;

    Ok(())
}
