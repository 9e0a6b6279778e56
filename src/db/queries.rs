use crate::errors::AppResult;
use crate::models::event::Event;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        name: row.get("name")?,
        priority: row.get("priority")?,
        date: row.get("date")?,
        time: row.get("time")?,
        reminder_sent: row.get::<_, i64>("reminder_sent")? != 0,
    })
}

/// Insert a new event (reminder not sent) and return its id.
pub fn insert_event(
    conn: &Connection,
    name: &str,
    priority: i64,
    date: &str,
    time: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (name, priority, date, time, reminder_sent)
         VALUES (?1, ?2, ?3, ?4, 0)",
        params![name, priority, date, time],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All events, most important first; equal priorities keep insertion order.
pub fn list_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, priority, date, time, reminder_sent
         FROM events
         ORDER BY priority ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, priority, date, time, reminder_sent
         FROM events
         WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Flag the event as reminded. Missing ids are ignored.
pub fn mark_reminder_sent(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("UPDATE events SET reminder_sent = 1 WHERE id = ?1", [id])?;
    Ok(())
}

/// Delete an event together with its history rows.
///
/// History goes first so no row ever points at a missing event.
/// Returns `true` when an event row was removed.
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<bool> {
    conn.execute("DELETE FROM event_history WHERE event_id = ?1", [id])?;
    let removed = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(removed > 0)
}
