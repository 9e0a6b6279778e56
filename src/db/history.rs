use crate::errors::AppResult;
use crate::models::history::{HistoryEntry, HistoryRecord, TIMESTAMP_FORMAT};
use chrono::Local;
use rusqlite::{Connection, params};

/// Append a history line for `event_id`, stamped with the local time.
pub fn record_history(conn: &Connection, action: &str, event_id: i64) -> AppResult<()> {
    let now = Local::now().format(TIMESTAMP_FORMAT).to_string();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO event_history (action, event_id, timestamp)
         VALUES (?1, ?2, ?3)",
    )?;

    stmt.execute(params![action, event_id, now])?;

    Ok(())
}

/// History joined with event names, most recent first.
///
/// Rows whose event is gone are dropped by the inner join.
pub fn list_history(conn: &Connection) -> AppResult<Vec<HistoryEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT events.name, event_history.action, event_history.event_id, event_history.timestamp
         FROM event_history
         JOIN events ON event_history.event_id = events.id
         ORDER BY event_history.timestamp DESC, event_history.id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(HistoryEntry {
            event_name: row.get(0)?,
            action: row.get(1)?,
            event_id: row.get(2)?,
            timestamp: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}

/// Raw history rows of one event, oldest first.
pub fn history_for_event(conn: &Connection, event_id: i64) -> AppResult<Vec<HistoryRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, action, event_id, timestamp
         FROM event_history
         WHERE event_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([event_id], |row| {
        Ok(HistoryRecord {
            id: row.get(0)?,
            action: row.get(1)?,
            event_id: row.get(2)?,
            timestamp: row.get(3)?,
        })
    })?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
