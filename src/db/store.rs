//! SQLite-backed event store.
//!
//! One `EventStore` owns one connection for its whole lifetime. Every
//! mutating call commits on its own; there is no batching.

use crate::db::initialize::init_db;
use crate::db::{history, queries};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::history::{HistoryEntry, HistoryRecord};
use rusqlite::Connection;
use std::path::Path;

pub struct EventStore {
    pub conn: Connection,
}

impl EventStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        Self::from_connection(conn)
    }

    /// Private in-memory store, gone when dropped.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Close the underlying connection, reporting any failure.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }

    pub fn add_event(&self, name: &str, priority: i64, date: &str, time: &str) -> AppResult<i64> {
        queries::insert_event(&self.conn, name, priority, date, time)
    }

    pub fn list_events(&self) -> AppResult<Vec<Event>> {
        queries::list_events(&self.conn)
    }

    pub fn get_event(&self, id: i64) -> AppResult<Option<Event>> {
        queries::get_event(&self.conn, id)
    }

    pub fn mark_reminder_sent(&self, id: i64) -> AppResult<()> {
        queries::mark_reminder_sent(&self.conn, id)
    }

    pub fn delete_event(&self, id: i64) -> AppResult<bool> {
        queries::delete_event(&self.conn, id)
    }

    pub fn record_history(&self, action: &str, event_id: i64) -> AppResult<()> {
        history::record_history(&self.conn, action, event_id)
    }

    pub fn list_history(&self) -> AppResult<Vec<HistoryEntry>> {
        history::list_history(&self.conn)
    }

    pub fn history_for_event(&self, event_id: i64) -> AppResult<Vec<HistoryRecord>> {
        history::history_for_event(&self.conn, event_id)
    }
}
