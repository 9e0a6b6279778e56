pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw row of the `event_history` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: i64,
    pub action: String,
    pub event_id: i64,
    pub timestamp: String, // local wall-clock, TIMESTAMP_FORMAT
}

/// A history row joined with the current name of its event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub event_name: String,
    pub action: String,
    pub event_id: i64,
    pub timestamp: String,
}
