/// Actions the backend itself writes to the history table.
///
/// The table column is free text, so rows written by other tools may
/// carry labels outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    EventAdded,
    ReminderSent,
}

impl HistoryAction {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            HistoryAction::EventAdded => "Event Added",
            HistoryAction::ReminderSent => "Reminder Sent",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Event Added" => Some(HistoryAction::EventAdded),
            "Reminder Sent" => Some(HistoryAction::ReminderSent),
            _ => None,
        }
    }
}
