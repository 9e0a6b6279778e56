use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub priority: i64,      // ⇔ events.priority (1 = most important)
    pub date: String,       // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: String,       // ⇔ events.time (TEXT "HH:MM")
    pub reminder_sent: bool, // ⇔ events.reminder_sent (INT 0/1)
}

impl Event {
    pub fn new(id: i64, name: &str, priority: i64, date: &str, time: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            priority,
            date: date.to_string(),
            time: time.to_string(),
            reminder_sent: false,
        }
    }

    /// Combined local date+time of the event.
    ///
    /// The store keeps whatever text it was given, so this returns `None`
    /// when either column does not parse.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }

    pub fn get_date_time(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}
