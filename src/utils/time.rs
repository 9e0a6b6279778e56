//! Time utilities: parsing HH:MM and rendering durations.

use crate::models::event::TIME_FORMAT;
use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok()
}

/// Human form of the gap between `now` and `at`, e.g. "2d 03h 15m".
/// Past instants render as "now".
pub fn describe_until(now: NaiveDateTime, at: NaiveDateTime) -> String {
    let mins = (at - now).num_minutes();
    if mins <= 0 {
        return "now".to_string();
    }

    let days = mins / (24 * 60);
    let hours = (mins % (24 * 60)) / 60;
    let minutes = mins % 60;

    if days > 0 {
        format!("{}d {:02}h {:02}m", days, hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}
