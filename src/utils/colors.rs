/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Priority color: 1 → red ... 5 → grey.
pub fn color_for_priority(priority: i64) -> &'static str {
    match priority {
        i64::MIN..=1 => RED,
        2 => YELLOW,
        3 => GREEN,
        4 => CYAN,
        _ => GREY,
    }
}

/// Color of a history action label; unknown labels stay uncolored.
pub fn color_for_action(action: Option<crate::models::action::HistoryAction>) -> &'static str {
    use crate::models::action::HistoryAction;

    match action {
        Some(HistoryAction::EventAdded) => GREEN,
        Some(HistoryAction::ReminderSent) => MAGENTA,
        None => RESET,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
