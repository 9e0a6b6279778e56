use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{Calendar, local_now};
use crate::core::reminder::fire_instant;
use crate::errors::{AppError, AppResult};
use crate::models::event::{DATE_FORMAT, TIME_FORMAT};
use crate::ui::messages::{success, warning};
use crate::utils::{date, time};

/// Priorities accepted from the command line.
const PRIORITY_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// Add a new event.
///
/// Input is validated here; the backend stores whatever it is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        date: date_str,
        time: time_str,
        priority,
    } = cmd
    {
        //
        // 1. Validate
        //
        if name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }

        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let t = time::parse_time(time_str).ok_or_else(|| AppError::InvalidTime(time_str.clone()))?;

        if !PRIORITY_RANGE.contains(priority) {
            return Err(AppError::InvalidPriority(*priority));
        }

        // Stored in canonical form so "9:05" and "09:05" compare equal.
        let date_norm = d.format(DATE_FORMAT).to_string();
        let time_norm = t.format(TIME_FORMAT).to_string();

        //
        // 2. Store + reschedule
        //
        let mut calendar = Calendar::open(&cfg.database, cfg.reminder_lead_minutes)?;
        let id = calendar.add_event(name, *priority, &date_norm, &time_norm)?;

        success(format!(
            "Event #{} '{}' added for {} {} (priority {}).",
            id, name, date_norm, time_norm, priority
        ));

        let reminded = fire_instant(d.and_time(t), cfg.reminder_lead_minutes)
            .is_some_and(|fire_at| fire_at > local_now());
        if !reminded {
            warning(format!(
                "The event starts in less than {} minutes or is already past: no reminder will be sent.",
                cfg.reminder_lead_minutes
            ));
        }

        calendar.close()?;
    }

    Ok(())
}
