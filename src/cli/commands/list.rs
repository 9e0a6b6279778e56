use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{Calendar, local_now};
use crate::core::reminder::fire_instant;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, GREY, RED, YELLOW, color_for_priority};
use crate::utils::table::{Cell, Table};
use crate::utils::time::describe_until;
use chrono::NaiveDateTime;

/// Reminder column: where the event stands relative to its reminder.
fn reminder_cell(ev: &Event, now: NaiveDateTime, lead_minutes: i64) -> Cell {
    if ev.reminder_sent {
        return Cell::colored("sent", GREEN);
    }
    let Some(starts_at) = ev.starts_at() else {
        return Cell::colored("invalid", RED);
    };
    match fire_instant(starts_at, lead_minutes) {
        Some(fire_at) if fire_at > now => Cell::colored("pending", YELLOW),
        _ => Cell::colored("missed", GREY),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let calendar = Calendar::open(&cfg.database, cfg.reminder_lead_minutes)?;
        let events = calendar.list_events()?;

        if events.is_empty() {
            info("No events stored.");
            return calendar.close();
        }

        let now = local_now();
        let mut table = Table::new(&["ID", "PRI", "DATE", "TIME", "NAME", "REMINDER", "STARTS IN"]);

        for ev in &events {
            let starts_in = ev
                .starts_at()
                .map(|at| describe_until(now, at))
                .unwrap_or_else(|| "--".to_string());

            table.add_row(vec![
                Cell::plain(ev.id),
                Cell::colored(ev.priority, color_for_priority(ev.priority)),
                Cell::plain(&ev.date),
                Cell::plain(&ev.time),
                Cell::plain(&ev.name),
                reminder_cell(ev, now, cfg.reminder_lead_minutes),
                Cell::plain(starts_in),
            ]);
        }

        print!("{}", table.render());
        calendar.close()?;
    }
    Ok(())
}
