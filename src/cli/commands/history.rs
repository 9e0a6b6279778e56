use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::Calendar;
use crate::errors::AppResult;
use crate::models::action::HistoryAction;
use crate::models::history::HistoryEntry;
use crate::ui::messages::info;
use crate::utils::colors::color_for_action;
use crate::utils::table::{Cell, Table};

/// Render history entries, most recent first.
pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        info("No history yet.");
        return;
    }

    let mut table = Table::new(&["ACTION", "EVENT ID", "EVENT NAME", "TIMESTAMP"]);
    for e in entries {
        let color = color_for_action(HistoryAction::from_db_str(&e.action));
        table.add_row(vec![
            Cell::colored(&e.action, color),
            Cell::plain(e.event_id),
            Cell::plain(&e.event_name),
            Cell::plain(&e.timestamp),
        ]);
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::History) {
        let calendar = Calendar::open(&cfg.database, cfg.reminder_lead_minutes)?;
        print_history(&calendar.list_history()?);
        calendar.close()?;
    }

    Ok(())
}
