use crate::cli::commands::history::print_history;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{Calendar, local_now};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::time::describe_until;
use std::time::Duration;

/// Run the reminder loop in the foreground until the process is interrupted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Watch) {
        let mut calendar = Calendar::open(&cfg.database, cfg.reminder_lead_minutes)?;

        header("Event History");
        print_history(&calendar.list_history()?);
        println!();

        let now = local_now();
        let pending = calendar.reschedule(now)?;
        match calendar.next_deadline() {
            Some(at) => info(format!(
                "Watching {} reminder(s); next one in {} (Ctrl+C to stop).",
                pending,
                describe_until(now, at)
            )),
            None => info("No reminders pending; waiting for new events (Ctrl+C to stop)."),
        }

        let refresh = Duration::from_secs(cfg.refresh_interval_secs.max(1));
        calendar.watch(refresh, |_| false)?;

        calendar.close()?;
    }

    Ok(())
}
