use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::Calendar;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let calendar = Calendar::open(&cfg.database, cfg.reminder_lead_minutes)?;

        match calendar.get_event(*id)? {
            None => warning(format!("Event #{} not found.", id)),
            Some(ev) => {
                header(format!("Event #{}", ev.id));
                println!("Name      : {}", ev.name);
                println!("Priority  : {}", ev.priority);
                println!("When      : {}", ev.get_date_time());
                println!(
                    "Reminder  : {}",
                    if ev.reminder_sent { "sent" } else { "not sent" }
                );

                let records = calendar.history_for_event(ev.id)?;
                if !records.is_empty() {
                    println!("\nHistory:");
                    for r in records {
                        println!("  {} | {}", r.timestamp, r.action);
                    }
                }
            }
        }

        calendar.close()?;
    }

    Ok(())
}
