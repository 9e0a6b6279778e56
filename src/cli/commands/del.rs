use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::Calendar;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let prompt = format!(
            "Delete event #{} and its whole history? This action is irreversible.",
            id
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut calendar = Calendar::open(&cfg.database, cfg.reminder_lead_minutes)?;

        if calendar.delete_event(*id)? {
            success(format!("Event #{} deleted successfully.", id));
        } else {
            info(format!("No event #{}: nothing to delete.", id));
        }

        calendar.close()?;
    }

    Ok(())
}
