//! Reminder scheduling commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use sprout_core::reminder::next_occurrence;
use sprout_core::Config;

#[derive(Subcommand)]
pub enum RemindAction {
    /// Print the next reminder instant
    Next,
}

pub fn run(action: RemindAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RemindAction::Next => {
            let config = Config::load();
            if !config.reminder.enabled {
                println!("reminder disabled");
                return Ok(());
            }
            let next = next_occurrence(Utc::now(), config.reminder.hour, config.reminder.minute)
                .ok_or("configured reminder time is invalid")?;
            println!("{}", next.to_rfc3339());
        }
    }
    Ok(())
}
