//! Configuration commands for CLI.

use clap::Subcommand;
use sprout_core::storage::data_dir;
use sprout_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Show the full configuration
    Show,
    /// Set the daily reminder time
    SetReminder {
        /// Wall time as HH:MM (omit with --off)
        time: Option<String>,
        /// Disable the reminder
        #[arg(long)]
        off: bool,
    },
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Path => {
            println!("{}", data_dir()?.join("config.toml").display());
        }
        ConfigAction::Show => {
            let config = Config::load();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetReminder { time, off } => {
            let mut config = Config::load();
            if off {
                config.reminder.enabled = false;
            } else {
                let time = time.ok_or("expected a time as HH:MM, or --off")?;
                config.set_reminder_time(&time)?;
                config.reminder.enabled = true;
            }
            config.save()?;
            println!("ok");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
