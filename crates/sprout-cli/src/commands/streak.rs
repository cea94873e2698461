//! Streak inspection commands for CLI.

use clap::Subcommand;
use sprout_core::{Config, GoalStore};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Show current streak counters
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = GoalStore::open()?;

    match action {
        StreakAction::Show { json } => {
            let streak = store.streak();
            if json {
                println!("{}", serde_json::to_string_pretty(streak)?);
            } else {
                println!("Current streak:  {} days", streak.current_streak);
                println!("Longest streak:  {} days", streak.longest_streak);
                if Config::load().ui.show_total_wins {
                    println!("Total wins:      {}", streak.total_wins);
                }
                println!(
                    "Completed today: {}",
                    if store.completed_today() { "yes" } else { "no" }
                );
            }
        }
    }
    Ok(())
}
