//! Goal management commands for CLI.

use clap::Subcommand;
use sprout_core::{Config, GoalStore};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a micro-goal for today
    Add {
        /// Goal text
        text: String,
    },
    /// List today's goals
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle completion of a goal by list position
    Toggle {
        /// Zero-based list position
        index: usize,
    },
    /// Remove a goal by list position
    Remove {
        /// Zero-based list position
        index: usize,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = GoalStore::open()?;

    match action {
        GoalAction::Add { text } => {
            store.add_goal(&text);
            println!("Goal added: {text}");
        }
        GoalAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.goals())?);
            } else if store.goals().is_empty() {
                println!("No goals yet today.");
            } else {
                let marker = Config::load().ui.done_marker;
                for (i, goal) in store.goals().iter().enumerate() {
                    let mark = if goal.is_completed { marker.as_str() } else { " " };
                    println!("{i} [{mark}] {}", goal.text);
                }
            }
        }
        GoalAction::Toggle { index } => {
            store.toggle_goal(index);
            match store.goals().get(index) {
                Some(goal) if goal.is_completed => println!("Completed: {}", goal.text),
                Some(goal) => println!("Reopened: {}", goal.text),
                None => println!("No goal at index {index}"),
            }
        }
        GoalAction::Remove { index } => {
            let existed = index < store.goals().len();
            store.remove_goal(index);
            if existed {
                println!("Removed goal {index}");
            } else {
                println!("No goal at index {index}");
            }
        }
    }
    Ok(())
}
