use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every state change in the store produces an Event.
/// Front ends drain these instead of observing the store directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    GoalAdded {
        id: Uuid,
        text: String,
        at: DateTime<Utc>,
    },
    GoalToggled {
        id: Uuid,
        is_completed: bool,
        at: DateTime<Utc>,
    },
    GoalRemoved {
        id: Uuid,
        at: DateTime<Utc>,
    },
    /// A qualifying completion advanced the streak counters.
    StreakAdvanced {
        current_streak: u32,
        longest_streak: u32,
        total_wins: u32,
        at: DateTime<Utc>,
    },
    /// First use on a new calendar day cleared the goal list.
    DayRolledOver {
        cleared_goals: usize,
        at: DateTime<Utc>,
    },
}
