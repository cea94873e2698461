//! The micro-goal item.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A short user-defined daily task item.
///
/// Goals live for at most one calendar day: the store clears the whole
/// list at rollover. Owned exclusively by the [`GoalStore`]; the rest of
/// the system only ever sees a read-only slice.
///
/// [`GoalStore`]: crate::store::GoalStore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Stable identifier, assigned at creation
    pub id: Uuid,

    /// Goal text as entered by the user
    pub text: String,

    /// Whether the goal is currently checked off
    pub is_completed: bool,

    /// Creation instant
    pub date_created: DateTime<Utc>,
}

impl Goal {
    /// Create a fresh, incomplete goal.
    pub fn new(text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_completed: false,
            date_created: now,
        }
    }

    /// Calendar day the goal was created on.
    pub fn created_on(&self) -> NaiveDate {
        self.date_created.date_naive()
    }
}
