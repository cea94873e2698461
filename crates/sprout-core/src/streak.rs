//! Day-over-day completion streak engine.
//!
//! Pure arithmetic over a [`StreakRecord`] and the current date. The engine
//! never touches storage; the goal store decides when an update qualifies
//! and persists the result.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Running streak counters.
///
/// `longest_streak >= current_streak` holds after every update, and
/// `total_wins` only ever grows. The record is mutated exclusively through
/// [`StreakRecord::update`], at most once per calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    /// Consecutive calendar days with at least one completed goal
    pub current_streak: u32,

    /// Best streak ever reached
    pub longest_streak: u32,

    /// Total qualifying completion events, all time
    pub total_wins: u32,

    /// Instant of the last qualifying completion, if any
    pub last_completion_date: Option<DateTime<Utc>>,
}

impl StreakRecord {
    /// Whether a completion on `today` would qualify for a streak update.
    ///
    /// True iff no completion has ever been recorded, or the last one fell
    /// on a different calendar day. Comparison is day-granular, not
    /// instant-granular.
    pub fn can_increment_today(&self, today: NaiveDate) -> bool {
        match self.last_completion_date {
            Some(last) => last.date_naive() != today,
            None => true,
        }
    }

    /// Record a qualifying completion at `now`.
    ///
    /// Exactly one day since the last completion extends the streak; a
    /// larger gap restarts it at 1. A same-day call leaves `current_streak`
    /// untouched (callers gate on [`can_increment_today`], but the branch
    /// is handled rather than assumed away).
    ///
    /// [`can_increment_today`]: StreakRecord::can_increment_today
    pub fn update(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();

        match self.last_completion_date {
            None => self.current_streak = 1,
            Some(last) => {
                let days_between = (today - last.date_naive()).num_days();
                if days_between == 1 {
                    self.current_streak += 1;
                } else if days_between > 1 {
                    self.current_streak = 1;
                }
            }
        }

        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.total_wins += 1;
        self.last_completion_date = Some(now);
    }
}
