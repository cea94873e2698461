//! The goal store: today's goal list plus streak orchestration.
//!
//! An explicitly constructed state object handed to the front end; there
//! is no ambient singleton. Every mutating operation flushes all slots
//! through the persistence adapter, best-effort.
//!
//! Streak gating rule: the calendar-day gate
//! ([`StreakRecord::can_increment_today`]) is the sole authority over
//! whether a completion advances the streak. The completion flag is
//! display state ("did anything get done today?") and never re-enables a
//! second increment: un-completing and re-completing a goal on the same
//! day sets the flag again but leaves the counters alone, because
//! `last_completion_date` already names today.

use std::mem;

use chrono::{DateTime, Utc};

use crate::error::StorageError;
use crate::events::Event;
use crate::goal::Goal;
use crate::storage::slots::{
    COMPLETED_TODAY_SLOT, GOALS_SLOT, LAST_OPEN_SLOT, STREAK_SLOT,
};
use crate::storage::{SlotStore, StoredState};
use crate::streak::StreakRecord;

/// In-memory state for one session, backed by slot storage.
pub struct GoalStore {
    goals: Vec<Goal>,
    streak: StreakRecord,
    completed_today: bool,
    last_open: Option<DateTime<Utc>>,
    events: Vec<Event>,
    slots: SlotStore,
}

impl GoalStore {
    /// Open the store at the default data directory and run the rollover
    /// check once.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be prepared. Corrupt
    /// or missing slots are not errors; they load as defaults.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self::with_slots(SlotStore::open()?, Utc::now()))
    }

    /// Open the store over an already-opened slot store, treating `now`
    /// as the current instant for the rollover check.
    pub fn with_slots(slots: SlotStore, now: DateTime<Utc>) -> Self {
        let state = StoredState::load(&slots);
        let mut store = Self {
            goals: state.goals,
            streak: state.streak,
            completed_today: state.completed_today,
            last_open: state.last_open,
            events: Vec::new(),
            slots,
        };
        store.check_new_day_at(now);
        store
    }

    /// Ordered, read-only view of today's goals. Append order is display
    /// order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Read-only view of the streak counters.
    pub fn streak(&self) -> &StreakRecord {
        &self.streak
    }

    /// Whether any goal has been completed today.
    pub fn completed_today(&self) -> bool {
        self.completed_today
    }

    /// Hand buffered events to the front end, clearing the buffer.
    pub fn drain_events(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }

    /// Append a new incomplete goal.
    pub fn add_goal(&mut self, text: impl Into<String>) {
        self.add_goal_at(text, Utc::now());
    }

    /// Append a new incomplete goal, created at `now`.
    pub fn add_goal_at(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        let goal = Goal::new(text, now);
        self.events.push(Event::GoalAdded {
            id: goal.id,
            text: goal.text.clone(),
            at: now,
        });
        self.goals.push(goal);
        self.persist();
    }

    /// Flip the completion state of the goal at `index`.
    pub fn toggle_goal(&mut self, index: usize) {
        self.toggle_goal_at(index, Utc::now());
    }

    /// Flip the completion state of the goal at `index`, as of `now`.
    ///
    /// Out-of-bounds indices are a silent no-op. Only the first
    /// incomplete-to-complete transition per calendar day advances the
    /// streak; see the module docs for the gating rule.
    pub fn toggle_goal_at(&mut self, index: usize, now: DateTime<Utc>) {
        let Some(goal) = self.goals.get_mut(index) else {
            return;
        };
        let was_completed = goal.is_completed;
        goal.is_completed = !was_completed;
        let id = goal.id;
        let is_completed = goal.is_completed;

        if is_completed {
            if !self.completed_today && self.streak.can_increment_today(now.date_naive()) {
                self.streak.update(now);
                self.events.push(Event::StreakAdvanced {
                    current_streak: self.streak.current_streak,
                    longest_streak: self.streak.longest_streak,
                    total_wins: self.streak.total_wins,
                    at: now,
                });
            }
            self.completed_today = true;
        } else if !self.goals.iter().any(|g| g.is_completed) {
            // Last completed goal was un-completed. Counters stay put;
            // the per-day ratchet only moves forward.
            self.completed_today = false;
        }

        self.events.push(Event::GoalToggled {
            id,
            is_completed,
            at: now,
        });
        self.persist();
    }

    /// Remove the goal at `index`.
    pub fn remove_goal(&mut self, index: usize) {
        self.remove_goal_at(index, Utc::now());
    }

    /// Remove the goal at `index`. Out-of-bounds indices are a silent
    /// no-op. Streak state is untouched even if the goal was completed.
    pub fn remove_goal_at(&mut self, index: usize, now: DateTime<Utc>) {
        if index >= self.goals.len() {
            return;
        }
        let goal = self.goals.remove(index);
        self.events.push(Event::GoalRemoved { id: goal.id, at: now });
        self.persist();
    }

    /// Clear the list if the calendar day has changed since last open.
    pub fn check_new_day(&mut self) {
        self.check_new_day_at(Utc::now());
    }

    /// Rollover check against an explicit instant.
    ///
    /// Clears the goal list and the completion flag when the stored
    /// last-open day differs from `now`'s day. Streak counters are never
    /// touched here; a missed day surfaces the next time a completion
    /// runs through the streak engine.
    pub fn check_new_day_at(&mut self, now: DateTime<Utc>) {
        match self.last_open {
            Some(last) if last.date_naive() == now.date_naive() => {}
            Some(_) => {
                let cleared = self.goals.len();
                self.goals.clear();
                self.completed_today = false;
                self.last_open = Some(now);
                self.events.push(Event::DayRolledOver {
                    cleared_goals: cleared,
                    at: now,
                });
                self.persist();
            }
            None => {
                // First run. Record the baseline without clearing.
                self.last_open = Some(now);
                self.persist();
            }
        }
    }

    /// Flush all slots. Best-effort: write failures are swallowed,
    /// matching the semantics of the key-value store this models.
    fn persist(&self) {
        let _ = self.slots.write_slot(GOALS_SLOT, &self.goals);
        let _ = self.slots.write_slot(STREAK_SLOT, &self.streak);
        let _ = self
            .slots
            .write_slot(COMPLETED_TODAY_SLOT, &self.completed_today);
        let _ = self.slots.write_slot(LAST_OPEN_SLOT, &self.last_open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn day(n: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, n, 12, 0, 0).unwrap()
    }

    fn store_at(tmp: &TempDir, now: DateTime<Utc>) -> GoalStore {
        GoalStore::with_slots(SlotStore::with_dir(tmp.path()), now)
    }

    #[test]
    fn add_goal_appends_in_display_order() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        store.add_goal_at("Drink water", day(1));
        store.add_goal_at("Walk", day(1));

        let texts: Vec<_> = store.goals().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, ["Drink water", "Walk"]);
        assert!(store.goals().iter().all(|g| !g.is_completed));
    }

    #[test]
    fn full_first_day_scenario() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));

        store.add_goal_at("Drink water", day(1));
        assert_eq!(store.goals().len(), 1);
        assert!(!store.goals()[0].is_completed);

        store.toggle_goal_at(0, day(1));
        assert_eq!(store.streak().current_streak, 1);
        assert_eq!(store.streak().total_wins, 1);
        assert!(store.completed_today());

        // Un-complete: flag drops, counters hold.
        store.toggle_goal_at(0, day(1));
        assert!(!store.goals()[0].is_completed);
        assert!(!store.completed_today());
        assert_eq!(store.streak().total_wins, 1);

        // Re-complete via a second goal the same day. The date gate has
        // already been spent, so the counters hold while the flag
        // returns to true.
        store.add_goal_at("Walk", day(1));
        store.toggle_goal_at(1, day(1));
        assert!(store.completed_today());
        assert_eq!(store.streak().current_streak, 1);
        assert_eq!(store.streak().total_wins, 1);
    }

    #[test]
    fn consecutive_days_extend_streak() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        store.add_goal_at("Stretch", day(1));
        store.toggle_goal_at(0, day(1));

        store.check_new_day_at(day(2));
        assert!(store.goals().is_empty());
        store.add_goal_at("Stretch", day(2));
        store.toggle_goal_at(0, day(2));

        assert_eq!(store.streak().current_streak, 2);
        assert_eq!(store.streak().longest_streak, 2);
        assert_eq!(store.streak().total_wins, 2);
    }

    #[test]
    fn skipped_day_restarts_streak() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        store.add_goal_at("Stretch", day(1));
        store.toggle_goal_at(0, day(1));
        store.check_new_day_at(day(2));
        store.add_goal_at("Stretch", day(2));
        store.toggle_goal_at(0, day(2));

        // Day 3 missed entirely.
        store.check_new_day_at(day(4));
        store.add_goal_at("Stretch", day(4));
        store.toggle_goal_at(0, day(4));

        assert_eq!(store.streak().current_streak, 1);
        assert_eq!(store.streak().longest_streak, 2);
        assert_eq!(store.streak().total_wins, 3);
    }

    #[test]
    fn toggle_churn_is_a_one_way_ratchet() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        store.add_goal_at("Read", day(1));

        for _ in 0..5 {
            store.toggle_goal_at(0, day(1));
            store.toggle_goal_at(0, day(1));
        }
        store.toggle_goal_at(0, day(1));

        assert_eq!(store.streak().total_wins, 1);
        assert_eq!(store.streak().current_streak, 1);
        assert!(store.completed_today());
    }

    #[test]
    fn remove_shifts_indices_without_corruption() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        store.add_goal_at("a", day(1));
        store.add_goal_at("b", day(1));
        store.add_goal_at("c", day(1));

        store.remove_goal_at(0, day(1));
        store.toggle_goal_at(1, day(1));

        let texts: Vec<_> = store.goals().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, ["b", "c"]);
        assert!(!store.goals()[0].is_completed);
        assert!(store.goals()[1].is_completed);
    }

    #[test]
    fn out_of_bounds_indices_are_noops() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        store.add_goal_at("a", day(1));

        store.toggle_goal_at(5, day(1));
        store.remove_goal_at(5, day(1));

        assert_eq!(store.goals().len(), 1);
        assert!(!store.goals()[0].is_completed);
        assert_eq!(store.streak().total_wins, 0);
    }

    #[test]
    fn removing_a_completed_goal_leaves_streak_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        store.add_goal_at("a", day(1));
        store.toggle_goal_at(0, day(1));
        store.remove_goal_at(0, day(1));

        assert!(store.goals().is_empty());
        assert_eq!(store.streak().current_streak, 1);
        assert_eq!(store.streak().total_wins, 1);
        assert!(store.completed_today());
    }

    #[test]
    fn rollover_clears_goals_but_not_counters() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let mut store = store_at(&tmp, day(1));
            store.add_goal_at("a", day(1));
            store.toggle_goal_at(0, day(1));
            store.add_goal_at("b", day(1));
        }

        // Reopen two days later; construction runs the rollover check.
        let mut store = store_at(&tmp, day(3));
        assert!(store.goals().is_empty());
        assert!(!store.completed_today());
        assert_eq!(store.streak().current_streak, 1);
        assert_eq!(store.streak().total_wins, 1);

        let events = store.drain_events();
        assert!(matches!(
            events.as_slice(),
            [Event::DayRolledOver { cleared_goals: 2, .. }]
        ));
    }

    #[test]
    fn same_day_reopen_keeps_state() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let mut store = store_at(&tmp, day(1));
            store.add_goal_at("a", day(1));
            store.toggle_goal_at(0, day(1));
        }

        let store = store_at(&tmp, day(1) + Duration::hours(6));
        assert_eq!(store.goals().len(), 1);
        assert!(store.goals()[0].is_completed);
        assert!(store.completed_today());
    }

    #[test]
    fn events_trace_the_mutation_sequence() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        store.drain_events();

        store.add_goal_at("a", day(1));
        store.toggle_goal_at(0, day(1));
        store.remove_goal_at(0, day(1));

        let events = store.drain_events();
        assert!(matches!(
            events.as_slice(),
            [
                Event::GoalAdded { .. },
                Event::StreakAdvanced { total_wins: 1, .. },
                Event::GoalToggled { is_completed: true, .. },
                Event::GoalRemoved { .. },
            ]
        ));
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn first_run_records_baseline_without_clearing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_at(&tmp, day(1));
        assert!(store.goals().is_empty());

        // No rollover event on a fresh directory.
        assert!(store.drain_events().is_empty());
    }
}
