//! # Sprout Core Library
//!
//! This library provides the core logic for Sprout, a single-user
//! micro-goal streak tracker. It implements a CLI-first philosophy where
//! all operations are available via a standalone CLI binary, with any
//! richer front end being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Streak Engine**: pure calendar-day arithmetic over a streak record;
//!   decides whether a completion extends, restarts, or starts a streak
//! - **Goal Store**: in-memory list of today's goals plus orchestration,
//!   including the once-per-day rollover check
//! - **Storage**: JSON slot persistence and TOML-based configuration
//! - **Events**: every state change produces an [`Event`] for front ends
//!   to drain
//!
//! ## Key Components
//!
//! - [`GoalStore`]: session state object, explicitly constructed
//! - [`StreakRecord`]: streak counters and their single update operation
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod goal;
pub mod reminder;
pub mod storage;
pub mod store;
pub mod streak;

pub use error::{ConfigError, CoreError, Result, StorageError};
pub use events::Event;
pub use goal::Goal;
pub use storage::{Config, ReminderConfig, SlotStore, StoredState, UiConfig};
pub use store::GoalStore;
pub use streak::StreakRecord;
