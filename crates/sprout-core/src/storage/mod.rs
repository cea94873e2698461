mod config;
pub mod slots;

pub use config::{Config, ReminderConfig, UiConfig};
pub use slots::{SlotStore, StoredState};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/sprout[-dev]/` based on SPROUT_ENV.
///
/// Set SPROUT_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SPROUT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("sprout-dev")
    } else {
        base_dir.join("sprout")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
