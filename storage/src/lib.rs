//! Storage crate: SQLite persistence for chat settings and the update log.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – ChatSettingsRecord, UpdateRecord
//! - [`settings_repo`] – SettingsStore trait and SQLite implementation
//! - [`update_log`] – UpdateLogRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod settings_repo;
mod sqlite_pool;
mod update_log;

#[cfg(test)]
mod settings_repo_test;
#[cfg(test)]
mod update_log_test;

pub use error::StorageError;
pub use models::{ChatSettingsRecord, UpdateDirection, UpdateRecord};
pub use settings_repo::{SettingsStore, SqliteSettingsRepository};
pub use sqlite_pool::SqlitePoolManager;
pub use update_log::UpdateLogRepository;
