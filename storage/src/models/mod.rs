//! Persistence models: chat settings and logged updates.

mod chat_settings;
mod update_record;

pub use chat_settings::ChatSettingsRecord;
pub use update_record::{UpdateDirection, UpdateRecord};
