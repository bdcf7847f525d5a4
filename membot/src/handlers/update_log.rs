//! Handler that appends handled traffic to the update log.
//!
//! Inserts run in spawned tasks so a storage hiccup slows nothing down and
//! never breaks message handling; failures are logged and dropped.

use async_trait::async_trait;
use tracing::{error, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};
use storage::{UpdateDirection, UpdateLogRepository, UpdateRecord};

pub struct UpdateLogHandler {
    repo: UpdateLogRepository,
}

impl UpdateLogHandler {
    pub fn new(repo: UpdateLogRepository) -> Self {
        Self { repo }
    }

    fn spawn_insert(&self, record: UpdateRecord) {
        let repo = self.repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.insert(&record).await {
                error!(error = %e, chat_id = record.chat_id, "Failed to log update");
            }
        });
    }
}

#[async_trait]
impl Handler for UpdateLogHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        if !message.content.is_empty() {
            self.spawn_insert(UpdateRecord::new(
                message.chat.id,
                message.user.id,
                message.user.username.clone(),
                UpdateDirection::Incoming,
                message.content.clone(),
            ));
        }
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        if let HandlerResponse::Reply(text) = response {
            self.spawn_insert(UpdateRecord::new(
                message.chat.id,
                0,
                None,
                UpdateDirection::Outgoing,
                text.clone(),
            ));
        }
        Ok(())
    }
}
