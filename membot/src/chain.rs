//! # Handler chain
//!
//! Runs a sequence of handlers. Each handler has optional before/handle/after:
//! all before run in order (any false stops the chain); then handle runs until
//! Stop or Reply; then all after run in reverse.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        for h in &self.handlers {
            if !h.before(message).await? {
                info!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    "Chain stopped in before phase"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(
                handler = std::any::type_name_of_val(h.as_ref()),
                response = ?response,
                "Handler processed"
            );
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        Ok(final_response)
    }
}
