use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::Mutex;
use tracing::info;

use crate::bot::transport::{ChatTransport, MessageRef, OutgoingMessage};
use crate::database::models::RaffleRecord;
use crate::error::TransportError;
use crate::utils::format::{render_raffle_active, render_raffle_started};

/// The message currently acting as the raffle scoreboard.
pub type LiveMessageHandle = MessageRef;

/// Keeps one scoreboard message per raffle in step with the entrant count.
///
/// The handle lives in memory only. A restart, or a failed edit, leaves the
/// posted message stale until the next raffle is published.
pub struct LiveMessageSynchronizer {
    transport: Arc<dyn ChatTransport>,
    handle: Mutex<Option<LiveMessageHandle>>,
}

impl LiveMessageSynchronizer {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport,
            handle: Mutex::new(None),
        }
    }

    /// Posts a fresh scoreboard with a join button and makes it the live one.
    /// The previous scoreboard, if any, is left untouched.
    pub async fn publish(
        &self,
        chat: ChatId,
        record: &RaffleRecord,
    ) -> Result<LiveMessageHandle, TransportError> {
        let message = OutgoingMessage::html(render_raffle_started(record)).with_join_button();
        let handle = self.transport.send(chat, message).await?;

        *self.handle.lock().await = Some(handle);
        info!(
            "Live raffle message {} published in chat {}",
            handle.message.0, handle.chat.0
        );
        Ok(handle)
    }

    /// Edits the live message in place. Returns `Ok(false)` when nothing has
    /// been published yet. A failed edit keeps the handle as it was.
    pub async fn refresh(&self, record: &RaffleRecord) -> Result<bool, TransportError> {
        let Some(handle) = *self.handle.lock().await else {
            return Ok(false);
        };

        let message = OutgoingMessage::html(render_raffle_active(record)).with_join_button();
        self.transport.edit(handle, message).await?;
        Ok(true)
    }

    pub async fn handle(&self) -> Option<LiveMessageHandle> {
        *self.handle.lock().await
    }
}
