use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{debug, error, info};

use crate::bot::context::RaffleContext;
use crate::bot::transport::JOIN_CALLBACK;
use crate::error::RaffleError;
use crate::services::raffle::{JoinOutcome, JoinResult};

/// The parts of a callback query the join flow looks at.
#[derive(Debug, Clone)]
pub struct ButtonPress {
    pub callback_id: String,
    pub data: Option<String>,
    pub username: Option<String>,
    pub user_id: UserId,
}

impl From<&CallbackQuery> for ButtonPress {
    fn from(q: &CallbackQuery) -> Self {
        Self {
            callback_id: q.id.clone(),
            data: q.data.clone(),
            username: q.from.username.clone(),
            user_id: q.from.id,
        }
    }
}

/// Entrants are recorded by handle, or by numeric id when they have none.
pub fn participant_id(username: Option<&str>, user_id: UserId) -> String {
    match username {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => user_id.0.to_string(),
    }
}

/// Enters a member and, when they are new, updates the live message from
/// the record the join wrote.
pub async fn process_join(ctx: &RaffleContext, participant: &str) -> Result<JoinOutcome, RaffleError> {
    let JoinResult { outcome, record } = ctx.raffles.join(participant).await?;

    if outcome.admitted() {
        if let Err(e) = ctx.live.refresh(&record).await {
            debug!("Live raffle message not refreshed: {}", e);
        }
    }

    Ok(outcome)
}

/// Handles a button press and always acknowledges it. A failed
/// acknowledgement is logged and dropped.
pub async fn handle_button_press(ctx: &RaffleContext, press: ButtonPress) {
    if press.data.as_deref() != Some(JOIN_CALLBACK) {
        if let Err(e) = ctx.transport.answer_callback(press.callback_id, None).await {
            debug!("Callback answer not delivered: {}", e);
        }
        return;
    }

    let participant = participant_id(press.username.as_deref(), press.user_id);

    let answer = match process_join(ctx, &participant).await {
        Ok(JoinOutcome::Joined) => {
            info!("Participant {} joined the raffle", participant);
            "🎟️ You're in! Good luck!"
        }
        Ok(JoinOutcome::AlreadyJoined) => "✅ You're already participating.",
        Ok(JoinOutcome::Closed) => "⏹️ This raffle is closed.",
        Err(e) => {
            error!("Failed to register participant {}: {}", participant, e);
            "❌ Could not register your entry, please try again."
        }
    };

    if let Err(e) = ctx
        .transport
        .answer_callback(press.callback_id, Some(answer.to_string()))
        .await
    {
        debug!("Callback answer to {} not delivered: {}", participant, e);
    }
}

pub async fn callback_handler(q: CallbackQuery, ctx: Arc<RaffleContext>) -> ResponseResult<()> {
    handle_button_press(&ctx, ButtonPress::from(&q)).await;
    Ok(())
}
