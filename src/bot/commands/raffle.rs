use teloxide::types::{ChatId, MessageId, UserId};
use tracing::debug;

use crate::bot::commands::Command;
use crate::bot::context::RaffleContext;
use crate::bot::transport::{MessageRef, OutgoingMessage};
use crate::error::RaffleError;
use crate::utils::format::*;
use crate::utils::logging::{log_database_error, log_validation_error};

/// Where a command came from and who sent it.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub chat: ChatId,
    pub message: MessageId,
    pub user: Option<UserId>,
}

impl Invocation {
    fn trigger(&self) -> MessageRef {
        MessageRef {
            chat: self.chat,
            message: self.message,
        }
    }
}

/// Runs an administrative command.
///
/// The triggering message is removed first, whatever happens next. Callers
/// without admin rights get `NotAuthorized` and no reply. Every other outcome
/// has already been answered in the chat by the time this returns; the error
/// is handed back for logging only.
pub async fn execute(ctx: &RaffleContext, invocation: &Invocation, cmd: Command) -> Result<(), RaffleError> {
    if let Err(e) = ctx.transport.delete(invocation.trigger()).await {
        debug!("Could not delete command message {}: {}", invocation.message.0, e);
    }

    let Some(user) = invocation.user else {
        return Err(RaffleError::NotAuthorized);
    };
    if !ctx.admins.is_admin(ctx.transport.as_ref(), invocation.chat, user).await {
        return Err(RaffleError::NotAuthorized);
    }

    let chat = invocation.chat;
    let result = match cmd {
        Command::Help => {
            reply(ctx, chat, render_help()).await;
            Ok(())
        }
        Command::Status => handle_status(ctx, chat).await,
        Command::SetPrize(prize) => handle_set_prize(ctx, chat, user, &prize).await,
        Command::Stop => handle_stop(ctx, chat).await,
        Command::Draw => handle_draw(ctx, chat, DrawKind::First).await,
        Command::Redraw => handle_draw(ctx, chat, DrawKind::Redraw).await,
    };

    if let Err(RaffleError::Storage(e)) = &result {
        log_database_error("read/replace", "raffle", &e.to_string());
        reply(ctx, chat, COMMAND_FAILED.to_string()).await;
    }
    result
}

async fn handle_status(ctx: &RaffleContext, chat: ChatId) -> Result<(), RaffleError> {
    let record = ctx.raffles.current().await?;
    reply(ctx, chat, render_status(&record)).await;
    Ok(())
}

async fn handle_set_prize(
    ctx: &RaffleContext,
    chat: ChatId,
    user: UserId,
    prize: &str,
) -> Result<(), RaffleError> {
    let record = match ctx.raffles.start_raffle(prize).await {
        Ok(record) => record,
        Err(RaffleError::InvalidInput(reason)) => {
            log_validation_error("setprize", "prize", prize, &reason, user.0, chat.0);
            reply(ctx, chat, SETPRIZE_USAGE.to_string()).await;
            return Err(RaffleError::InvalidInput(reason));
        }
        Err(e) => return Err(e),
    };

    if let Err(e) = ctx.live.publish(chat, &record).await {
        debug!("Live raffle message not published in chat {}: {}", chat.0, e);
    }
    Ok(())
}

async fn handle_stop(ctx: &RaffleContext, chat: ChatId) -> Result<(), RaffleError> {
    ctx.raffles.stop_raffle().await?;
    reply(ctx, chat, RAFFLE_STOPPED.to_string()).await;
    Ok(())
}

async fn handle_draw(ctx: &RaffleContext, chat: ChatId, kind: DrawKind) -> Result<(), RaffleError> {
    match ctx.raffles.draw().await {
        Ok(outcome) => {
            reply(ctx, chat, render_draw(&outcome, kind)).await;
            Ok(())
        }
        Err(RaffleError::EmptyParticipants) => {
            reply(ctx, chat, render_no_participants(kind).to_string()).await;
            Err(RaffleError::EmptyParticipants)
        }
        Err(e) => Err(e),
    }
}

async fn reply(ctx: &RaffleContext, chat: ChatId, text: String) {
    if let Err(e) = ctx.transport.send(chat, OutgoingMessage::html(text)).await {
        debug!("Reply to chat {} not delivered: {}", chat.0, e);
    }
}
