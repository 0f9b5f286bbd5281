use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::commands::raffle::{execute, Invocation};
use crate::bot::commands::Command;
use crate::bot::context::RaffleContext;
use crate::error::RaffleError;
use crate::utils::logging::*;

pub async fn command_handler(
    msg: Message,
    cmd: Command,
    ctx: Arc<RaffleContext>,
) -> ResponseResult<()> {
    let user = msg.from();
    let user_id = user.map(|u| u.id.0).unwrap_or(0);
    let username = user
        .and_then(|u| u.username.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let chat_id = msg.chat.id.0;
    let name = cmd.name();

    log_command_start(name, &username, user_id, chat_id);

    let invocation = Invocation {
        chat: msg.chat.id,
        message: msg.id,
        user: user.map(|u| u.id),
    };

    match execute(&ctx, &invocation, cmd).await {
        Ok(()) => log_command_success(name, &username, user_id, chat_id),
        Err(RaffleError::NotAuthorized) => log_command_denied(name, &username, user_id, chat_id),
        Err(e) => log_command_error(name, &username, user_id, chat_id, &e.to_string()),
    }

    Ok(())
}
