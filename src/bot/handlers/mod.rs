pub mod callback;
pub mod membership;
pub mod message;

use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, prelude::*, types::ChatMemberUpdated};

use crate::bot::commands::Command;
use crate::bot::context::RaffleContext;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct BotHandler {
    pub ctx: Arc<RaffleContext>,
}

impl BotHandler {
    pub fn new(ctx: Arc<RaffleContext>) -> Self {
        Self { ctx }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        use teloxide::dispatching::UpdateFilterExt;

        let ctx = self.ctx.clone();
        let ctx_callback = self.ctx.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |msg: Message, cmd: Command| {
                        let ctx = ctx.clone();
                        async move {
                            message::command_handler(msg, cmd, ctx)
                                .await
                                .map_err(HandlerError::from)
                        }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |q: CallbackQuery| {
                let ctx = ctx_callback.clone();
                async move {
                    callback::callback_handler(q, ctx)
                        .await
                        .map_err(HandlerError::from)
                }
            }))
            .branch(Update::filter_chat_member().endpoint(
                |bot: Bot, update: ChatMemberUpdated| async move {
                    membership::member_update_handler(bot, update)
                        .await
                        .map_err(HandlerError::from)
                },
            ))
    }
}
