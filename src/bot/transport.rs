use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};

use crate::error::TransportError;
use crate::utils::format::JOIN_BUTTON_LABEL;

/// Callback payload carried by the join button.
pub const JOIN_CALLBACK: &str = "raffle:join";

/// Location of a message the bot has sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat: ChatId,
    pub message: MessageId,
}

/// An HTML-formatted outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub join_button: bool,
}

impl OutgoingMessage {
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            join_button: false,
        }
    }

    pub fn with_join_button(mut self) -> Self {
        self.join_button = true;
        self
    }
}

/// Outbound operations the raffle needs from the chat platform.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, chat: ChatId, message: OutgoingMessage) -> Result<MessageRef, TransportError>;

    async fn edit(&self, target: MessageRef, message: OutgoingMessage) -> Result<(), TransportError>;

    async fn delete(&self, target: MessageRef) -> Result<(), TransportError>;

    /// Whether `user` is an administrator or the owner of `chat`.
    async fn is_chat_admin(&self, chat: ChatId, user: UserId) -> Result<bool, TransportError>;

    /// Acknowledges a button press, optionally with a short popup text.
    async fn answer_callback(&self, callback_id: String, text: Option<String>) -> Result<(), TransportError>;
}

pub fn join_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        JOIN_BUTTON_LABEL,
        JOIN_CALLBACK,
    )]])
}

/// [`ChatTransport`] backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send(&self, chat: ChatId, message: OutgoingMessage) -> Result<MessageRef, TransportError> {
        let mut request = self
            .bot
            .send_message(chat, message.text)
            .parse_mode(ParseMode::Html);
        if message.join_button {
            request = request.reply_markup(join_keyboard());
        }

        let sent = request.await?;
        Ok(MessageRef {
            chat: sent.chat.id,
            message: sent.id,
        })
    }

    async fn edit(&self, target: MessageRef, message: OutgoingMessage) -> Result<(), TransportError> {
        let mut request = self
            .bot
            .edit_message_text(target.chat, target.message, message.text)
            .parse_mode(ParseMode::Html);
        if message.join_button {
            request = request.reply_markup(join_keyboard());
        }

        request.await?;
        Ok(())
    }

    async fn delete(&self, target: MessageRef) -> Result<(), TransportError> {
        self.bot.delete_message(target.chat, target.message).await?;
        Ok(())
    }

    async fn is_chat_admin(&self, chat: ChatId, user: UserId) -> Result<bool, TransportError> {
        let member = self.bot.get_chat_member(chat, user).await?;
        Ok(member.kind.is_owner() || member.kind.is_administrator())
    }

    async fn answer_callback(&self, callback_id: String, text: Option<String>) -> Result<(), TransportError> {
        let mut request = self.bot.answer_callback_query(callback_id);
        if let Some(text) = text {
            request = request.text(text);
        }

        request.await?;
        Ok(())
    }
}
