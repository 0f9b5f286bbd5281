use std::collections::HashSet;

use teloxide::types::{ChatId, UserId};
use tracing::debug;

use crate::bot::transport::ChatTransport;

/// Decides who may run administrative commands.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    allow_list: HashSet<u64>,
}

impl AdminPolicy {
    pub fn new(admin_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            allow_list: admin_ids.into_iter().collect(),
        }
    }

    pub fn is_allow_listed(&self, user: UserId) -> bool {
        self.allow_list.contains(&user.0)
    }

    /// Allow-listed users pass without a lookup. Otherwise the chat role is
    /// asked for, and a failed lookup counts as "not admin".
    pub async fn is_admin(&self, transport: &dyn ChatTransport, chat: ChatId, user: UserId) -> bool {
        if self.is_allow_listed(user) {
            return true;
        }

        match transport.is_chat_admin(chat, user).await {
            Ok(is_admin) => is_admin,
            Err(e) => {
                debug!("Role lookup for user {} in chat {} failed: {}", user.0, chat.0, e);
                false
            }
        }
    }
}
