use teloxide::prelude::*;
use teloxide::types::{ChatMemberUpdated, ChatPermissions};
use tracing::{debug, warn};

/// Whether the update is someone entering the chat rather than a role change
/// or departure.
pub fn is_new_member(update: &ChatMemberUpdated) -> bool {
    update.new_chat_member.kind.is_present() && !update.old_chat_member.kind.is_present()
}

/// Makes sure newcomers can write in the group so they can follow raffles.
pub async fn member_update_handler(bot: Bot, update: ChatMemberUpdated) -> ResponseResult<()> {
    if !is_new_member(&update) {
        return Ok(());
    }

    debug!(
        "User {} joined chat {}",
        update.new_chat_member.user.id.0, update.chat.id.0
    );

    if let Err(e) = bot
        .set_chat_permissions(update.chat.id, ChatPermissions::SEND_MESSAGES)
        .await
    {
        warn!("Failed to adjust permissions in chat {}: {}", update.chat.id.0, e);
    }

    Ok(())
}
