//! # Usage Reminder
//!
//! Sent in response to any `!roomba` line that isn't a block or unblock.

use crate::domain::traits::ChatProvider;
use crate::interface::commands::block::reply;
use crate::strings::messages;

pub async fn handle_unknown(chat: &impl ChatProvider) {
    reply(chat, messages::UNKNOWN_COMMAND).await;
}
