//! # Block Command
//!
//! Handles `!roomba block <room>` and `!roomba unblock <room>`.
//! Flips the room's block flag through the admin API, then reports which local users
//! are sitting in the room.

use crate::domain::config::server_name_of;
use crate::domain::traits::{AdminApi, ChatProvider};
use crate::domain::types::{BlockAction, BlockResult};
use crate::strings::{logs, messages};

pub async fn handle_block(
    admin: &dyn AdminApi,
    chat: &impl ChatProvider,
    server_name: &str,
    room_id: &str,
    action: BlockAction,
) -> BlockResult {
    let http_status = match admin.set_room_block(room_id, action.as_flag()).await {
        Ok(status) => Some(status),
        Err(e) => {
            tracing::error!("Request to {} room {} failed: {:#}", action.verb(), room_id, e);
            None
        }
    };

    if http_status != Some(200) {
        if let Some(status) = http_status {
            tracing::error!("Failed to {} room {}: HTTP {}", action.verb(), room_id, status);
        }
        reply(chat, &messages::action_failed(room_id, action.verb())).await;
        return BlockResult {
            success: false,
            room_id: room_id.to_string(),
            blocked: false,
            local_users: Vec::new(),
            http_status,
        };
    }

    tracing::info!("Room {} {} successfully", room_id, action.past_tense());

    let local_users = match admin.room_members(room_id).await {
        Ok(members) => local_users(&members, server_name),
        Err(e) => {
            tracing::warn!("Could not list members of {}: {:#}", room_id, e);
            Vec::new()
        }
    };

    reply(
        chat,
        &messages::action_succeeded(room_id, action.past_tense(), &local_users),
    )
    .await;

    BlockResult {
        success: true,
        room_id: room_id.to_string(),
        blocked: action.as_flag(),
        local_users,
        http_status,
    }
}

/// Members whose server name is exactly the bot's own, in the order given.
pub fn local_users(members: &[String], server_name: &str) -> Vec<String> {
    members
        .iter()
        .filter(|user_id| server_name_of(user_id) == Some(server_name))
        .cloned()
        .collect()
}

pub(crate) async fn reply(chat: &impl ChatProvider, content: &str) {
    if let Err(e) = chat.send_message(content).await {
        tracing::error!("{}", logs::reply_failed(&chat.room_id(), &e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_local_users_filters_by_server() {
        let members = ids(&["@a:example.org", "@b:other.org"]);
        assert_eq!(local_users(&members, "example.org"), ids(&["@a:example.org"]));
    }

    #[test]
    fn test_local_users_keeps_order() {
        let members = ids(&["@z:example.org", "@x:evil.example.org", "@a:example.org"]);
        assert_eq!(
            local_users(&members, "example.org"),
            ids(&["@z:example.org", "@a:example.org"])
        );
    }

    #[test]
    fn test_local_users_port_must_match() {
        let members = ids(&["@a:example.org:8448", "@b:example.org"]);
        assert_eq!(local_users(&members, "example.org:8448"), ids(&["@a:example.org:8448"]));
    }

    #[test]
    fn test_local_users_empty() {
        assert!(local_users(&[], "example.org").is_empty());
        assert!(local_users(&ids(&["garbage"]), "example.org").is_empty());
    }
}
