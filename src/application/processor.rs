//! # Command Processor
//!
//! Receives every text message the bot sees, drops the ones that don't come from the
//! moderation room, and dispatches the rest to the handlers in `interface/commands`.
//! Holds no state between messages beyond its configuration.

use std::sync::Arc;

use crate::application::parsing::parse_command;
use crate::domain::config::AppConfig;
use crate::domain::traits::{AdminApi, ChatProvider};
use crate::domain::types::{BlockAction, BlockResult, Command};
use crate::interface::commands;

pub struct CommandProcessor {
    moderation_room_id: String,
    server_name: String,
    admin: Arc<dyn AdminApi>,
}

impl CommandProcessor {
    pub fn new(
        moderation_room_id: impl Into<String>,
        server_name: impl Into<String>,
        admin: Arc<dyn AdminApi>,
    ) -> Self {
        Self {
            moderation_room_id: moderation_room_id.into(),
            server_name: server_name.into(),
            admin,
        }
    }

    pub fn from_config(config: &AppConfig, admin: Arc<dyn AdminApi>) -> anyhow::Result<Self> {
        let server_name = config
            .server_name()
            .ok_or_else(|| anyhow::anyhow!("user_id {} has no server name", config.user_id))?;
        Ok(Self::new(&config.moderation_room_id, server_name, admin))
    }

    pub fn moderation_room_id(&self) -> &str {
        &self.moderation_room_id
    }

    /// Entry point for every incoming text message.
    pub async fn on_message<C>(&self, chat: &C, sender: &str, body: &str)
    where
        C: ChatProvider,
    {
        if chat.room_id() != self.moderation_room_id {
            return;
        }

        let Some(command) = parse_command(body) else {
            return;
        };

        tracing::info!("Processing {:?} from {}", command, sender);
        if let Some(result) = self.execute_command(chat, command).await {
            tracing::info!(
                room = %result.room_id,
                success = result.success,
                blocked = result.blocked,
                status = ?result.http_status,
                local_users = result.local_users.len(),
                "Block command finished"
            );
        }
    }

    /// Run a parsed command and post the outcome. Returns the block result for
    /// block/unblock commands.
    pub async fn execute_command<C>(&self, chat: &C, command: Command) -> Option<BlockResult>
    where
        C: ChatProvider,
    {
        match command {
            Command::Block(room_id) => Some(self.set_block(chat, &room_id, BlockAction::Block).await),
            Command::Unblock(room_id) => {
                Some(self.set_block(chat, &room_id, BlockAction::Unblock).await)
            }
            Command::Unknown => {
                commands::help::handle_unknown(chat).await;
                None
            }
        }
    }

    async fn set_block<C>(&self, chat: &C, room_id: &str, action: BlockAction) -> BlockResult
    where
        C: ChatProvider,
    {
        commands::block::handle_block(
            self.admin.as_ref(),
            chat,
            &self.server_name,
            room_id,
            action,
        )
        .await
    }
}
