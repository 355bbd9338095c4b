//! # Main Entry Point
//!
//! Wires the bot together:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Admin API
//! - Application: Command Processor, Parsing, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use clap::Parser;
use matrix_sdk::{
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::processor::CommandProcessor;
use crate::domain::config::AppConfig;
use crate::infrastructure::admin::AdminClient;
use crate::infrastructure::matrix::MatrixService;
use crate::strings::logs;

/// Matrix moderation bot that blocks and unblocks rooms on command.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging)?;
    tracing::info!("{}", logs::config_loaded(&config.user_id, &config.moderation_room_id));

    // 3. Admin API + Processor
    let admin = Arc::new(AdminClient::new(&config.homeserver, &config.access_token)?);
    let processor = Arc::new(CommandProcessor::from_config(&config, admin.clone())?);

    // 4. Matrix Setup
    let client = infrastructure::matrix::connect(&config, &admin).await?;

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();
    let loop_processor = processor.clone();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let processor = loop_processor.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            if original_msg.sender == room.own_user_id() {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                tracing::debug!(
                    "Received message in {} from {}: {}",
                    room.room_id(),
                    original_msg.sender,
                    text_content.body
                );
                let chat = MatrixService::new(room);
                processor
                    .on_message(&chat, original_msg.sender.as_str(), &text_content.body)
                    .await;
            }
        }
    });

    // Accept invites to the moderation room only
    let invite_processor = processor.clone();
    client.add_event_handler(move |ev: StrippedRoomMemberEvent, room: Room| {
        let processor = invite_processor.clone();

        async move {
            if ev.content.membership != MembershipState::Invite
                || ev.state_key != room.own_user_id()
            {
                return;
            }

            let room_id = room.room_id().as_str();
            if room_id != processor.moderation_room_id() {
                tracing::info!("{}", logs::invite_ignored(room_id));
                return;
            }

            tracing::info!("{}", logs::invite_received(room_id));
            if let Err(e) = room.join().await {
                tracing::error!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 6. Sync Loop
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    Ok(())
}
