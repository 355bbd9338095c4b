//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! Also owns client construction: the bot never logs in with a password, it restores a
//! session from the configured access token.

use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::infrastructure::admin::AdminClient;
use crate::strings::logs;
use anyhow::{Context, Result};
use async_trait::async_trait;
use matrix_sdk::authentication::matrix::MatrixSession;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;
use matrix_sdk::ruma::{OwnedDeviceId, UserId};
use matrix_sdk::{Client, SessionMeta, SessionTokens};

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_plain(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }
}

/// Build a client for the configured homeserver and restore the bot's session into it.
pub async fn connect(config: &AppConfig, admin: &AdminClient) -> Result<Client> {
    let user_id = UserId::parse(config.user_id.as_str())
        .with_context(|| format!("Invalid user_id: {}", config.user_id))?;

    let device_id: OwnedDeviceId = match &config.device_id {
        Some(device_id) => device_id.as_str().into(),
        None => {
            let whoami = admin.whoami().await?;
            if whoami.user_id != config.user_id {
                tracing::warn!(
                    "Access token belongs to {}, not the configured {}",
                    whoami.user_id,
                    config.user_id
                );
            }
            whoami
                .device_id
                .context("Homeserver did not report a device_id; set one in the config")?
                .as_str()
                .into()
        }
    };

    let client = Client::builder()
        .homeserver_url(&config.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    let session = MatrixSession {
        meta: SessionMeta { user_id, device_id },
        tokens: SessionTokens {
            access_token: config.access_token.clone(),
            refresh_token: None,
        },
    };

    client
        .restore_session(session)
        .await
        .context("Failed to restore Matrix session")?;

    tracing::info!("{}", logs::SESSION_RESTORED);

    Ok(client)
}
