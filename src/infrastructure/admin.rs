//! # Admin API Client
//!
//! Thin `reqwest` wrapper over the homeserver endpoints the bot needs: the Synapse room
//! block admin call, the client-server member list, and `whoami`.
//! Implements the `AdminApi` trait; status interpretation is left to the caller.

use crate::domain::traits::AdminApi;
use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct BlockRequest {
    block: bool,
}

/// `GET /rooms/{roomId}/members` response format
#[derive(Debug, Deserialize)]
struct MembersResponse {
    #[serde(default)]
    chunk: Vec<MemberEvent>,
}

#[derive(Debug, Deserialize)]
struct MemberEvent {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    state_key: Option<String>,
}

impl MembersResponse {
    fn into_user_ids(self) -> Vec<String> {
        self.chunk
            .into_iter()
            .filter_map(|event| event.user_id.or(event.state_key))
            .collect()
    }
}

/// `GET /account/whoami` response format
#[derive(Debug, Deserialize)]
pub struct WhoAmI {
    pub user_id: String,
    #[serde(default)]
    pub device_id: Option<String>,
}

#[derive(Clone)]
pub struct AdminClient {
    http: Client,
    homeserver: Url,
    access_token: String,
}

impl AdminClient {
    pub fn new(homeserver: &str, access_token: &str) -> Result<Self> {
        let homeserver = Url::parse(homeserver)
            .with_context(|| format!("Invalid homeserver URL: {homeserver}"))?;
        if homeserver.cannot_be_a_base() {
            bail!("Homeserver URL {homeserver} cannot carry a path");
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            homeserver,
            access_token: access_token.to_string(),
        })
    }

    /// Append path segments to the homeserver URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.homeserver.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Homeserver URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn block_url(&self, room_id: &str) -> Result<Url> {
        self.endpoint(&["_synapse", "admin", "v1", "rooms", room_id, "block"])
    }

    pub fn members_url(&self, room_id: &str) -> Result<Url> {
        self.endpoint(&["_matrix", "client", "r0", "rooms", room_id, "members"])
    }

    pub fn whoami_url(&self) -> Result<Url> {
        self.endpoint(&["_matrix", "client", "v3", "account", "whoami"])
    }

    /// Ask the homeserver who the access token belongs to.
    pub async fn whoami(&self) -> Result<WhoAmI> {
        let response = self
            .http
            .get(self.whoami_url()?)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .context("whoami request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("whoami returned HTTP {status}");
        }

        response
            .json::<WhoAmI>()
            .await
            .context("Failed to decode whoami response")
    }
}

#[async_trait]
impl AdminApi for AdminClient {
    async fn set_room_block(&self, room_id: &str, block: bool) -> Result<u16> {
        let url = self.block_url(room_id)?;
        tracing::debug!("PUT {} block={}", url, block);

        let response = self
            .http
            .put(url)
            .bearer_auth(&self.access_token)
            .json(&BlockRequest { block })
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if status.is_success() {
            // Synapse echoes the new state; only useful for debugging
            if let Ok(body) = response.text().await {
                tracing::debug!("Block response for {}: {}", room_id, body);
            }
        }

        Ok(status.as_u16())
    }

    async fn room_members(&self, room_id: &str) -> Result<Vec<String>> {
        let response = self
            .http
            .get(self.members_url(room_id)?)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if status.as_u16() != 200 {
            bail!("Member list for {room_id} returned HTTP {status}");
        }

        let members = response
            .json::<MembersResponse>()
            .await
            .context("Failed to decode member list")?;

        Ok(members.into_user_ids())
    }
}
