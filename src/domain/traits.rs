//! # Domain Traits
//!
//! Abstract interfaces for the two external collaborators (Chat, Admin API).
//! Allows for pluggable implementations in the Infrastructure layer.

use anyhow::Result;
use async_trait::async_trait;

/// Abstract interface for a Chat Provider bound to a single room (e.g., Matrix)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a plain-text message to the room, returning the new event ID
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Abstract interface for the homeserver's administrative HTTP API
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Set the block flag on a room. Returns the HTTP status of the response.
    async fn set_room_block(&self, room_id: &str, block: bool) -> Result<u16>;

    /// User IDs of every member of a room, in the order the server lists them.
    async fn room_members(&self, room_id: &str) -> Result<Vec<String>>;
}
