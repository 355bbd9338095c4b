//! # Log Lines
//!
//! Format helpers for the operator-facing log output.

pub fn config_loaded(user: &str, room: &str) -> String {
    format!("Loaded configuration for user {user}, moderating from {room}")
}

pub const SESSION_RESTORED: &str = "Session restored from access token";
pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("Received invite for room {room_id}")
}

pub fn invite_ignored(room_id: &str) -> String {
    format!("Ignoring invite to {room_id}: not the moderation room")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn reply_failed(room_id: &str, err: &str) -> String {
    format!("Failed to send reply to {room_id}: {err}")
}
