//! # Domain Types
//!
//! The parsed command and the outcome of acting on it.

/// One moderation instruction typed into the moderation room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Block(String),
    Unblock(String),
    Unknown,
}

/// Which way a room's block flag is being set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    Block,
    Unblock,
}

impl BlockAction {
    /// Value of the `block` field sent to the admin API.
    pub fn as_flag(self) -> bool {
        matches!(self, BlockAction::Block)
    }

    pub fn verb(self) -> &'static str {
        match self {
            BlockAction::Block => "block",
            BlockAction::Unblock => "unblock",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            BlockAction::Block => "blocked",
            BlockAction::Unblock => "unblocked",
        }
    }
}

/// Outcome of a block or unblock attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockResult {
    pub success: bool,
    pub room_id: String,
    pub blocked: bool,
    pub local_users: Vec<String>,
    /// `None` when the request failed before any response came back.
    pub http_status: Option<u16>,
}
