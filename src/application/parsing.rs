//! # Parsing Utils
//!
//! Turns a raw message body from the moderation room into a `Command`.

use crate::domain::types::Command;

pub const COMMAND_PREFIX: &str = "!roomba";

/// Parse a message body.
///
/// Returns `None` for anything that is not addressed to the bot. A `!roomba` line that
/// can't be understood (unknown verb, missing room ID) parses as `Command::Unknown`.
pub fn parse_command(body: &str) -> Option<Command> {
    let rest = body.strip_prefix(COMMAND_PREFIX)?;
    // `!roombafoo` is not ours, and neither is a bare `!roomba`
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut tokens = rest.split_whitespace();
    let command = match (tokens.next(), tokens.next()) {
        (Some("block"), Some(room_id)) => Command::Block(room_id.to_string()),
        (Some("unblock"), Some(room_id)) => Command::Unblock(room_id.to_string()),
        _ => Command::Unknown,
    };

    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_and_unblock() {
        assert_eq!(
            parse_command("!roomba block !abc:example.org"),
            Some(Command::Block("!abc:example.org".to_string()))
        );
        assert_eq!(
            parse_command("!roomba unblock !abc:example.org"),
            Some(Command::Unblock("!abc:example.org".to_string()))
        );
    }

    #[test]
    fn test_extra_whitespace_and_trailing_tokens() {
        assert_eq!(
            parse_command("!roomba   block\t!abc:example.org  please"),
            Some(Command::Block("!abc:example.org".to_string()))
        );
    }

    #[test]
    fn test_missing_room_id_is_unknown() {
        assert_eq!(parse_command("!roomba block"), Some(Command::Unknown));
        assert_eq!(parse_command("!roomba unblock   "), Some(Command::Unknown));
    }

    #[test]
    fn test_unknown_verbs() {
        assert_eq!(parse_command("!roomba frobnicate"), Some(Command::Unknown));
        assert_eq!(parse_command("!roomba "), Some(Command::Unknown));
        assert_eq!(
            parse_command("!roomba blockade !abc:example.org"),
            Some(Command::Unknown)
        );
        assert_eq!(
            parse_command("!roomba BLOCK !abc:example.org"),
            Some(Command::Unknown)
        );
    }

    #[test]
    fn test_not_a_command() {
        assert_eq!(parse_command("hello there"), None);
        assert_eq!(parse_command("!roomba"), None);
        assert_eq!(parse_command("!roombablock !abc:example.org"), None);
        assert_eq!(parse_command(" !roomba block !abc:example.org"), None);
        assert_eq!(parse_command(""), None);
    }
}
