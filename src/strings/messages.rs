//! # Messages
//!
//! Replies the bot posts into the moderation room.

pub const UNKNOWN_COMMAND: &str =
    "Unknown command. Use '!roomba block <room_id>' or '!roomba unblock <room_id>'.";

pub fn action_succeeded(room_id: &str, past_tense: &str, local_users: &[String]) -> String {
    format!(
        "Room {room_id} {past_tense} successfully. Local users: {}",
        local_users.join(", ")
    )
}

pub fn action_failed(room_id: &str, verb: &str) -> String {
    format!("Failed to {verb} room {room_id}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_lists_users() {
        let users = vec!["@a:example.org".to_string(), "@c:example.org".to_string()];
        assert_eq!(
            action_succeeded("!abc:example.org", "blocked", &users),
            "Room !abc:example.org blocked successfully. Local users: @a:example.org, @c:example.org"
        );
    }

    #[test]
    fn test_success_with_no_users() {
        assert_eq!(
            action_succeeded("!abc:example.org", "unblocked", &[]),
            "Room !abc:example.org unblocked successfully. Local users: "
        );
    }

    #[test]
    fn test_failure() {
        assert_eq!(
            action_failed("!abc:example.org", "unblock"),
            "Failed to unblock room !abc:example.org."
        );
    }
}
